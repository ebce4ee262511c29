//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod accounts;
mod calls;
mod common;
mod conferences;
mod fraud_control;
mod money;
mod recordings;
mod sip_domains;
mod sms;
mod transcriptions;
mod usages;

pub use accounts::{decode_account, encode_update_account_form};
pub use calls::{
    decode_call, decode_call_page, encode_call_filter_query, encode_interrupt_call_form,
    encode_make_call_form, encode_send_digits_form,
};
pub use common::{TransportError, decode_api_error, encode_paging};
pub use conferences::{decode_conference, decode_conference_page, encode_conference_filter_query};
pub use fraud_control::{decode_fraud_rule, decode_fraud_rule_page, encode_fraud_rule_form};
pub use recordings::{decode_recording, decode_recording_page};
pub use sip_domains::{decode_domain, decode_domain_page, encode_create_domain_form};
pub use sms::{decode_sms, decode_sms_page, encode_send_sms_form, encode_sms_filter_query};
pub use transcriptions::{
    decode_transcription, decode_transcription_page, encode_transcribe_form,
    encode_transcription_filter_query,
};
pub use usages::{decode_usage, decode_usage_page, encode_usage_filter_query};
