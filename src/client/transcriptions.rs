use crate::domain::{Page, Sid, TranscribeOptions, Transcription, TranscriptionFilter};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    pub async fn get_transcription(
        &self,
        transcription_sid: &Sid,
    ) -> Result<Transcription, ZangError> {
        let body = self
            .execute(
                Method::Get,
                &format!("/Transcriptions/{transcription_sid}"),
                Vec::new(),
            )
            .await?;
        Ok(transport::decode_transcription(&body)?)
    }

    pub async fn list_transcriptions(
        &self,
        filter: &TranscriptionFilter,
    ) -> Result<Page<Transcription>, ZangError> {
        let params = transport::encode_transcription_filter_query(filter);
        let body = self.execute(Method::Get, "/Transcriptions", params).await?;
        Ok(transport::decode_transcription_page(&body)?)
    }

    /// Request a transcription of an existing recording.
    ///
    /// The returned transcription is usually still `in-progress`; the text
    /// arrives at the callback or through [`ZangClient::get_transcription`].
    pub async fn transcribe_recording(
        &self,
        recording_sid: &Sid,
        options: &TranscribeOptions,
    ) -> Result<Transcription, ZangError> {
        let params = transport::encode_transcribe_form(options);
        let body = self
            .execute(
                Method::Post,
                &format!("/Recordings/{recording_sid}/Transcriptions"),
                params,
            )
            .await?;
        Ok(transport::decode_transcription(&body)?)
    }
}
