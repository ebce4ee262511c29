//! Prints the InboundXML a voice webhook would return for a small IVR menu.

use zang::inboundxml::{
    DialOptions, GatherOptions, HttpMethod, InboundXmlError, PauseOptions, RecordOptions,
    Response, SayOptions, Scope, Voice,
};

fn main() -> Result<(), InboundXmlError> {
    let response = Response::builder()
        .gather(GatherOptions {
            action: Some("https://example.com/ivr/choice".to_owned()),
            method: Some(HttpMethod::Post),
            num_digits: Some(1),
            ..Default::default()
        })
        .say(
            "Press 1 for sales. Press 2 to leave a message.",
            SayOptions {
                voice: Some(Voice::Man),
                ..Default::default()
            },
        )
        .pause(PauseOptions { length: Some(2) })
        .end()
        .say("We did not receive your choice.", SayOptions::default())
        .dial_to("+15555550100", DialOptions::default())
        .record(RecordOptions {
            max_length: Some(120),
            transcribe: Some(true),
            ..Default::default()
        })
        .build();

    println!("{}", response.to_xml_document()?);
    Ok(())
}
