use std::io;

use tracing_subscriber::EnvFilter;
use zang::{Auth, CallOptions, CallbackUrl, MakeCall, RawPhoneNumber, ZangClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let to = required_env("ZANG_TO")?;
    let from = required_env("ZANG_FROM")?;
    let url = std::env::var("ZANG_VOICE_URL")
        .unwrap_or_else(|_| "https://example.com/voice.xml".to_owned());

    let client = ZangClient::new(Auth::from_env()?);
    let request = MakeCall::new(
        RawPhoneNumber::new(to)?,
        RawPhoneNumber::new(from)?,
        CallbackUrl::new(url)?,
        CallOptions {
            timeout: Some(30),
            ..Default::default()
        },
    );

    let call = client.make_call(&request).await?;
    println!("call {} is {}", call.sid, call.status);

    Ok(())
}
