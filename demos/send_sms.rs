use std::io;

use tracing_subscriber::EnvFilter;
use zang::{Auth, MessageBody, RawPhoneNumber, SendSms, SmsOptions, ZangClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let to = std::env::var("ZANG_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZANG_TO environment variable is required",
        )
    })?;
    let from = std::env::var("ZANG_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZANG_FROM environment variable is required",
        )
    })?;
    let message =
        std::env::var("ZANG_MESSAGE").unwrap_or_else(|_| "Hello from the zang demo.".to_owned());

    let client = ZangClient::new(Auth::from_env()?);
    let request = SendSms::new(
        RawPhoneNumber::new(to)?,
        RawPhoneNumber::new(from)?,
        MessageBody::new(message)?,
        SmsOptions {
            allow_multiple: true,
            ..Default::default()
        },
    );

    let sms = client.send_sms(&request).await?;
    println!("sms {} is {}", sms.sid, sms.status);

    Ok(())
}
