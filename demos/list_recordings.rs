use tracing_subscriber::EnvFilter;
use zang::{Auth, PageSize, Paging, RecordingFilter, Sid, ZangClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let call_sid = std::env::var("ZANG_CALL_SID")
        .ok()
        .map(Sid::new)
        .transpose()?;

    let client = ZangClient::new(Auth::from_env()?);
    let mut filter = RecordingFilter {
        call_sid,
        paging: Paging::new(0, PageSize::new(20)?),
    };

    loop {
        let page = client.list_recordings(&filter).await?;
        for recording in &page.items {
            println!(
                "{} duration={:?} url={}",
                recording.sid,
                recording.duration,
                recording.recording_url.as_deref().unwrap_or("-")
            );
        }
        if !page.has_next() {
            break;
        }
        filter.paging.page = Some(page.page + 1);
    }

    Ok(())
}
