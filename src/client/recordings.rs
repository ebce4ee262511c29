use crate::domain::{Page, Recording, RecordingFilter, Sid};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    pub async fn get_recording(&self, recording_sid: &Sid) -> Result<Recording, ZangError> {
        let body = self
            .execute(
                Method::Get,
                &format!("/Recordings/{recording_sid}"),
                Vec::new(),
            )
            .await?;
        Ok(transport::decode_recording(&body)?)
    }

    /// List recordings, optionally only those of one call.
    pub async fn list_recordings(
        &self,
        filter: &RecordingFilter,
    ) -> Result<Page<Recording>, ZangError> {
        let path = match &filter.call_sid {
            Some(call_sid) => format!("/Calls/{call_sid}/Recordings"),
            None => "/Recordings".to_owned(),
        };
        let mut params = Vec::new();
        transport::encode_paging(&mut params, &filter.paging);
        let body = self.execute(Method::Get, &path, params).await?;
        Ok(transport::decode_recording_page(&body)?)
    }

    /// Delete a recording and its audio.
    pub async fn delete_recording(&self, recording_sid: &Sid) -> Result<(), ZangError> {
        self.execute(
            Method::Delete,
            &format!("/Recordings/{recording_sid}"),
            Vec::new(),
        )
        .await?;
        Ok(())
    }
}
