use crate::domain::{CreateSipDomain, Page, Paging, SipDomain, Sid};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    pub async fn create_domain(&self, request: &CreateSipDomain) -> Result<SipDomain, ZangError> {
        let params = transport::encode_create_domain_form(request);
        let body = self.execute(Method::Post, "/SIP/Domains", params).await?;
        Ok(transport::decode_domain(&body)?)
    }

    pub async fn get_domain(&self, domain_sid: &Sid) -> Result<SipDomain, ZangError> {
        let body = self
            .execute(
                Method::Get,
                &format!("/SIP/Domains/{domain_sid}"),
                Vec::new(),
            )
            .await?;
        Ok(transport::decode_domain(&body)?)
    }

    pub async fn list_domains(&self, paging: &Paging) -> Result<Page<SipDomain>, ZangError> {
        let mut params = Vec::new();
        transport::encode_paging(&mut params, paging);
        let body = self.execute(Method::Get, "/SIP/Domains", params).await?;
        Ok(transport::decode_domain_page(&body)?)
    }

    pub async fn delete_domain(&self, domain_sid: &Sid) -> Result<(), ZangError> {
        self.execute(
            Method::Delete,
            &format!("/SIP/Domains/{domain_sid}"),
            Vec::new(),
        )
        .await?;
        Ok(())
    }
}
