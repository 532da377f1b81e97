use crate::domain::ports::HttpProbe;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `HttpProbe` over reqwest with library-default redirect and retry behavior.
///
/// The client is built inside `fetch_status` so that TLS backend or builder
/// failures are reported as probe failures like any network error.
#[derive(Debug, Clone, Default)]
pub struct ReqwestProbe {
    timeout: Option<Duration>,
}

impl ReqwestProbe {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    fn client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn fetch_status(&self, url: &str) -> Result<u16> {
        let client = self.client()?;
        let response = client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response.status().as_u16())
    }
}
