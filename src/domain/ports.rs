use crate::utils::error::Result;
use async_trait::async_trait;

/// Issues the single GET and reports the response status.
#[async_trait]
pub trait HttpProbe: Send + Sync {
    async fn fetch_status(&self, url: &str) -> Result<u16>;
}

pub trait ProbeTarget: Send + Sync {
    fn endpoint(&self) -> &str;
    fn label(&self) -> &str;
}
