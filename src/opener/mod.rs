use crate::app::{Result, RunnelError};

/// Hands a link to an external browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the platform's default handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| RunnelError::Open(e.to_string()))
    }
}
