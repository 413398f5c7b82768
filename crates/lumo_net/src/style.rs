use log::debug;
use url::Url;

use lumo_interface::loader::StyleLoader;
use lumo_shared::types::Result;

use crate::errors::Error;
use crate::http::fetcher::Fetcher;

/// Loads stylesheets through a [`Fetcher`]. The load future resolves once
/// the stylesheet body is received; a non-2xx status is a load failure.
#[derive(Debug)]
pub struct StyleFetcher {
    fetcher: Fetcher,
}

impl StyleFetcher {
    pub fn new(base: Url) -> Self {
        Self {
            fetcher: Fetcher::new(base),
        }
    }

    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }
}

impl StyleLoader for StyleFetcher {
    async fn load(&self, href: &str) -> Result<()> {
        let response = self.fetcher.get(href).await?;

        if !response.is_ok() {
            return Err(Error::BadStatus(response.status, href.to_string()).into());
        }

        debug!("loaded stylesheet {} ({} bytes)", href, response.body.len());

        Ok(())
    }
}
