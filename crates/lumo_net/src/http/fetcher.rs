use url::{ParseError, Url};

use lumo_shared::types::Result;

use crate::errors::Error;
use crate::http::agent::{RequestAgent, UreqAgent};
use crate::http::response::Response;

/// Fetches resources relative to the page base URL
#[derive(Debug)]
pub struct Fetcher {
    base_url: Url,
    agent: UreqAgent,
}

impl Fetcher {
    pub fn new(base: Url) -> Self {
        Self {
            base_url: base,
            agent: UreqAgent::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_url(&self, url: &Url) -> Result<Response> {
        let scheme = url.scheme();

        let resp = if scheme == "http" || scheme == "https" {
            self.agent.get(url.as_str()).await?
        } else if scheme == "file" {
            let body = std::fs::read(url.path()).map_err(Error::IO)?;

            Response::from(body)
        } else {
            return Err(Error::UnsupportedScheme(scheme.to_string()).into());
        };

        Ok(resp)
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        let url = self.parse_url(url)?;

        self.get_url(&url).await
    }

    fn parse_url(&self, url: &str) -> Result<Url> {
        let mut parsed_url = Url::parse(url);

        if parsed_url == Err(ParseError::RelativeUrlWithoutBase) {
            parsed_url = self.base_url.join(url);
        }

        Ok(parsed_url.map_err(Error::Url)?)
    }
}
