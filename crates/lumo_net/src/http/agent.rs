use std::fmt::Debug;
use std::future::Future;
use std::io::Read;

use ureq::Agent;

use lumo_shared::types::Result;

use crate::http::headers::Headers;
use crate::http::response::Response;

/// An HTTP agent behind an async facade. Completion of the returned future
/// is the signal that the response is fully received.
pub trait RequestAgent: Debug {
    type Error: std::error::Error;

    fn new() -> Self;

    fn get(&self, url: &str) -> impl Future<Output = Result<Response>>;
}

#[derive(Debug)]
pub struct UreqAgent {
    agent: Agent,
}

impl From<Agent> for UreqAgent {
    fn from(value: Agent) -> Self {
        Self { agent: value }
    }
}

impl RequestAgent for UreqAgent {
    type Error = ureq::Error;

    fn new() -> Self {
        Agent::new().into()
    }

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self.agent.get(url).call()?;
        response.try_into()
    }
}

fn get_headers(response: &ureq::Response) -> Headers {
    let names = response.headers_names();

    let mut headers = Headers::with_capacity(names.len());

    for name in names {
        let value = response.header(&name).unwrap_or_default();

        headers.set(&name, value);
    }

    headers
}

impl TryFrom<ureq::Response> for Response {
    type Error = anyhow::Error;

    fn try_from(value: ureq::Response) -> std::result::Result<Self, Self::Error> {
        let mut this = Self {
            status: value.status(),
            headers: get_headers(&value),
            body: Vec::new(),
        };

        value.into_reader().read_to_end(&mut this.body)?;

        Ok(this)
    }
}
