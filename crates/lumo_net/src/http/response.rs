use crate::http::headers::Headers;

#[derive(Debug, Default)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    #[must_use]
    pub fn new() -> Response {
        Self {
            status: 0,
            headers: Default::default(),
            body: vec![],
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A response synthesized from a local read, for instance a file:// fetch
impl From<Vec<u8>> for Response {
    fn from(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: Default::default(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok() {
        let mut response = Response::from(vec![]);
        assert!(response.is_ok());

        response.status = 404;
        assert!(!response.is_ok());

        response.status = 299;
        assert!(response.is_ok());
    }
}
