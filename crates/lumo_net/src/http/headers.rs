use std::collections::HashMap;

#[derive(Default, Debug, Clone)]
pub struct Headers {
    headers: HashMap<String, String>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Headers {
        Headers {
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Headers {
        Headers {
            headers: HashMap::with_capacity(capacity),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.headers.insert(key.to_lowercase(), value.to_string());
    }

    /// Header lookup is case-insensitive
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.headers.get(&key.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
