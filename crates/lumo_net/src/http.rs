pub mod agent;
pub mod fetcher;
pub mod headers;
pub mod response;
