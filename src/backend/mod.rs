mod http;
mod service;
mod session;

pub use http::HttpBackend;
pub use service::{SaveOutcome, SaveRequest, SaveService};
pub use session::Session;
