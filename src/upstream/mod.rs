mod http;
mod resilient;

pub use http::HttpUpstream;
pub use resilient::{ResilientUpstream, RetryPolicy};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProxyError;

/// A JSON-over-HTTP backend the proxy routes forward to
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Cheap GET used to wake a cold-started backend; the body is ignored
    async fn ping(&self) -> Result<(), ProxyError>;

    /// POST `body` to `path` and return the decoded JSON response
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ProxyError>;

    /// GET `path` and return the decoded JSON response
    async fn get_json(&self, path: &str) -> Result<Value, ProxyError>;
}
