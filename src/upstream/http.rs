use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::Upstream;
use crate::error::ProxyError;

const DEFAULT_PING_PATH: &str = "/recipes/";

pub struct HttpUpstream {
    client: Client,
    name: String,
    base_url: String,
    request_timeout: Duration,
    ping_timeout: Duration,
}

impl HttpUpstream {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        request_timeout: Duration,
        ping_timeout: Duration,
    ) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .user_agent(concat!("fusion-meals/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpUpstream {
            client,
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout,
            ping_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    fn name(&self) -> &str {
        &self.name
    }

    async fn ping(&self) -> Result<(), ProxyError> {
        let response = self
            .client
            .get(self.url(DEFAULT_PING_PATH))
            .timeout(self.ping_timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ProxyError::StatusError {
            status: status.as_u16(),
            body,
        })
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ProxyError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, ProxyError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await?;

        self.decode(response).await
    }
}

impl HttpUpstream {
    async fn decode(&self, response: reqwest::Response) -> Result<Value, ProxyError> {
        // Check status code before attempting to parse JSON
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        debug!("{} response: {:.200}", self.name, text);
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn upstream(url: String) -> HttpUpstream {
        HttpUpstream::new(
            "test",
            url,
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_post_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/recipes/generate")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "diet_type": "vegan" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r##"{ "meal_plan": "# Day 1" }"##)
            .create_async()
            .await;

        let result = upstream(server.url())
            .post_json("/recipes/generate", &json!({ "diet_type": "vegan" }))
            .await
            .unwrap();

        assert_eq!(result["meal_plan"], "# Day 1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_json_status_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/recipes/generate")
            .with_status(422)
            .with_body(r#"{"detail": "cuisine1 is required"}"#)
            .create_async()
            .await;

        let err = upstream(server.url())
            .post_json("/recipes/generate", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("cuisine1 is required"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/global-cuisine/regions")
            .with_status(200)
            .with_body(r#"{ "regions": ["Italy", "Japan"] }"#)
            .create_async()
            .await;

        let result = upstream(server.url())
            .get_json("/global-cuisine/regions")
            .await
            .unwrap();

        assert_eq!(result["regions"][1], "Japan");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/")
            .with_status(503)
            .create_async()
            .await;

        let result = upstream(format!("{}/", server.url())).ping().await;

        assert!(matches!(
            result,
            Err(ProxyError::StatusError { status: 503, .. })
        ));
        mock.assert_async().await;
    }
}
