use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::types::{NewPost, Post, PostId};
use crate::config::ApiConfig;

/// Client for the posts service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    key: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            key: config.key.clone(),
        })
    }

    /// `GET /posts`
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.posts_url()?;
        let response = self.send(self.client.get(url.clone()), &url).await?;
        decode(response, &url).await
    }

    /// `GET /posts/{id}`
    pub async fn get_post(&self, id: &PostId) -> Result<Post, ApiError> {
        let url = self.post_url(id)?;
        let response = self.send(self.client.get(url.clone()), &url).await?;
        decode(response, &url).await
    }

    /// `POST /posts`. The response body carries nothing the caller needs.
    pub async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        let url = self.posts_url()?;
        self.send(self.client.post(url.clone()).json(post), &url)
            .await
            .map(drop)
    }

    /// `DELETE /posts/{id}`. The response body is discarded.
    pub async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.post_url(id)?;
        self.send(self.client.delete(url.clone()), &url)
            .await
            .map(drop)
    }

    /// Collection URL, `{base}/posts?key=...`.
    pub fn posts_url(&self) -> Result<Url, ApiError> {
        self.url(&["posts"])
    }

    /// Item URL, `{base}/posts/{id}?key=...`.
    pub fn post_url(&self, id: &PostId) -> Result<Url, ApiError> {
        let id = id.to_string();
        self.url(&["posts", id.as_str()])
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("key", &self.key);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, ApiError> {
        let target = redacted(url);
        tracing::debug!(url = %target, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: target.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(url = %target, status = status.as_u16(), "Request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::trace!(url = %target, status = status.as_u16(), "Request succeeded");
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|source| ApiError::Decode {
        url: redacted(url),
        source,
    })
}

/// URL without the query string, so the service key never reaches the logs.
fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            key: "secret".to_string(),
            connect_timeout_seconds: 5,
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn posts_url_appends_key() {
        let url = client("https://blog.example.com/api").posts_url().unwrap();
        assert_eq!(url.as_str(), "https://blog.example.com/api/posts?key=secret");
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let url = client("https://blog.example.com/api/").posts_url().unwrap();
        assert_eq!(url.as_str(), "https://blog.example.com/api/posts?key=secret");
    }

    #[test]
    fn post_url_encodes_text_ids() {
        let api = client("https://blog.example.com/api");
        let url = api.post_url(&PostId::Number(42)).unwrap();
        assert_eq!(url.as_str(), "https://blog.example.com/api/posts/42?key=secret");

        let url = api.post_url(&PostId::Text("a/b".to_string())).unwrap();
        assert_eq!(url.path(), "/api/posts/a%2Fb");
    }

    #[test]
    fn invalid_base_is_reported() {
        let err = client("not a url").posts_url().unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn redacted_drops_the_key() {
        let url = client("https://blog.example.com/api").posts_url().unwrap();
        assert_eq!(redacted(&url), "https://blog.example.com/api/posts");
    }
}
