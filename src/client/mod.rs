//! HTTP client for the TROCCO REST API.
//!
//! [`TroccoClient`] issues single authenticated requests and decodes JSON
//! responses. List endpoints are walked with [`TroccoClient::get_all`], which
//! follows `next_cursor` through [`collect_pages`].

mod pagination;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::AppError;
use crate::models::Page;

pub use pagination::collect_pages;

/// Authenticated client bound to one TROCCO origin.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct TroccoClient {
    http: reqwest::Client,
    base_url: Url,
    max_pages: u32,
}

impl TroccoClient {
    /// Build a client from configuration.
    ///
    /// The API key is optional here. Without it no `Authorization` header is
    /// sent and the service answers every call with 401.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = config.api.key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Token {key}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.api.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.api.base_url)?,
            max_pages: config.pagination.max_pages,
        })
    }

    /// Resolve an endpoint from path segments.
    ///
    /// Each segment is percent-encoded, so ids containing `/`, `?` or `#`
    /// cannot escape their position in the path. `.` and `..` are rejected
    /// since `url` would silently drop them.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(AppError::InvalidArguments(format!(
                "{segment:?} is not a valid path segment"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform one request and decode the JSON body as `T`.
    ///
    /// Any non-success status fails with [`AppError::RequestFailed`]; the body
    /// of a failed response is not read.
    pub async fn request<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, %url, "Sending request");

        let mut builder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "Request failed");
            return Err(AppError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// GET a single resource.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.request::<T, ()>(Method::GET, url, None).await
    }

    /// PATCH a resource with a JSON body.
    pub async fn patch<T, B>(&self, url: Url, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, url, Some(body)).await
    }

    /// GET every page of a list endpoint and concatenate the items.
    ///
    /// `query` is sent with every page. From the second page on, `cursor` is
    /// replaced by the previous page's `next_cursor`.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, AppError> {
        collect_pages(self.max_pages, |cursor| {
            let page_url = with_query(&url, query, cursor.as_deref());
            async move { self.get::<Page<T>>(page_url).await }
        })
        .await
    }
}

/// Append the fixed query parameters plus an optional cursor override.
fn with_query(url: &Url, query: &[(&str, String)], cursor: Option<&str>) -> Url {
    let mut pairs: Vec<(&str, &str)> = query
        .iter()
        .filter(|(k, _)| cursor.is_none() || *k != "cursor")
        .map(|(k, v)| (*k, v.as_str()))
        .collect();
    if let Some(cursor) = cursor {
        pairs.push(("cursor", cursor));
    }

    let mut url = url.clone();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> TroccoClient {
        let mut config = Config::default();
        config.api.base_url = base_url.to_string();
        TroccoClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client("https://trocco.io");
        let url = client.endpoint(&["api", "users"]).unwrap();
        assert_eq!(url.as_str(), "https://trocco.io/api/users");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("http://localhost:8080/proxy/");
        let url = client.endpoint(&["api", "pipeline_definitions", "7"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/pipeline_definitions/7");
    }

    #[test]
    fn test_endpoint_encodes_reserved_characters() {
        let client = client("https://trocco.io");
        let url = client
            .endpoint(&["api", "datamart_definitions", "1/../../users?x=#"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://trocco.io/api/datamart_definitions/1%2F..%2F..%2Fusers%3Fx=%23"
        );
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        let client = client("https://trocco.io");
        for id in ["", ".", ".."] {
            assert!(matches!(
                client.endpoint(&["api", "datamart_definitions", id]),
                Err(AppError::InvalidArguments(_))
            ));
        }
    }

    #[test]
    fn test_with_query_first_page_uses_fixed_params() {
        let url = Url::parse("https://trocco.io/api/users").unwrap();
        let query = [("limit", "50".to_string()), ("cursor", "start".to_string())];
        let first = with_query(&url, &query, None);
        assert_eq!(first.as_str(), "https://trocco.io/api/users?limit=50&cursor=start");
    }

    #[test]
    fn test_with_query_cursor_overrides_fixed_cursor() {
        let url = Url::parse("https://trocco.io/api/users").unwrap();
        let query = [("limit", "50".to_string()), ("cursor", "start".to_string())];
        let next = with_query(&url, &query, Some("abc"));
        assert_eq!(next.as_str(), "https://trocco.io/api/users?limit=50&cursor=abc");
    }

    #[test]
    fn test_with_query_without_params_leaves_url_untouched() {
        let url = Url::parse("https://trocco.io/api/users").unwrap();
        assert_eq!(with_query(&url, &[], None).as_str(), "https://trocco.io/api/users");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(
            TroccoClient::new(&config),
            Err(AppError::InvalidUrl(_))
        ));
    }
}
