//! The seam between the client and the network.

use plaid_api::Error;
use reqwest::{header::HeaderMap, Method, StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;

/// A fully resolved request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    #[allow(missing_docs)]
    pub method: Method,
    #[allow(missing_docs)]
    pub url: Url,
    #[allow(missing_docs)]
    pub headers: HeaderMap,
    /// The JSON encoded body.
    pub body: Vec<u8>,
}

/// The status and body of a response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    #[allow(missing_docs)]
    pub status: StatusCode,
    #[allow(missing_docs)]
    pub body: String,
}

/// Sends requests on behalf of a [`Client`](crate::Client).
///
/// Any status code, including non-2XX ones, must be returned as an [`HttpResponse`]. Only failing
/// to get a response at all is an error.
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Send `request` and return the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// The default [`Transport`], built on `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport with a default `reqwest` client and no middleware.
    pub fn new() -> Self {
        Self::from_client(reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build())
    }

    /// Create a transport from a preconfigured client, e.g. one with timeouts, proxies or
    /// retrying middleware.
    pub fn from_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
