use std::sync::Arc;

use plaid_api::{decode, resolve, ClientCredentials, Error, Payload, Product, Response};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Url,
};
use tracing::{debug, instrument};

use super::ClientSettings;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};

/// The main struct to interact with the Plaid API.
///
/// Cloning is cheap and returns a client sharing the same transport.
#[derive(Debug, Clone)]
pub struct Client {
    settings: Arc<ClientSettings>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new Plaid client sending requests with [`ReqwestTransport`].
    pub fn new(settings: Option<ClientSettings>) -> Self {
        Self::with_transport(settings, Arc::new(ReqwestTransport::new()))
    }

    /// Create a new Plaid client sending requests through `transport`.
    pub fn with_transport(settings: Option<ClientSettings>, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings: Arc::new(settings.unwrap_or_default()),
            transport,
        }
    }

    /// The settings this client was created with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Make a request to the given [`Product`], using a [`Payload`] describing the intention of
    /// the operation.
    ///
    /// Non-2XX responses are returned as [`Error::UnsuccessfulResponse`]. An MFA challenge or a
    /// product that isn't enabled for the user are regular [`Response`]s.
    #[instrument(
        skip(self, product, payload),
        fields(product = product.description(), intention = %payload.intention())
    )]
    pub async fn request<P: Product>(
        &self,
        product: P,
        payload: Payload,
    ) -> Result<Response<P>, Error> {
        let credentials = ClientCredentials {
            client_id: &self.settings.client_id,
            secret: &self.settings.secret,
        };
        let resolved = resolve(&credentials, &product, &payload)?;
        let url = self.url(resolved.path)?;

        debug!(method = %resolved.method, path = resolved.path, "Sending request");

        let response = self
            .transport
            .send(HttpRequest {
                method: resolved.method,
                url,
                headers: self.headers()?,
                body: resolved.body,
            })
            .await?;

        debug!(status = %response.status, "Received response");

        decode(&product, payload.intention(), response.status, &response.body)
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        let url = format!("{}{}", self.settings.endpoint.trim_end_matches('/'), path);
        Url::parse(&url).map_err(|e| Error::InternalError(format!("Invalid url `{url}`: {e}")))
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&self.settings.user_agent)
                .map_err(|e| Error::InternalError(format!("Invalid user agent: {e}")))?,
        );
        Ok(headers)
    }
}
