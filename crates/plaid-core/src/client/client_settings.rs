use std::fmt;

use serde::{Deserialize, Serialize};

const SANDBOX_ENDPOINT: &str = "https://tartan.plaid.com";
const PRODUCTION_ENDPOINT: &str = "https://api.plaid.com";

/// Basic client behavior settings. These settings specify the targeted Plaid environment and the
/// credentials of the API client. They are optional and uneditable once the client is
/// initialized.
///
/// Defaults to the sandbox
///
/// ```
/// # use plaid_core::ClientSettings;
/// let settings = ClientSettings {
///     endpoint: "https://tartan.plaid.com".to_string(),
///     client_id: "test_id".to_string(),
///     secret: "test_secret".to_string(),
///     user_agent: "Plaid Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the targeted Plaid environment. Defaults to `https://tartan.plaid.com`
    pub endpoint: String,
    /// Your application's `client_id`. Defaults to `test_id`
    pub client_id: String,
    /// Your application's `secret`. Defaults to `test_secret`
    pub secret: String,
    /// The user_agent to send to Plaid. Defaults to `Plaid Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: SANDBOX_ENDPOINT.into(),
            client_id: "test_id".into(),
            secret: "test_secret".into(),
            user_agent: "Plaid Rust-SDK".into(),
        }
    }
}

impl ClientSettings {
    /// Settings targeting the production environment.
    pub fn production(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            endpoint: PRODUCTION_ENDPOINT.into(),
            client_id: client_id.into(),
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("endpoint", &self.endpoint)
            .field("client_id", &self.client_id)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
