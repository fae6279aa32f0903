use serde::{Deserialize, Serialize};

use crate::data::{Date, Uid};

/// Options that can be passed along with an authentication, reauthentication or upgrade request.
///
/// Only the fields that are set are sent, and no `options` object is sent at all when none are.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuthenticateOptions {
    /// A URL that Plaid will send webhooks to when new data is available for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    /// If `true`, the API answers a device based MFA challenge with the list of devices, rather
    /// than sending a code to the user's default device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<bool>,
    /// If `true`, only the authentication is performed and no data is fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_only: Option<bool>,
    /// Whether pending transactions should be included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    /// Only fetch transactions posted on or after this date, in ISO 8601 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    /// Only fetch transactions posted on or before this date, in ISO 8601 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl AuthenticateOptions {
    /// Returns `true` when no option is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Options that can be passed along with a data fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FetchDataOptions {
    /// Whether pending transactions should be included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    /// Restrict the data to a single account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Uid>,
    /// Only fetch data on or after this date, in ISO 8601 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Date>,
    /// Only fetch data on or before this date, in ISO 8601 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Date>,
}

impl FetchDataOptions {
    /// Returns `true` when no option is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_options_are_empty() {
        assert!(AuthenticateOptions::default().is_empty());
        assert!(FetchDataOptions::default().is_empty());
        assert_eq!(
            serde_json::to_value(AuthenticateOptions::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn serialize_only_set_fields() {
        let options = AuthenticateOptions {
            webhook: Some("https://example.com/hook".to_string()),
            login_only: Some(true),
            ..Default::default()
        };

        assert!(!options.is_empty());
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "webhook": "https://example.com/hook",
                "login_only": true
            })
        );

        let decoded: AuthenticateOptions = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, options);
    }

    #[test]
    fn fetch_options_round_trip() {
        let options = FetchDataOptions {
            pending: Some(false),
            gte: Some("2016-01-01".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({ "pending": false, "gte": "2016-01-01" }));
        assert_eq!(
            serde_json::from_value::<FetchDataOptions>(value).unwrap(),
            options
        );
    }
}
