use serde::Deserialize;

/// A user's email, including meta data returned by Plaid.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Whether or not the user has chosen this as their primary email.
    pub primary: bool,
    /// The designated type for this email (e.g personal, home).
    #[serde(rename = "type")]
    pub email_type: String,
    /// The actual email address.
    #[serde(rename = "data")]
    pub email: String,
}
