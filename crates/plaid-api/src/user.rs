use serde::{Deserialize, Serialize};

use crate::data::AccessToken;

/// An authorized user, i.e. one end-user and institution pairing.
///
/// A `User` is returned once authentication has started (see
/// [`Response::Mfa`](crate::Response::Mfa) and
/// [`Response::Authenticated`](crate::Response::Authenticated)). Store the access token and pass
/// the user back into every later request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    /// The access token for this user.
    pub access_token: AccessToken,
}

impl User {
    /// Create a user from a previously stored access token.
    pub fn new(access_token: impl Into<AccessToken>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}
