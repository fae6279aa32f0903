//! Decoding of API responses into the stage of the user lifecycle they represent.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    mfa::{self, api::MfaApiResponse},
    payload::Intention,
    Error, Product, User,
};

/// Represents the response from the last API request.
///
/// This does not encapsulate any errors, rather it indicates different stages of the user
/// lifecycle. For error handling, `Result` is used alongside [`Error`].
#[derive(Debug)]
pub enum Response<P: Product> {
    /// Waiting on a multi-factor authentication step from the user.
    Mfa(User, mfa::Challenge),
    /// The request was made for a product that is not enabled for the user. Upgrade the user
    /// to gain access to it.
    ProductNotEnabled,
    /// The available data of the product was fetched successfully.
    ProductData(P::Data),
    /// The user was authenticated and the product data was retrieved along with it.
    Authenticated(User, P::Data),
    /// The user was removed from the product.
    Removed,
    /// Nothing is known about the user and no requests have been made.
    Unknown,
}

impl<P: Product> Default for Response<P> {
    fn default() -> Self {
        Response::Unknown
    }
}

/// The error body returned when the product isn't enabled for the user.
#[derive(Deserialize, Debug)]
struct ProductNotEnabledApiResponse {
    code: u32,
    #[allow(dead_code)]
    message: String,
}

const PRODUCT_NOT_ENABLED: u32 = 1600;

/// The `access_token` that accompanies product data after authenticating.
#[derive(Deserialize)]
struct AuthenticatedApiResponse {
    access_token: String,
}

/// A body carrying `access_token`, `type` and `mfa` is an MFA challenge, even when the challenge
/// itself can't be decoded.
fn is_mfa_challenge(value: &Value) -> bool {
    ["access_token", "type", "mfa"]
        .iter()
        .all(|key| value.get(key).is_some())
}

/// Decode the body of a response to `intention` for `product`.
///
/// Any non-2XX status is an [`Error::UnsuccessfulResponse`], regardless of the body. Otherwise
/// the body is matched, in order, against an MFA challenge, the product-not-enabled error and
/// finally the product's data.
pub fn decode<P: Product>(
    product: &P,
    intention: Intention,
    status: StatusCode,
    body: &str,
) -> Result<Response<P>, Error> {
    if !status.is_success() {
        return Err(Error::UnsuccessfulResponse {
            status,
            body: body.to_string(),
        });
    }

    if intention == Intention::RemoveUser && body.trim().is_empty() {
        return Ok(Response::Removed);
    }

    let invalid = |source: serde_json::Error| Error::InvalidResponse {
        product: product.description(),
        body: body.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(body).map_err(invalid)?;

    if is_mfa_challenge(&value) {
        let (user, challenge) = MfaApiResponse::deserialize(&value)
            .and_then(MfaApiResponse::into_challenge)
            .map_err(invalid)?;
        return Ok(Response::Mfa(user, challenge));
    }

    if matches!(
        ProductNotEnabledApiResponse::deserialize(&value),
        Ok(ProductNotEnabledApiResponse { code: PRODUCT_NOT_ENABLED, .. })
    ) {
        return Ok(Response::ProductNotEnabled);
    }

    match intention {
        Intention::RemoveUser => Ok(Response::Removed),
        Intention::FetchData => P::Data::deserialize(&value)
            .map(Response::ProductData)
            .map_err(invalid),
        Intention::Authenticate
        | Intention::Reauthenticate
        | Intention::Upgrade
        | Intention::StepMfa => {
            let user = AuthenticatedApiResponse::deserialize(&value).map_err(invalid)?;
            let data = P::Data::deserialize(&value).map_err(invalid)?;
            Ok(Response::Authenticated(User::new(user.access_token), data))
        }
    }
}
