//! Request payloads and their encoding into HTTP requests.
//!
//! A [`Payload`] describes what the caller wants to do. [`resolve`] validates it and turns it,
//! together with the client credentials and the product, into a [`ResolvedRequest`] that any
//! transport can send.

use std::fmt;

use reqwest::Method;

use crate::{
    data::{Institution, Password, Pin, Username},
    mfa, Error, Product, ProductKind, User,
};

mod api;
mod options;

pub use options::{AuthenticateOptions, FetchDataOptions};

use api::PayloadApiRequest;

/// The credentials a user logs into their institution with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The institution type, e.g. `"chase"`.
    pub institution: Institution,
    /// The user's bank account username.
    pub username: Username,
    /// The user's bank account password.
    pub password: Password,
    /// The PIN, only required by some institutions.
    pub pin: Option<Pin>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("institution", &self.institution)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Represents one of the different types of payloads that can be sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Authenticate a new user with their institution.
    Authenticate {
        #[allow(missing_docs)]
        credentials: Credentials,
        #[allow(missing_docs)]
        options: AuthenticateOptions,
    },
    /// Submit new credentials for an existing user, e.g. after a password change.
    Reauthenticate {
        #[allow(missing_docs)]
        user: User,
        #[allow(missing_docs)]
        credentials: Credentials,
        #[allow(missing_docs)]
        options: AuthenticateOptions,
    },
    /// Enable an additional product for an existing user.
    Upgrade {
        #[allow(missing_docs)]
        user: User,
        /// The product to enable, must be the product the request is made for.
        target: ProductKind,
        #[allow(missing_docs)]
        options: AuthenticateOptions,
    },
    /// Remove a user from the product.
    RemoveUser {
        #[allow(missing_docs)]
        user: User,
    },
    /// Answer an MFA challenge.
    StepMfa {
        #[allow(missing_docs)]
        user: User,
        /// The challenge being answered, as returned by the previous request.
        challenge: mfa::Challenge,
        /// The answer to the challenge.
        response: mfa::Response,
    },
    /// Fetch the product data of an authenticated user.
    FetchData {
        #[allow(missing_docs)]
        user: User,
        #[allow(missing_docs)]
        options: FetchDataOptions,
    },
}

/// The kind of operation a [`Payload`] performs, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intention {
    #[allow(missing_docs)]
    Authenticate,
    #[allow(missing_docs)]
    Reauthenticate,
    #[allow(missing_docs)]
    Upgrade,
    #[allow(missing_docs)]
    RemoveUser,
    #[allow(missing_docs)]
    StepMfa,
    #[allow(missing_docs)]
    FetchData,
}

impl Intention {
    /// All intentions, in a stable order.
    pub const ALL: [Intention; 6] = [
        Intention::Authenticate,
        Intention::Reauthenticate,
        Intention::Upgrade,
        Intention::RemoveUser,
        Intention::StepMfa,
        Intention::FetchData,
    ];

    /// The HTTP method used for this intention. It never depends on the product.
    pub fn method(self) -> Method {
        match self {
            Intention::RemoveUser => Method::DELETE,
            Intention::Authenticate
            | Intention::Reauthenticate
            | Intention::Upgrade
            | Intention::StepMfa
            | Intention::FetchData => Method::POST,
        }
    }
}

impl fmt::Display for Intention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Payload {
    /// The intention of this payload.
    pub fn intention(&self) -> Intention {
        match self {
            Payload::Authenticate { .. } => Intention::Authenticate,
            Payload::Reauthenticate { .. } => Intention::Reauthenticate,
            Payload::Upgrade { .. } => Intention::Upgrade,
            Payload::RemoveUser { .. } => Intention::RemoveUser,
            Payload::StepMfa { .. } => Intention::StepMfa,
            Payload::FetchData { .. } => Intention::FetchData,
        }
    }

    fn validate<P: Product>(&self) -> Result<(), Error> {
        match self {
            Payload::StepMfa {
                challenge,
                response,
                ..
            } => challenge.check_response(response),
            Payload::Upgrade { target, .. } if *target != P::KIND => {
                Err(Error::InvalidPayload(format!(
                    "cannot upgrade to {target} through a {} request",
                    P::KIND
                )))
            }
            _ => Ok(()),
        }
    }
}

/// The credentials identifying the API client, sent with every request.
#[derive(Clone, Copy)]
pub struct ClientCredentials<'a> {
    /// The client id.
    pub client_id: &'a str,
    /// The client secret.
    pub secret: &'a str,
}

impl fmt::Debug for ClientCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// A request ready to be sent, independent of any HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint path, with leading slash, to join onto the API base URL.
    pub path: &'static str,
    /// The JSON encoded body.
    pub body: Vec<u8>,
}

/// Encode `payload` for `product` into a [`ResolvedRequest`].
///
/// Fails with [`Error::InvalidPayload`] when the payload can't be sent as is, e.g. an MFA
/// response that doesn't answer its challenge.
pub fn resolve<P: Product>(
    client: &ClientCredentials<'_>,
    product: &P,
    payload: &Payload,
) -> Result<ResolvedRequest, Error> {
    payload.validate::<P>()?;

    let body = serde_json::to_vec(&PayloadApiRequest::new(client, payload))
        .map_err(|e| Error::InternalError(format!("Failed to serialize payload: {e}")))?;

    Ok(ResolvedRequest {
        method: payload.intention().method(),
        path: product.endpoint(payload),
        body,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        mfa::{Challenge, Device, SelectedDevice},
        Auth, Balance, Connect, Income, Info,
    };

    const CLIENT: ClientCredentials<'static> = ClientCredentials {
        client_id: "test_id",
        secret: "test_secret",
    };

    fn credentials() -> Credentials {
        Credentials {
            institution: "chase".to_string(),
            username: "plaid_test".to_string(),
            password: "plaid_good".to_string(),
            pin: None,
        }
    }

    fn user() -> User {
        User::new("test_chase")
    }

    fn body(request: &ResolvedRequest) -> Value {
        serde_json::from_slice(&request.body).unwrap()
    }

    fn fetch_data() -> Payload {
        Payload::FetchData {
            user: user(),
            options: FetchDataOptions::default(),
        }
    }

    fn assert_fetch_is_post<P: Product>(product: P) {
        let request = resolve(&CLIENT, &product, &fetch_data()).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, P::KIND.endpoint(Intention::FetchData));
    }

    #[test]
    fn fetch_data_is_post_for_every_product() {
        assert_fetch_is_post(Auth);
        assert_fetch_is_post(Connect);
        assert_fetch_is_post(Balance);
        assert_fetch_is_post(Info);
        assert_fetch_is_post(Income);
    }

    #[test]
    fn only_remove_user_deletes() {
        for intention in Intention::ALL {
            let expected = if intention == Intention::RemoveUser {
                Method::DELETE
            } else {
                Method::POST
            };
            assert_eq!(intention.method(), expected, "{intention}");
        }
    }

    #[test]
    fn encode_authenticate() {
        let payload = Payload::Authenticate {
            credentials: credentials(),
            options: AuthenticateOptions::default(),
        };

        let request = resolve(&CLIENT, &Connect, &payload).unwrap();

        assert_eq!(request.path, "/connect");
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "type": "chase",
                "username": "plaid_test",
                "password": "plaid_good"
            })
        );
    }

    #[test]
    fn encode_authenticate_with_pin_and_options() {
        let payload = Payload::Authenticate {
            credentials: Credentials {
                pin: Some("1234".to_string()),
                ..credentials()
            },
            options: AuthenticateOptions {
                list: Some(true),
                ..Default::default()
            },
        };

        let request = resolve(&CLIENT, &Auth, &payload).unwrap();

        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "type": "chase",
                "username": "plaid_test",
                "password": "plaid_good",
                "pin": "1234",
                "options": { "list": true }
            })
        );
    }

    #[test]
    fn encode_reauthenticate() {
        let payload = Payload::Reauthenticate {
            user: user(),
            credentials: credentials(),
            options: AuthenticateOptions::default(),
        };

        let request = resolve(&CLIENT, &Connect, &payload).unwrap();

        assert_eq!(request.path, "/connect");
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "access_token": "test_chase",
                "type": "chase",
                "username": "plaid_test",
                "password": "plaid_good"
            })
        );
    }

    #[test]
    fn encode_upgrade() {
        let payload = Payload::Upgrade {
            user: user(),
            target: ProductKind::Info,
            options: AuthenticateOptions::default(),
        };

        let request = resolve(&CLIENT, &Info, &payload).unwrap();

        assert_eq!(request.path, "/upgrade");
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "access_token": "test_chase",
                "upgrade_to": "info"
            })
        );
    }

    #[test]
    fn upgrade_target_must_match_product() {
        let payload = Payload::Upgrade {
            user: user(),
            target: ProductKind::Info,
            options: AuthenticateOptions::default(),
        };

        assert!(matches!(
            resolve(&CLIENT, &Connect, &payload),
            Err(Error::InvalidPayload(_))
        ));
    }

    #[test]
    fn encode_remove_user() {
        let request = resolve(&CLIENT, &Balance, &Payload::RemoveUser { user: user() }).unwrap();

        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/balance");
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "access_token": "test_chase"
            })
        );
    }

    #[test]
    fn encode_fetch_data_with_options() {
        let payload = Payload::FetchData {
            user: user(),
            options: FetchDataOptions {
                account: Some("QPO8Jo8vdDHMepg41PBwckXm4KdK1yUdmXOwK".to_string()),
                ..Default::default()
            },
        };

        let request = resolve(&CLIENT, &Connect, &payload).unwrap();

        assert_eq!(request.path, "/connect/get");
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "access_token": "test_chase",
                "options": { "account": "QPO8Jo8vdDHMepg41PBwckXm4KdK1yUdmXOwK" }
            })
        );
    }

    #[test]
    fn encode_step_code() {
        let payload = Payload::StepMfa {
            user: user(),
            challenge: Challenge::Code,
            response: mfa::Response::Code("1234".to_string()),
        };

        let request = resolve(&CLIENT, &Auth, &payload).unwrap();

        assert_eq!(request.path, "/auth/step");
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "access_token": "test_chase",
                "mfa": "1234"
            })
        );
    }

    #[test]
    fn encode_step_questions_as_array() {
        let payload = Payload::StepMfa {
            user: user(),
            challenge: Challenge::Questions(vec!["You say tomato?".to_string()]),
            response: mfa::Response::Questions(vec!["tomato".to_string()]),
        };

        let request = resolve(&CLIENT, &Connect, &payload).unwrap();

        assert_eq!(body(&request)["mfa"], json!(["tomato"]));
    }

    #[test]
    fn encode_step_device_selection() {
        let challenge = Challenge::DeviceList(vec![
            (Device::Email, "t..t@plaid.com".to_string()),
            (Device::Phone, "xxx-xxx-5309".to_string()),
        ]);

        let by_type = Payload::StepMfa {
            user: user(),
            challenge: challenge.clone(),
            response: mfa::Response::Device(SelectedDevice::Device(Device::Phone)),
        };
        let by_mask = Payload::StepMfa {
            user: user(),
            challenge,
            response: mfa::Response::Device(SelectedDevice::Mask("t..t@plaid.com".to_string())),
        };

        let request = resolve(&CLIENT, &Auth, &by_type).unwrap();
        assert_eq!(
            body(&request),
            json!({
                "client_id": "test_id",
                "secret": "test_secret",
                "access_token": "test_chase",
                "options": { "send_method": { "type": "phone" } }
            })
        );

        let request = resolve(&CLIENT, &Auth, &by_mask).unwrap();
        assert_eq!(
            body(&request)["options"],
            json!({ "send_method": { "mask": "t..t@plaid.com" } })
        );
    }

    #[test]
    fn mismatched_mfa_response_is_rejected() {
        let payload = Payload::StepMfa {
            user: user(),
            challenge: Challenge::Code,
            response: mfa::Response::Questions(vec!["tomato".to_string()]),
        };

        assert!(matches!(
            resolve(&CLIENT, &Connect, &payload),
            Err(Error::InvalidPayload(_))
        ));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let debug = format!("{:?}", credentials());

        assert!(debug.contains("plaid_test"));
        assert!(!debug.contains("plaid_good"));
    }
}
