use serde::Serialize;

use super::{AuthenticateOptions, ClientCredentials, Credentials, FetchDataOptions, Payload};
use crate::{
    mfa::{self, Device, SelectedDevice},
    ProductKind,
};

/// The JSON body of every request: the client credentials followed by the fields of the payload.
#[derive(Serialize, Debug)]
pub(crate) struct PayloadApiRequest<'a> {
    client_id: &'a str,
    secret: &'a str,
    #[serde(flatten)]
    body: PayloadApiBody<'a>,
}

// untagged + flatten writes the variant's fields directly next to the client credentials
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum PayloadApiBody<'a> {
    Credentials {
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<&'a str>,
        #[serde(rename = "type")]
        institution: &'a str,
        username: &'a str,
        password: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        pin: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<&'a AuthenticateOptions>,
    },
    Upgrade {
        access_token: &'a str,
        upgrade_to: ProductKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<&'a AuthenticateOptions>,
    },
    StepMfa {
        access_token: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        mfa: Option<MfaApiAnswer<'a>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<MfaApiOptions<'a>>,
    },
    User {
        access_token: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        options: Option<&'a FetchDataOptions>,
    },
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum MfaApiAnswer<'a> {
    Code(&'a str),
    Answers(&'a [String]),
}

#[derive(Serialize, Debug)]
struct MfaApiOptions<'a> {
    send_method: SendMethodApiModel<'a>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum SendMethodApiModel<'a> {
    Type {
        #[serde(rename = "type")]
        device: Device,
    },
    Mask {
        mask: &'a str,
    },
}

impl<'a> PayloadApiRequest<'a> {
    pub(crate) fn new(client: &ClientCredentials<'a>, payload: &'a Payload) -> Self {
        Self {
            client_id: client.client_id,
            secret: client.secret,
            body: payload.into(),
        }
    }
}

fn authenticate_options(options: &AuthenticateOptions) -> Option<&AuthenticateOptions> {
    (!options.is_empty()).then_some(options)
}

fn credentials_body<'a>(
    access_token: Option<&'a str>,
    credentials: &'a Credentials,
    options: &'a AuthenticateOptions,
) -> PayloadApiBody<'a> {
    PayloadApiBody::Credentials {
        access_token,
        institution: &credentials.institution,
        username: &credentials.username,
        password: &credentials.password,
        pin: credentials.pin.as_deref(),
        options: authenticate_options(options),
    }
}

impl<'a> From<&'a Payload> for PayloadApiBody<'a> {
    fn from(payload: &'a Payload) -> Self {
        match payload {
            Payload::Authenticate {
                credentials,
                options,
            } => credentials_body(None, credentials, options),
            Payload::Reauthenticate {
                user,
                credentials,
                options,
            } => credentials_body(Some(&user.access_token), credentials, options),
            Payload::Upgrade {
                user,
                target,
                options,
            } => PayloadApiBody::Upgrade {
                access_token: &user.access_token,
                upgrade_to: *target,
                options: authenticate_options(options),
            },
            Payload::RemoveUser { user } => PayloadApiBody::User {
                access_token: &user.access_token,
                options: None,
            },
            Payload::StepMfa { user, response, .. } => {
                let (mfa, options) = match response {
                    mfa::Response::Code(code) => (Some(MfaApiAnswer::Code(code)), None),
                    mfa::Response::Questions(answers) | mfa::Response::Selections(answers) => {
                        (Some(MfaApiAnswer::Answers(answers)), None)
                    }
                    mfa::Response::Device(selected) => {
                        let send_method = match selected {
                            SelectedDevice::Device(device) => {
                                SendMethodApiModel::Type { device: *device }
                            }
                            SelectedDevice::Mask(mask) => SendMethodApiModel::Mask { mask },
                        };
                        (None, Some(MfaApiOptions { send_method }))
                    }
                };
                PayloadApiBody::StepMfa {
                    access_token: &user.access_token,
                    mfa,
                    options,
                }
            }
            Payload::FetchData { user, options } => PayloadApiBody::User {
                access_token: &user.access_token,
                options: (!options.is_empty()).then_some(options),
            },
        }
    }
}
