use serde::Deserialize;
use serde_json::Value;

use super::{Challenge, Device, Selection};
use crate::{data::AccessToken, User};

/// The body returned by the API when authentication requires a further step.
#[derive(Deserialize, Debug)]
pub(crate) struct MfaApiResponse {
    access_token: AccessToken,
    #[serde(rename = "type")]
    kind: MfaApiKind,
    mfa: Value,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum MfaApiKind {
    Device,
    List,
    Questions,
    Selections,
}

#[derive(Deserialize)]
struct DeviceApiModel {
    #[allow(dead_code)]
    message: String,
}

#[derive(Deserialize)]
struct DeviceListEntryApiModel {
    #[serde(rename = "type")]
    device: Device,
    mask: String,
}

#[derive(Deserialize)]
struct QuestionApiModel {
    question: String,
}

impl MfaApiResponse {
    /// Decodes the `mfa` payload according to the announced `type`.
    pub(crate) fn into_challenge(self) -> Result<(User, Challenge), serde_json::Error> {
        let challenge = match self.kind {
            MfaApiKind::Device => {
                serde_json::from_value::<DeviceApiModel>(self.mfa)?;
                Challenge::Code
            }
            MfaApiKind::List => Challenge::DeviceList(
                serde_json::from_value::<Vec<DeviceListEntryApiModel>>(self.mfa)?
                    .into_iter()
                    .map(|entry| (entry.device, entry.mask))
                    .collect(),
            ),
            MfaApiKind::Questions => Challenge::Questions(
                serde_json::from_value::<Vec<QuestionApiModel>>(self.mfa)?
                    .into_iter()
                    .map(|q| q.question)
                    .collect(),
            ),
            MfaApiKind::Selections => {
                Challenge::Selections(serde_json::from_value::<Vec<Selection>>(self.mfa)?)
            }
        };

        Ok((User::new(self.access_token), challenge))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode(value: Value) -> Result<(User, Challenge), serde_json::Error> {
        serde_json::from_value::<MfaApiResponse>(value)?.into_challenge()
    }

    #[test]
    fn decode_code_challenge() {
        let (user, challenge) = decode(json!({
            "access_token": "test",
            "type": "device",
            "mfa": { "message": "Code sent to t..t@plaid.com" }
        }))
        .unwrap();

        assert_eq!(user, User::new("test"));
        assert_eq!(challenge, Challenge::Code);
    }

    #[test]
    fn decode_device_list() {
        let (_, challenge) = decode(json!({
            "access_token": "test",
            "type": "list",
            "mfa": [
                { "mask": "t..t@plaid.com", "type": "email" },
                { "mask": "xxx-xxx-5309", "type": "phone" }
            ]
        }))
        .unwrap();

        assert_eq!(
            challenge,
            Challenge::DeviceList(vec![
                (Device::Email, "t..t@plaid.com".to_string()),
                (Device::Phone, "xxx-xxx-5309".to_string()),
            ])
        );
    }

    #[test]
    fn decode_questions() {
        let (_, challenge) = decode(json!({
            "access_token": "test",
            "type": "questions",
            "mfa": [{ "question": "What was the name of your first pet?" }]
        }))
        .unwrap();

        assert_eq!(
            challenge,
            Challenge::Questions(vec!["What was the name of your first pet?".to_string()])
        );
    }

    #[test]
    fn decode_selections() {
        let (_, challenge) = decode(json!({
            "access_token": "test",
            "type": "selections",
            "mfa": [{
                "question": "Did you buy a tomato?",
                "answers": ["Yes", "No"]
            }]
        }))
        .unwrap();

        assert_eq!(
            challenge,
            Challenge::Selections(vec![Selection {
                question: "Did you buy a tomato?".to_string(),
                answers: vec!["Yes".to_string(), "No".to_string()],
            }])
        );
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert!(decode(json!({
            "access_token": "test",
            "type": "carrier-pigeon",
            "mfa": []
        }))
        .is_err());
    }
}
