//! Data structures and implementations related to multi-factor-authentication.
//!
//! When authenticating, the API may answer with a [`Challenge`] instead of product data. The
//! caller answers it with a matching [`Response`] through
//! [`Payload::StepMfa`](crate::Payload::StepMfa), possibly several times, until the user is
//! authenticated.

use serde::{Deserialize, Serialize};

use crate::Error;

pub(crate) mod api;

/// Represents a device that can be used for multifactor authentication.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// Code sent to the user's email.
    Email,
    /// Code sent to the user's phone number via sms.
    Phone,
    /// Verify a credit card number.
    Card,
}

/// The device that the user has chosen to receive an MFA code on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedDevice {
    /// The type of the device, as listed in a [`Challenge::DeviceList`].
    Device(Device),
    /// The `mask` listed in a [`Challenge::DeviceList`], e.g `"t..t@plaid.com"`.
    Mask(String),
}

/// A multiple choice question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The question to ask the user.
    pub question: String,
    /// The possible answers, one of which must be sent back.
    pub answers: Vec<String>,
}

/// Represents one of the different types of multi-factor-authentication challenges Plaid
/// supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Challenge {
    /// A token-based authorization, the token has been sent to one of the user's registered
    /// devices.
    Code,
    /// A list of possible challenge devices, of which the user should choose one and pass it back
    /// using [`Response::Device`]. It is in the form of `(device_type, device_mask)`.
    DeviceList(Vec<(Device, String)>),
    /// A list of questions that need to be answered.
    Questions(Vec<String>),
    /// A list of multiple choice selections.
    Selections(Vec<Selection>),
}

/// Represents a response to a previously given MFA challenge.
///
/// The variant must match the challenge being answered, see [`Challenge::check_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A response to a [`Challenge::Code`], providing the code that was sent to the user's device.
    Code(String),
    /// A response to a [`Challenge::DeviceList`], choosing where the code should be sent.
    Device(SelectedDevice),
    /// Responses to a [`Challenge::Questions`], one per question and in the same order.
    Questions(Vec<String>),
    /// Responses to a [`Challenge::Selections`], one per selection and in the same order.
    Selections(Vec<String>),
}

impl Challenge {
    /// Name of the challenge variant, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Challenge::Code => "code",
            Challenge::DeviceList(_) => "device list",
            Challenge::Questions(_) => "questions",
            Challenge::Selections(_) => "selections",
        }
    }

    /// Checks that `response` is a valid answer to this challenge, i.e. it has the matching shape,
    /// answers every prompt, and only selects devices or answers that were offered.
    pub fn check_response(&self, response: &Response) -> Result<(), Error> {
        match (self, response) {
            (Challenge::Code, Response::Code(_)) => Ok(()),

            (Challenge::DeviceList(devices), Response::Device(selected)) => {
                let offered = devices.iter().any(|(device, mask)| match selected {
                    SelectedDevice::Device(d) => d == device,
                    SelectedDevice::Mask(m) => m == mask,
                });
                if offered {
                    Ok(())
                } else {
                    Err(Error::InvalidPayload(format!(
                        "selected device {selected:?} was not offered by the challenge"
                    )))
                }
            }

            (Challenge::Questions(questions), Response::Questions(answers)) => {
                check_answer_count("questions", questions.len(), answers.len())
            }

            (Challenge::Selections(selections), Response::Selections(answers)) => {
                check_answer_count("selections", selections.len(), answers.len())?;
                match selections
                    .iter()
                    .zip(answers)
                    .find(|(selection, answer)| !selection.answers.contains(answer))
                {
                    Some((selection, answer)) => Err(Error::InvalidPayload(format!(
                        "\"{answer}\" is not one of the answers to \"{}\"",
                        selection.question
                    ))),
                    None => Ok(()),
                }
            }

            (challenge, response) => Err(Error::InvalidPayload(format!(
                "a {} response cannot answer a {} challenge",
                response.name(),
                challenge.name()
            ))),
        }
    }
}

impl Response {
    /// Name of the response variant, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Response::Code(_) => "code",
            Response::Device(_) => "device",
            Response::Questions(_) => "questions",
            Response::Selections(_) => "selections",
        }
    }
}

fn check_answer_count(what: &str, expected: usize, got: usize) -> Result<(), Error> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::InvalidPayload(format!(
            "expected {expected} answers to the {what} challenge, got {got}"
        )))
    }
}
