//! Info allows you to retrieve account holder information on file with the financial
//! institution, including names, emails, phone numbers, and addresses.

use serde::Deserialize;

use super::{Product, ProductKind};
use crate::data::{Account, Address, Email, Name, PhoneNumber};

/// The definition of the `Info` product.
#[derive(Debug, Clone, Copy, Default)]
pub struct Info;

/// Representation of data that is retrieved from the `Info` product.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InfoData {
    /// List of accounts associated with the user. When returned from the Info endpoint it will
    /// also include account and routing numbers.
    pub accounts: Vec<Account>,
    /// Includes all user information that has been returned.
    pub info: InfoInternalData,
}

/// Represents the *actual* info data from an info response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InfoInternalData {
    /// Names on file for the user.
    #[serde(default)]
    pub names: Vec<Name>,
    /// Emails associated with the user.
    pub emails: Vec<Email>,
    /// Addresses associated with the user.
    pub addresses: Vec<InfoAddress>,
    /// Phone numbers associated with the user.
    pub phone_numbers: Vec<PhoneNumber>,
}

/// An address on file for the user.
///
/// Unlike transaction locations, every postal part of an address on file is required.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "InfoAddressApiModel")]
pub struct InfoAddress {
    /// Whether or not the user has chosen this as their primary address.
    pub primary: bool,
    /// The address itself.
    pub address: Address,
}

#[derive(Deserialize)]
struct InfoAddressApiModel {
    primary: bool,
    data: InfoAddressDataApiModel,
}

#[derive(Deserialize)]
struct InfoAddressDataApiModel {
    zip: String,
    state: String,
    city: String,
    street: String,
}

impl From<InfoAddressApiModel> for InfoAddress {
    fn from(api: InfoAddressApiModel) -> Self {
        InfoAddress {
            primary: api.primary,
            address: Address {
                zip: Some(api.data.zip),
                state: Some(api.data.state),
                city: Some(api.data.city),
                street: Some(api.data.street),
                ..Default::default()
            },
        }
    }
}

impl Product for Info {
    const KIND: ProductKind = ProductKind::Info;
    type Data = InfoData;
}
