//! Auth allows you to authorize ACH transactions from the end-user's account. It returns account
//! data including account numbers and routing numbers if authorization is successful.

use serde::Deserialize;

use super::{Product, ProductKind};
use crate::data::Account;

/// `Auth` is the product you need in order to check that the user owns their account.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auth;

/// Representation of data that is retrieved from the `Auth` product.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AuthData {
    /// List of accounts associated with the user, including account and routing numbers.
    pub accounts: Vec<Account>,
}

impl Product for Auth {
    const KIND: ProductKind = ProductKind::Auth;
    type Data = AuthData;
}
