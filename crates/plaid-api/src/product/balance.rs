//! Balance allows you to query the real-time account balances of a user.

use serde::Deserialize;

use super::{Product, ProductKind};
use crate::data::Account;

/// `Balance` is the product you need to fetch the current balances of a `User`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Balance;

/// Representation of data that is retrieved from the `Balance` product.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BalanceData {
    /// List of accounts associated with the user.
    pub accounts: Vec<Account>,
}

impl Product for Balance {
    const KIND: ProductKind = ProductKind::Balance;
    type Data = BalanceData;
}
