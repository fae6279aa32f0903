//! Connect allows you to retrieve account balance and transaction history data.

use serde::Deserialize;

use super::{Product, ProductKind};
use crate::data::{Account, Transaction};

/// `Connect` is the product you need to fetch transactions for a `User`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Connect;

/// Representation of data that is retrieved from the `Connect` product.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConnectData {
    /// List of accounts associated with the user.
    pub accounts: Vec<Account>,
    /// List of transactions associated with the user.
    pub transactions: Vec<Transaction>,
}

impl Product for Connect {
    const KIND: ProductKind = ProductKind::Connect;
    type Data = ConnectData;
}
