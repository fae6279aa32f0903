//! Representations of banking transactions.

use serde::Deserialize;

use super::{Address, Amount, CategoryId, Date, Uid};

/// Represents a single transaction associated with a given [`Account`](super::Account).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The unique identifier of this transaction.
    #[serde(rename = "_id")]
    pub id: Uid,
    /// The associated account.
    #[serde(rename = "_account")]
    pub account_id: Uid,
    /// Dollar value as a float. It is positive to indicate money moving out of the account, and
    /// negative to indicate that money is moving in.
    pub amount: Amount,
    /// The name of the counterparty, as reported by the institution.
    pub name: Option<String>,
    /// The category to which this transaction belongs.
    pub category_id: CategoryId,
    /// The context in which the transaction occurred.
    #[serde(rename = "type")]
    pub context: Context,
    /// A hierarchical list of the categories this transaction belongs to.
    #[serde(rename = "category")]
    pub categories: Vec<String>,
    /// When `true` the transaction is posted and may still change; when `false` it is cleared.
    pub pending: bool,
    /// The date on which the transaction took place, in ISO 8601 format.
    pub date: Date,
    /// Transaction meta data.
    pub meta: Option<TransactionMeta>,
}

/// Meta data associated with a [`Transaction`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionMeta {
    /// The location in which the transaction most likely occurred.
    pub location: Option<Address>,
}

/// The context in which a transaction took place.
///
/// Decoded from `{"primary": "<context>"}`. Values this library does not know about decode to
/// [`Context::Unresolved`] rather than failing.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "ContextApiModel")]
pub enum Context {
    /// A physical place.
    Place,
    /// An online transaction.
    Digital,
    /// Usually banking transactions.
    Special,
    /// Could not be determined.
    Unresolved,
}

#[derive(Deserialize)]
struct ContextApiModel {
    primary: String,
}

impl From<ContextApiModel> for Context {
    fn from(api: ContextApiModel) -> Self {
        match api.primary.as_str() {
            "place" => Context::Place,
            "digital" => Context::Digital,
            "special" => Context::Special,
            _ => Context::Unresolved,
        }
    }
}
