//! Representations of a user's bank account.

use serde::{Deserialize, Serialize};

use super::{Amount, Institution, Name, Uid};

/// Represents one account associated with a given [`User`](crate::User).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "AccountApiModel")]
pub struct Account {
    /// The unique id of the account.
    pub id: Uid,
    /// An id unique to the accounts of a particular access token.
    pub item_id: Uid,
    /// The total amount of funds in the account.
    pub current_balance: Amount,
    /// The current balance less any outstanding holds or debits that have not yet posted to the
    /// account. Not every institution reports it.
    pub available_balance: Option<Amount>,
    /// The financial institution associated with the account.
    pub institution: Institution,
    /// The classification of this account, e.g. `depository`.
    pub account_type: String,
    /// A more detailed classification of the account, e.g. `checking`.
    pub account_subtype: Option<String>,
    /// The user's bank account number. Only returned by the `Auth` product.
    pub account_number: Option<String>,
    /// The user's routing number. Only returned by the `Auth` product.
    pub routing_number: Option<String>,
    /// The user's wire routing number. Only returned by the `Auth` product.
    pub wire_routing_number: Option<String>,
    /// Meta-data associated with this account.
    pub meta: Option<AccountMeta>,
}

/// Any meta-data associated with an [`Account`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AccountMeta {
    /// Name of the account, e.g. "Plaid Credit Card".
    pub name: Option<Name>,
    /// The last digits of the account number.
    pub number: Option<String>,
    /// The credit limit, if the account is a credit card.
    pub limit: Option<Amount>,
}

#[derive(Deserialize)]
struct AccountApiModel {
    #[serde(rename = "_id")]
    id: Uid,
    #[serde(rename = "_item")]
    item_id: Uid,
    balance: BalanceApiModel,
    institution_type: Institution,
    #[serde(rename = "type")]
    account_type: String,
    subtype: Option<String>,
    numbers: Option<NumbersApiModel>,
    meta: Option<AccountMeta>,
}

#[derive(Deserialize)]
struct BalanceApiModel {
    current: Amount,
    available: Option<Amount>,
}

#[derive(Deserialize)]
struct NumbersApiModel {
    account: Option<String>,
    routing: Option<String>,
    #[serde(rename = "wireRouting")]
    wire_routing: Option<String>,
}

impl From<AccountApiModel> for Account {
    fn from(api: AccountApiModel) -> Self {
        let (account_number, routing_number, wire_routing_number) = match api.numbers {
            Some(numbers) => (numbers.account, numbers.routing, numbers.wire_routing),
            None => (None, None, None),
        };

        Account {
            id: api.id,
            item_id: api.item_id,
            current_balance: api.balance.current,
            available_balance: api.balance.available,
            institution: api.institution_type,
            account_type: api.account_type,
            account_subtype: api.subtype,
            account_number,
            routing_number,
            wire_routing_number,
            meta: api.meta,
        }
    }
}
