//! Product definitions that provide endpoint and response deserialization information.
//!
//! The set of products is closed. [`ProductKind`] is the capability table: for every product it
//! knows the endpoint of each [`Intention`] and a description. The [`Product`] marker types bind
//! a kind to the shape of the data the product returns.

use std::fmt::{self, Debug};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::payload::{Intention, Payload};

mod auth;
mod balance;
mod connect;
mod income;
mod info;

pub use auth::{Auth, AuthData};
pub use balance::{Balance, BalanceData};
pub use connect::{Connect, ConnectData};
pub use income::{Income, IncomeData, IncomeInternalData, IncomeStream};
pub use info::{Info, InfoAddress, InfoData, InfoInternalData};

/// Anything that implements `Product` can be used as a product.
pub trait Product: Copy + Debug + Send + Sync + 'static {
    /// The entry of this product in the capability table.
    const KIND: ProductKind;

    /// The response data that is associated with this product.
    type Data: DeserializeOwned + Debug + Send;

    /// The endpoint of the product for the given payload, with leading slash, e.g
    /// `/connect/get`.
    fn endpoint(&self, payload: &Payload) -> &'static str {
        Self::KIND.endpoint(payload.intention())
    }

    /// A textual representation of the product, e.g `Connect`.
    fn description(&self) -> &'static str {
        Self::KIND.description()
    }
}

/// Tag for each of the products offered by Plaid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[allow(missing_docs)]
    Auth,
    #[allow(missing_docs)]
    Connect,
    #[allow(missing_docs)]
    Balance,
    #[allow(missing_docs)]
    Info,
    #[allow(missing_docs)]
    Income,
}

impl ProductKind {
    /// All products, in a stable order.
    pub const ALL: [ProductKind; 5] = [
        ProductKind::Auth,
        ProductKind::Connect,
        ProductKind::Balance,
        ProductKind::Info,
        ProductKind::Income,
    ];

    /// The endpoint path used to perform `intention` against this product.
    pub fn endpoint(self, intention: Intention) -> &'static str {
        use Intention as I;
        use ProductKind as P;

        match (self, intention) {
            (_, I::Upgrade) => "/upgrade",

            (P::Auth, I::StepMfa) => "/auth/step",
            (P::Auth, I::FetchData) => "/auth/get",
            (P::Auth, I::Authenticate | I::Reauthenticate | I::RemoveUser) => "/auth",

            (P::Connect, I::StepMfa) => "/connect/step",
            (P::Connect, I::FetchData) => "/connect/get",
            (P::Connect, I::Authenticate | I::Reauthenticate | I::RemoveUser) => "/connect",

            (P::Balance, I::StepMfa) => "/balance/step",
            (P::Balance, I::FetchData) => "/balance/get",
            (P::Balance, I::Authenticate | I::Reauthenticate | I::RemoveUser) => "/balance",

            (P::Info, I::StepMfa) => "/info/step",
            (P::Info, I::FetchData) => "/info/get",
            (P::Info, I::Authenticate | I::Reauthenticate | I::RemoveUser) => "/info",

            (P::Income, I::StepMfa) => "/income/step",
            (P::Income, I::FetchData) => "/income/get",
            (P::Income, I::Authenticate | I::Reauthenticate | I::RemoveUser) => "/income",
        }
    }

    /// A textual representation of the product, e.g `Connect`.
    pub fn description(self) -> &'static str {
        match self {
            ProductKind::Auth => "Auth",
            ProductKind::Connect => "Connect",
            ProductKind::Balance => "Balance",
            ProductKind::Info => "Info",
            ProductKind::Income => "Income",
        }
    }

    /// The name of the product on the wire, e.g `connect`.
    pub fn slug(self) -> &'static str {
        match self {
            ProductKind::Auth => "auth",
            ProductKind::Connect => "connect",
            ProductKind::Balance => "balance",
            ProductKind::Info => "info",
            ProductKind::Income => "income",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
