//! Types that define data structures that are returned from the API.
//!
//! All of these types implement [`serde::Deserialize`] and ignore keys they don't know about, so
//! that additions to the API don't break decoding.

mod account;
mod address;
mod email;
mod phone_number;
mod transaction;

pub use account::{Account, AccountMeta};
pub use address::Address;
pub use email::Email;
pub use phone_number::PhoneNumber;
pub use transaction::{Context, Transaction, TransactionMeta};

/// Unique identifiers in Plaid are represented as a globally unique hash.
pub type Uid = String;

/// Category identifiers, e.g. `"13005000"`. Kept as the original string.
pub type CategoryId = String;

/// All amounts are represented in a 64-bit floating-point type.
/// This is for legacy reasons and may change in the future.
pub type Amount = f64;

/// A user's bank account username.
pub type Username = String;

/// A user's real name.
pub type Name = String;

/// A user's bank account password.
pub type Password = String;

/// A user's secret access token.
pub type AccessToken = String;

/// A user's institution, e.g. `"chase"`.
pub type Institution = String;

/// A PIN number, required by some institutions.
pub type Pin = String;

/// Dates are stored as their original ISO 8601 `String` representation.
pub type Date = String;
