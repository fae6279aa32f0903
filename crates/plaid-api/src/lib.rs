#![doc = include_str!("../README.md")]

pub mod data;
mod error;
pub mod mfa;
pub mod payload;
pub mod product;
pub mod response;
mod user;

pub use error::Error;
pub use payload::{
    resolve, AuthenticateOptions, ClientCredentials, Credentials, FetchDataOptions, Intention,
    Payload, ResolvedRequest,
};
pub use product::{Auth, Balance, Connect, Income, Info, Product, ProductKind};
pub use response::{decode, Response};
pub use user::User;
