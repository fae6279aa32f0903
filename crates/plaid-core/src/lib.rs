#![doc = include_str!("../README.md")]

mod client;
mod transport;

pub use client::{Client, ClientSettings};
pub use plaid_api as api;
pub use plaid_api::Error;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
