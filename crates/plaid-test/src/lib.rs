#![doc = include_str!("../README.md")]

mod api;
pub mod fixtures;

pub use api::start_api_mock;
