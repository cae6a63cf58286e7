//! Lottery backend API.
//!
//! The front-end holds no lottery state of its own; every lottery and
//! ticket request is forwarded here and the backend's JSON is relayed.
mod client;
mod error;

pub use client::*;
pub use error::*;
