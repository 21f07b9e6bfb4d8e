//! Data Transfer Objects for the FASHN HTTP API
//!
//! DTOs mirror the JSON bodies of the remote endpoints and are converted into
//! domain types as soon as they are received.

pub mod account;
pub mod status;
