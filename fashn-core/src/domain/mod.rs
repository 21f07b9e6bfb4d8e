//! Core domain types
//!
//! These types describe a single remote job as seen by the client: what is
//! submitted, how it is identified, and which state it is in.

pub mod job;
pub mod tryon;
