//! FASHN Core
//!
//! Core types shared by the FASHN client and CLI.
//!
//! This crate contains:
//! - Domain types: jobs, job statuses and the typed try-on parameters
//! - DTOs: the JSON bodies exchanged with the FASHN API

pub mod domain;
pub mod dto;

pub use domain::job::{JobHandle, JobOutput, JobRequest, JobStatus};
pub use domain::tryon::{TryOnParams, ValidationError};
