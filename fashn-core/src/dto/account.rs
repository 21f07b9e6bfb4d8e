//! Account DTOs

use serde::{Deserialize, Serialize};

/// Body of `GET /v1/credits`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditsResponse {
    pub credits: Credits,
}

/// Remaining credit balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub total: i64,
    pub subscription: i64,
    pub on_demand: i64,
}
