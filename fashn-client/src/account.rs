//! Account-related API endpoints

use fashn_core::dto::account::{Credits, CreditsResponse};

use crate::FashnClient;
use crate::error::Result;

impl FashnClient {
    /// Get the remaining credit balance
    ///
    /// This is the cheapest authenticated call the API offers, so it doubles
    /// as a check that the API key and base URL are usable.
    pub async fn credits(&self) -> Result<Credits> {
        let response = self
            .authorize(self.client.get(self.url("/v1/credits")))
            .send()
            .await?;

        let body: CreditsResponse = self.handle_response(response).await?;
        Ok(body.credits)
    }
}
