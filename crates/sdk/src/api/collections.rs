//! Collections API endpoints.

use crate::client::RaindropClient;
use crate::error::RaindropResult;
use crate::types::CollectionsResponse;

/// Collections API.
pub struct CollectionsApi<'a> {
    client: &'a RaindropClient,
}

impl<'a> CollectionsApi<'a> {
    pub(crate) fn new(client: &'a RaindropClient) -> Self {
        Self { client }
    }

    /// List the root collections of the account.
    pub async fn list(&self) -> RaindropResult<CollectionsResponse> {
        self.client.http.get("/collections").await
    }
}
