//! Goal fetcher — retrieves the target grid from the service.

use http::Method;
use serde::Deserialize;
use tracing::{debug, info};

use megaverse_core::Grid;

use crate::client::MegaverseClient;
use crate::error::FetchError;

#[derive(Debug, Deserialize)]
struct GoalResponse {
    goal: Grid,
}

/// Parse a goal response body and extract the `goal` grid.
pub fn parse_goal(body: &[u8]) -> Result<Grid, FetchError> {
    let resp: GoalResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    Ok(resp.goal)
}

impl MegaverseClient {
    /// Path of the goal map for this client's candidate.
    pub fn goal_path(&self) -> String {
        format!("/map/{}/goal", self.candidate_id())
    }

    /// Fetch the goal grid with a single GET.
    pub async fn fetch_goal(&self) -> Result<Grid, FetchError> {
        let url = self.url(&self.goal_path());
        debug!(%url, "fetching goal");

        let resp = self.transport.send(Method::GET, &url, None).await?;
        if !resp.status.is_success() {
            return Err(FetchError::Status(resp.status.as_u16()));
        }

        let grid = parse_goal(&resp.body)?;
        info!(
            rows = grid.len(),
            columns = grid.first().map(Vec::len).unwrap_or(0),
            "goal fetched"
        );
        Ok(grid)
    }
}
