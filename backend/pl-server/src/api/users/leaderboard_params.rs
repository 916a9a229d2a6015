use crate::ApiResult;

use pl_core::{LeaderboardSort, PageRequest};

use serde::Deserialize;

/// `sort_by`, `page` and `size`, from either the JSON body or the query string
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeaderboardParams {
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl LeaderboardParams {
    /// Unknown sort keys fall back to id order; omitted size returns everything
    pub fn resolve(&self) -> ApiResult<(LeaderboardSort, PageRequest)> {
        let sort = self
            .sort_by
            .as_deref()
            .map(LeaderboardSort::from_key)
            .unwrap_or_default();
        let page = PageRequest::new(self.page.unwrap_or(1), self.size.unwrap_or(0))?;
        Ok((sort, page))
    }
}
