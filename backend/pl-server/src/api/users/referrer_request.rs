use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReferrerRequest {
    /// Id of the user who did the inviting
    pub referrer: i64,
}
