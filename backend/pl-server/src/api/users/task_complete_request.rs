use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TaskCompleteRequest {
    pub task: String,
}
