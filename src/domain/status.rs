//! Service status payload for `/api/status`

use serde::Serialize;

pub const SERVICE_NAME: &str = "Simple Web App";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK",
            service: SERVICE_NAME,
        }
    }
}
