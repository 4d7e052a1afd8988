use serde::{Deserialize, Serialize};

/// Commission computed by the backend for one agent and period.
/// Never persisted on the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculateCommissionResponse {
    #[serde(rename = "comision")]
    pub commission: f64,
}
