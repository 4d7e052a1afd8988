use crate::domain::common::aggregate_id::integer_id;
use serde::{Deserialize, Serialize};

integer_id!(
    /// Server-assigned identifier of a sales agent
    SalesAgentId
);

/// Sales agent (vendedor) as returned by `GET /api/vendedores`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesAgent {
    pub id: SalesAgentId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
}

impl SalesAgent {
    /// Label used wherever an agent is listed or selected: `nombre (email)`
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

/// Body of `POST /api/vendedores`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesAgentDto {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
}
