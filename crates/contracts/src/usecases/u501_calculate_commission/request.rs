use crate::domain::a001_sales_agent::aggregate::SalesAgentId;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/comisiones/calcular`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateCommissionRequest {
    #[serde(rename = "vendedorId")]
    pub agent_id: SalesAgentId,
    #[serde(rename = "fechaInicio")]
    pub period_start: String,
    #[serde(rename = "fechaFin")]
    pub period_end: String,
}
