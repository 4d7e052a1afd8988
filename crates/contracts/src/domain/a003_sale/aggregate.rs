use crate::domain::a001_sales_agent::aggregate::SalesAgentId;
use crate::domain::common::aggregate_id::integer_id;
use serde::{Deserialize, Serialize};

integer_id!(
    /// Identifier returned by the backend when a sale is recorded
    SaleId
);

/// Sale (venta) attributed to a sales agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    #[serde(rename = "vendedorId")]
    pub agent_id: SalesAgentId,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "monto")]
    pub amount: f64,
}

/// Body of `POST /api/ventas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    #[serde(rename = "vendedorId")]
    pub agent_id: SalesAgentId,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "monto")]
    pub amount: f64,
}
