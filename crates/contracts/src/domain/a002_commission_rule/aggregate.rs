use crate::domain::common::aggregate_id::integer_id;
use serde::{Deserialize, Serialize};

integer_id!(
    /// Server-assigned identifier of a commission rule
    CommissionRuleId
);

/// Commission rule (regla): a percentage that applies over a period.
///
/// Dates are ISO `YYYY-MM-DD` strings as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRule {
    pub id: CommissionRuleId,
    #[serde(rename = "porcentaje")]
    pub percentage: f64,
    #[serde(rename = "fechaInicio")]
    pub period_start: String,
    #[serde(rename = "fechaFin")]
    pub period_end: String,
}

/// Body of `POST /api/reglas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRuleDto {
    #[serde(rename = "porcentaje")]
    pub percentage: f64,
    #[serde(rename = "fechaInicio")]
    pub period_start: String,
    #[serde(rename = "fechaFin")]
    pub period_end: String,
}
