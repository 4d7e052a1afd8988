use crate::shared::remote_form::{FormSchema, Submitted};
use contracts::domain::a001_sales_agent::aggregate::SalesAgentId;
use contracts::domain::common::AggregateId;
use contracts::shared::validation::{require_all, validate_period};
use contracts::usecases::u501_calculate_commission::{
    CalculateCommissionRequest, CalculateCommissionResponse,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommissionFields {
    pub agent_id: String,
    pub period_start: String,
    pub period_end: String,
}

/// Ask the backend for an agent's commission over a period.
/// Only the latest value is kept; inputs stay filled for the next run.
pub struct CalculateCommission;

impl FormSchema for CalculateCommission {
    type Fields = CommissionFields;
    type Request = CalculateCommissionRequest;
    type Item = CalculateCommissionResponse;

    const SUBMIT_PATH: &'static str = "/api/comisiones/calcular";
    const SUBMIT_ERROR: &'static str = "Error al calcular comisión";

    fn validate(fields: &CommissionFields) -> Result<(), String> {
        require_all(
            &[&fields.agent_id, &fields.period_start, &fields.period_end],
            "Todos los campos son obligatorios",
        )?;
        validate_period(&fields.period_start, &fields.period_end)
    }

    fn build_request(fields: &CommissionFields) -> Result<CalculateCommissionRequest, String> {
        Ok(CalculateCommissionRequest {
            agent_id: SalesAgentId::from_string(&fields.agent_id)?,
            period_start: fields.period_start.clone(),
            period_end: fields.period_end.clone(),
        })
    }

    fn on_success(body: &str) -> Result<Submitted<CalculateCommissionResponse>, serde_json::Error> {
        let response: CalculateCommissionResponse = serde_json::from_str(body)?;
        Ok(Submitted::Computed(response.commission))
    }
}
