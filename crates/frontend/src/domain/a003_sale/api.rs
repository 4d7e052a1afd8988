use crate::shared::remote_form::{FormSchema, Submitted};
use contracts::domain::a001_sales_agent::aggregate::SalesAgentId;
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto};
use contracts::domain::common::AggregateId;
use contracts::shared::validation::{parse_decimal, require_all};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaleFields {
    /// Selected option value of the agent selector
    pub agent_id: String,
    pub date: String,
    pub amount: String,
}

/// Record a sale.
///
/// The backend has no sales listing, so the page keeps the sales created in
/// this session and appends each created record as returned.
pub struct SaleForm;

impl FormSchema for SaleForm {
    type Fields = SaleFields;
    type Request = SaleDto;
    type Item = Sale;

    const SUBMIT_PATH: &'static str = "/api/ventas";
    const SUBMIT_ERROR: &'static str = "Error al registrar venta";

    fn validate(fields: &SaleFields) -> Result<(), String> {
        require_all(
            &[&fields.agent_id, &fields.date, &fields.amount],
            "Todos los campos son obligatorios",
        )
    }

    fn build_request(fields: &SaleFields) -> Result<SaleDto, String> {
        Ok(SaleDto {
            agent_id: SalesAgentId::from_string(&fields.agent_id)?,
            date: fields.date.clone(),
            amount: parse_decimal(&fields.amount, "El monto")?,
        })
    }

    fn on_success(body: &str) -> Result<Submitted<Sale>, serde_json::Error> {
        serde_json::from_str(body).map(Submitted::Append)
    }
}
