use crate::shared::remote_form::{FormSchema, Submitted};
use contracts::domain::a002_commission_rule::aggregate::{CommissionRule, CommissionRuleDto};
use contracts::shared::validation::{parse_decimal, require_all, validate_period};

pub const RULES_PATH: &str = "/api/reglas";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommissionRuleFields {
    pub percentage: String,
    pub period_start: String,
    pub period_end: String,
}

/// Create a rule, then re-read the list from the server.
///
/// The 0..=100 percentage range is only hinted by the input; the backend
/// decides whether a rule is acceptable.
pub struct CommissionRuleForm;

impl FormSchema for CommissionRuleForm {
    type Fields = CommissionRuleFields;
    type Request = CommissionRuleDto;
    type Item = CommissionRule;

    const SUBMIT_PATH: &'static str = RULES_PATH;
    const SUBMIT_ERROR: &'static str = "Error al crear regla";
    const LIST_PATH: Option<&'static str> = Some(RULES_PATH);
    const LOAD_ERROR: &'static str = "Error al obtener reglas";

    fn validate(fields: &CommissionRuleFields) -> Result<(), String> {
        require_all(
            &[&fields.percentage, &fields.period_start, &fields.period_end],
            "Todos los campos son obligatorios",
        )?;
        validate_period(&fields.period_start, &fields.period_end)
    }

    fn build_request(fields: &CommissionRuleFields) -> Result<CommissionRuleDto, String> {
        Ok(CommissionRuleDto {
            percentage: parse_decimal(&fields.percentage, "El porcentaje")?,
            period_start: fields.period_start.clone(),
            period_end: fields.period_end.clone(),
        })
    }

    fn on_success(_body: &str) -> Result<Submitted<CommissionRule>, serde_json::Error> {
        Ok(Submitted::Refresh)
    }
}
