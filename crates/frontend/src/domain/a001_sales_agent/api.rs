use crate::shared::remote_form::{FormSchema, Resource, Submitted};
use contracts::domain::a001_sales_agent::aggregate::{SalesAgent, SalesAgentDto};
use contracts::shared::validation::require_all;

/// `GET`/`POST` endpoint of the agents collection
pub const AGENTS_PATH: &str = "/api/vendedores";

/// Agents listing, loaded only to fill an agent selector
pub struct AgentOptions;

impl Resource for AgentOptions {
    type Item = SalesAgent;

    const PATH: &'static str = AGENTS_PATH;
    const LOAD_ERROR: &'static str = "No se pudieron cargar los vendedores";
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesAgentFields {
    pub name: String,
    pub email: String,
}

/// Create an agent, then re-read the list from the server
pub struct SalesAgentForm;

impl FormSchema for SalesAgentForm {
    type Fields = SalesAgentFields;
    type Request = SalesAgentDto;
    type Item = SalesAgent;

    const SUBMIT_PATH: &'static str = AGENTS_PATH;
    const SUBMIT_ERROR: &'static str = "Error al crear vendedor";
    const LIST_PATH: Option<&'static str> = Some(AGENTS_PATH);
    const LOAD_ERROR: &'static str = "Error al obtener vendedores";

    fn validate(fields: &SalesAgentFields) -> Result<(), String> {
        require_all(
            &[&fields.name, &fields.email],
            "Nombre y email son obligatorios",
        )
    }

    fn build_request(fields: &SalesAgentFields) -> Result<SalesAgentDto, String> {
        Ok(SalesAgentDto {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
        })
    }

    fn on_success(_body: &str) -> Result<Submitted<SalesAgent>, serde_json::Error> {
        Ok(Submitted::Refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiConfig;
    use crate::shared::remote_form::controller::{load_form, load_resource, submit};
    use crate::shared::remote_form::mock::MockTransport;
    use crate::shared::remote_form::{FormState, ListState, Status};
    use contracts::domain::a001_sales_agent::aggregate::SalesAgentId;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    const URL: &str = "http://api.test/api/vendedores";

    fn config() -> ApiConfig {
        ApiConfig::new("http://api.test")
    }

    fn ana() -> SalesAgent {
        SalesAgent {
            id: SalesAgentId(1),
            name: "Ana".into(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn test_missing_fields_block_the_request() {
        for (name, email) in [("", ""), ("Ana", ""), ("", "a@x.com"), (" ", "a@x.com")] {
            let transport = MockTransport::new();
            let cell = Rc::new(RefCell::new(FormState::<SalesAgentForm>::default()));
            cell.borrow_mut().fields = SalesAgentFields {
                name: name.into(),
                email: email.into(),
            };

            block_on(submit::<SalesAgentForm, _, _>(&transport, &config(), &cell));

            assert!(transport.calls().is_empty());
            assert_eq!(
                cell.borrow().status.error(),
                Some("Nombre y email son obligatorios")
            );
        }
    }

    #[test]
    fn test_load_lists_agents() {
        let transport = MockTransport::new();
        transport.reply("GET", URL, 200, r#"[{"id":1,"nombre":"Ana","email":"a@x.com"}]"#);
        let cell = Rc::new(RefCell::new(FormState::<SalesAgentForm>::default()));
        cell.borrow_mut().status = Status::Failed("Error al obtener vendedores".into());

        block_on(load_form::<SalesAgentForm, _, _>(&transport, &config(), &cell));

        let state = cell.borrow();
        assert_eq!(state.items, vec![ana()]);
        assert_eq!(state.status.error(), None);
    }

    #[test]
    fn test_duplicate_email_is_shown_verbatim() {
        let transport = MockTransport::new();
        transport.reply("POST", URL, 500, "duplicate email");
        let cell = Rc::new(RefCell::new(FormState::<SalesAgentForm>::default()));
        {
            let mut state = cell.borrow_mut();
            state.items = vec![ana()];
            state.fields = SalesAgentFields {
                name: "Ana".into(),
                email: "a@x.com".into(),
            };
        }

        block_on(submit::<SalesAgentForm, _, _>(&transport, &config(), &cell));

        let state = cell.borrow();
        assert_eq!(state.status.error(), Some("duplicate email"));
        assert_eq!(state.items, vec![ana()]);
        assert_eq!(transport.calls().len(), 1);
    }

    #[test]
    fn test_create_posts_body_and_refreshes() {
        let transport = MockTransport::new();
        transport.reply("POST", URL, 201, r#"{"id":1,"nombre":"Ana","email":"a@x.com"}"#);
        transport.reply("GET", URL, 200, r#"[{"id":1,"nombre":"Ana","email":"a@x.com"}]"#);
        let cell = Rc::new(RefCell::new(FormState::<SalesAgentForm>::default()));
        cell.borrow_mut().fields = SalesAgentFields {
            name: " Ana ".into(),
            email: "a@x.com".into(),
        };

        block_on(submit::<SalesAgentForm, _, _>(&transport, &config(), &cell));

        let calls = transport.calls();
        assert_eq!(calls[0].body, Some(json!({"nombre": "Ana", "email": "a@x.com"})));
        assert_eq!(calls[1].method, "GET");
        let state = cell.borrow();
        assert_eq!(state.items, vec![ana()]);
        assert_eq!(state.fields, SalesAgentFields::default());
    }

    #[test]
    fn test_selector_load_failure_message() {
        let transport = MockTransport::new();
        transport.reply("GET", URL, 500, "boom");
        let cell = Rc::new(RefCell::new(ListState::<SalesAgent>::default()));

        block_on(load_resource::<AgentOptions, _, _, _>(&transport, &config(), &cell));

        assert_eq!(
            cell.borrow().status.error(),
            Some("No se pudieron cargar los vendedores")
        );
    }
}
