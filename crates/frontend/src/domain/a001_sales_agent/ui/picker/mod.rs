use crate::shared::components::ui::Select;
use contracts::domain::a001_sales_agent::aggregate::SalesAgent;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Placeholder entry of the selector; its empty value fails required checks
pub const AGENT_PLACEHOLDER: &str = "Seleccione un vendedor";

/// `(value, label)` options for an agent `<select>`
pub fn agent_options(agents: &[SalesAgent]) -> Vec<(String, String)> {
    std::iter::once((String::new(), AGENT_PLACEHOLDER.to_string()))
        .chain(
            agents
                .iter()
                .map(|a| (a.id.as_string(), a.display_name())),
        )
        .collect()
}

/// Agent selector fed by a read-only agents list
#[component]
pub fn SalesAgentSelect(
    #[prop(into)]
    agents: Signal<Vec<SalesAgent>>,
    /// Selected agent id as option value, empty when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options = Signal::derive(move || agents.with(|a| agent_options(a)));

    view! {
        <Select
            id="vendedor"
            label="Vendedor:"
            title=AGENT_PLACEHOLDER
            required=true
            value=value
            options=options
            on_change=on_change
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_agent::aggregate::SalesAgentId;

    #[test]
    fn test_options_start_with_placeholder() {
        let agents = vec![
            SalesAgent {
                id: SalesAgentId(1),
                name: "Ana".into(),
                email: "a@x.com".into(),
            },
            SalesAgent {
                id: SalesAgentId(7),
                name: "Luis".into(),
                email: "l@x.com".into(),
            },
        ];
        assert_eq!(
            agent_options(&agents),
            vec![
                (String::new(), AGENT_PLACEHOLDER.to_string()),
                ("1".to_string(), "Ana (a@x.com)".to_string()),
                ("7".to_string(), "Luis (l@x.com)".to_string()),
            ]
        );
        assert_eq!(agent_options(&[]).len(), 1);
    }
}
