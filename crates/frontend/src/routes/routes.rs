use crate::domain::a001_sales_agent::ui::list::SalesAgentList;
use crate::domain::a002_commission_rule::ui::list::CommissionRuleList;
use crate::domain::a003_sale::ui::list::SaleList;
use crate::system::pages::home::{HomePage, NotFoundPage};
use crate::usecases::u501_calculate_commission::CalculateCommissionView;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <header class="top-header">
                <A href="/" attr:class="top-header__brand">"MINICORE"</A>
            </header>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/vendedores") view=SalesAgentList />
                    <Route path=path!("/reglas") view=CommissionRuleList />
                    <Route path=path!("/ventas") view=SaleList />
                    <Route path=path!("/comisiones") view=CalculateCommissionView />
                </Routes>
            </main>
        </Router>
    }
}
