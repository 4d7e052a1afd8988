pub mod a001_sales_agent;
pub mod a002_commission_rule;
pub mod a003_sale;
