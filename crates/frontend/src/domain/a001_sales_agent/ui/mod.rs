pub mod list;
pub mod picker;
