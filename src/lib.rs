pub mod app;
pub mod catalog;
pub mod overlay;
pub mod page;
pub mod query;
pub mod render;
pub mod ui;
pub mod util;
