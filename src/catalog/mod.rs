pub mod data;
pub mod models;

pub use models::{Book, Catalog};
