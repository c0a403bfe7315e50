//! Catalog of fuzzer prototypes and its flat-text loader.

mod database;
mod parser;
mod prototype;

pub use database::Catalog;
pub use prototype::{Kind, Prototype, MAX_RECORD_ITEMS};
