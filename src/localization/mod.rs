//! Localization system
//!
//! Parses delimited resource text into per-language lookup tables and
//! serves lookups with fallback-to-key behavior.

pub mod parser;
pub mod table;

pub use parser::{LoadReport, ResourceTable};
pub use table::LocalizationTable;
