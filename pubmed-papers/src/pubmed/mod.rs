//! PubMed client for searching and fetching compact paper records
//!
//! This module talks to the ESearch and EFetch E-utilities and turns the
//! returned article XML into [`PaperRecord`]s.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::{MAX_RESULTS, PubMedClient};
pub use models::{PLACEHOLDER, PaperRecord, SearchOutcome, Stage};
pub use parser::parse_records_from_xml;
