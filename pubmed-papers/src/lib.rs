//! # PubMed Papers
//!
//! Search PubMed through the NCBI E-utilities and pull back a compact record
//! (PMID, title, authors, abstract) for each of the top matches.
//!
//! A lookup is two sequential requests: ESearch turns the query into at most
//! [`MAX_RESULTS`] PMIDs, then a single EFetch returns the article XML for
//! those PMIDs, which is reduced to [`PaperRecord`]s. Fields missing from the
//! XML are filled with [`PLACEHOLDER`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_papers::{PubMedClient, SearchOutcome};
//! use pubmed_papers::export::save_csv;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new()?;
//!
//!     match client.fetch_papers("covid-19 treatment").await {
//!         SearchOutcome::Found(records) => save_csv("papers.csv", &records)?,
//!         SearchOutcome::NoMatches => println!("No papers found."),
//!         SearchOutcome::TransportError { stage, status, .. } => {
//!             eprintln!("{} request failed (status {:?})", stage, status)
//!         }
//!         SearchOutcome::ParseError { detail, .. } => eprintln!("bad response: {}", detail),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{
    MAX_RESULTS, PLACEHOLDER, PaperRecord, PubMedClient, SearchOutcome, Stage,
    parse_records_from_xml,
};
