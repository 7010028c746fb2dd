use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PubMedError;

/// Value used for a field whose element is missing or empty in the EFetch XML
pub const PLACEHOLDER: &str = "N/A";

/// Compact bibliographic record for one PubMed article
///
/// Field names serialize as `PubmedID`, `Title`, `Authors`, `Abstract`,
/// which are also the CSV column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed ID
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    /// Article title
    #[serde(rename = "Title")]
    pub title: String,
    /// `"ForeName LastName"` entries joined with `", "`
    #[serde(rename = "Authors")]
    pub authors: String,
    /// First abstract section
    #[serde(rename = "Abstract")]
    pub abstract_text: String,
}

impl PaperRecord {
    /// Column names in output order
    pub const HEADERS: [&'static str; 4] = ["PubmedID", "Title", "Authors", "Abstract"];

    /// Field values in the same order as [`PaperRecord::HEADERS`]
    pub fn fields(&self) -> [&str; 4] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.authors.as_str(),
            self.abstract_text.as_str(),
        ]
    }

    pub fn has_abstract(&self) -> bool {
        self.abstract_text != PLACEHOLDER
    }

    pub fn has_authors(&self) -> bool {
        self.authors != PLACEHOLDER
    }
}

/// Which of the two E-utilities calls a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// ESearch: query to PMID list
    Search,
    /// EFetch: PMID list to article XML
    Fetch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Search => write!(f, "search"),
            Stage::Fetch => write!(f, "fetch"),
        }
    }
}

/// Result of a search-and-fetch round trip
///
/// Keeps "nothing matched" apart from "the API could not be reached" and
/// "the API sent something unreadable", so the caller can word each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one record was extracted
    Found(Vec<PaperRecord>),
    /// The query matched nothing, or the fetched document held no articles
    NoMatches,
    /// Non-success HTTP status or connection failure
    TransportError {
        stage: Stage,
        status: Option<u16>,
        message: String,
    },
    /// The response body could not be interpreted
    ParseError { stage: Stage, detail: String },
}

impl SearchOutcome {
    /// Classify an error raised during `stage`
    pub fn from_error(stage: Stage, error: PubMedError) -> Self {
        if error.is_transport() {
            SearchOutcome::TransportError {
                stage,
                status: error.status(),
                message: error.to_string(),
            }
        } else {
            SearchOutcome::ParseError {
                stage,
                detail: error.to_string(),
            }
        }
    }

    /// Records carried by the outcome; empty for every variant but `Found`
    pub fn records(&self) -> &[PaperRecord] {
        match self {
            SearchOutcome::Found(records) => records,
            _ => &[],
        }
    }

    pub fn into_records(self) -> Vec<PaperRecord> {
        match self {
            SearchOutcome::Found(records) => records,
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            SearchOutcome::TransportError { .. } | SearchOutcome::ParseError { .. }
        )
    }
}
