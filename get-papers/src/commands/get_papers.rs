use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use pubmed_papers::export::save_csv;
use pubmed_papers::{PubMedClient, SearchOutcome, Stage};

use crate::output::render_table;

#[derive(Args, Debug)]
pub struct GetPapers {
    /// Search query (PubMed syntax)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Save results as CSV to this file instead of printing a table
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the number of fetched papers and enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Wrap the table to this many columns
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<u16>,
}

/// How a run ended; converted to the process exit code in `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failed,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failed => ExitCode::FAILURE,
        }
    }
}

impl GetPapers {
    /// Run the query and write user-facing messages to `out`
    ///
    /// "No papers found" is a successful run; transport and parse failures
    /// are reported and yield [`RunStatus::Failed`].
    pub async fn execute<W: Write>(&self, client: &PubMedClient, out: &mut W) -> Result<RunStatus> {
        tracing::debug!(query = %self.query, "Fetching papers");
        let outcome = client.fetch_papers(&self.query).await;

        if self.debug {
            writeln!(out, "Fetched {} papers.", outcome.len())?;
        }

        match outcome {
            SearchOutcome::Found(records) => {
                match &self.file {
                    Some(path) => {
                        save_csv(path, &records)?;
                        tracing::info!(
                            path = %path.display(),
                            records = records.len(),
                            "Results saved to file"
                        );
                        writeln!(out, "Saved results to {}.", path.display())?;
                    }
                    None => {
                        writeln!(out, "{}", render_table(&records, self.width))?;
                    }
                }
                Ok(RunStatus::Success)
            }
            SearchOutcome::NoMatches => {
                writeln!(out, "No papers found.")?;
                Ok(RunStatus::Success)
            }
            SearchOutcome::TransportError {
                stage,
                status,
                message,
            } => {
                let text = match stage {
                    Stage::Search => "Error: Failed to fetch data from PubMed.",
                    Stage::Fetch => "Error: Failed to fetch paper details.",
                };
                writeln!(out, "{}", text)?;

                if self.debug {
                    match status {
                        Some(code) => writeln!(out, "  HTTP status {}", code)?,
                        None => writeln!(out, "  {}", message)?,
                    }
                }
                Ok(RunStatus::Failed)
            }
            SearchOutcome::ParseError { detail, .. } => {
                writeln!(out, "Error: Failed to parse PubMed response: {}", detail)?;
                Ok(RunStatus::Failed)
            }
        }
    }
}
