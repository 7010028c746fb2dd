use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers",
    version,
    about = "Fetch research papers from PubMed for a query",
    long_about = "Searches PubMed, fetches the top matches and prints them as a table, \
                  or saves them as CSV with --file"
)]
struct Cli {
    #[command(flatten)]
    command: commands::get_papers::GetPapers,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers")]
    tool: String,

    /// E-utilities base URL
    #[arg(long, env = "NCBI_EUTILS_BASE_URL", hide = true)]
    base_url: Option<String>,

    /// HTTP request timeout in seconds (default: no explicit timeout)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "pubmed_papers=debug,get_papers=debug,warn"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.command.debug);

    let client = commands::create_pubmed_client(
        cli.email.as_deref(),
        &cli.tool,
        cli.base_url.as_deref(),
        cli.timeout,
    )?;

    let mut stdout = std::io::stdout();
    let status = cli.command.execute(&client, &mut stdout).await?;

    Ok(status.into())
}
