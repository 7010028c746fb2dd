pub mod get_papers;

use std::time::Duration;

use anyhow::Result;
use pubmed_papers::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    email: Option<&str>,
    tool: &str,
    base_url: Option<&str>,
    timeout_seconds: Option<u64>,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }

    if let Some(seconds) = timeout_seconds {
        config = config.with_timeout(Duration::from_secs(seconds));
    }

    Ok(PubMedClient::with_config(config)?)
}
