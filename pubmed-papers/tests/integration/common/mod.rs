//! Shared helpers for mocked E-utilities tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pubmed_papers::{ClientConfig, PubMedClient};
use wiremock::MockServer;

/// PMIDs of the articles in `three_articles.xml`, in document order
pub const THREE_ARTICLE_PMIDS: [&str; 3] = ["31978945", "33515491", "25760099"];

fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/integration/test_data")
}

/// Read an EFetch XML fixture from `test_data/efetch`
pub fn efetch_fixture(name: &str) -> String {
    let path = test_data_dir().join("efetch").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// ESearch JSON body listing `pmids`
pub fn esearch_json(pmids: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "header": { "type": "esearch", "version": "0.3" },
        "esearchresult": {
            "count": pmids.len().to_string(),
            "retmax": pmids.len().to_string(),
            "retstart": "0",
            "idlist": pmids,
        }
    })
}

/// Client pointed at the mock server
pub fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_tool("test-client");

    PubMedClient::with_config(config).expect("client should build")
}
