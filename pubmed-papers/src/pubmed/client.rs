use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::{PaperRecord, SearchOutcome, Stage};
use crate::pubmed::parser::parse_records_from_xml;
use crate::pubmed::responses::ESearchResult;

/// Number of PMIDs requested from ESearch (`retmax`)
pub const MAX_RESULTS: usize = 10;

/// Client for the ESearch and EFetch E-utilities
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_papers::PubMedClient;
    ///
    /// let client = PubMedClient::new()?;
    /// # Ok::<(), pubmed_papers::PubMedError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_papers::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_tool("get-papers");
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), pubmed_papers::PubMedError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search PubMed and return up to [`MAX_RESULTS`] PMIDs in ranking order
    ///
    /// A blank query returns an empty list without contacting the API.
    ///
    /// # Errors
    ///
    /// * `PubMedError::ApiError` - Non-success status, or an `ERROR` in the response body
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::JsonError` - If the body is not ESearch JSON
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_ids(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmode=json&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            MAX_RESULTS
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes reports errors inside a 200 OK body
        if let Some(error_msg) = search_result.esearchresult.error {
            warn!(error = %error_msg, "ESearch reported an error");
            return Err(PubMedError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let ids = search_result.esearchresult.idlist;
        debug!(
            total = search_result.esearchresult.count.as_deref().unwrap_or("unknown"),
            returned = ids.len(),
            "ESearch completed"
        );

        Ok(ids)
    }

    /// Fetch article XML for `pmids` in one EFetch request and extract records
    ///
    /// Records come back in the order EFetch lists the articles.
    ///
    /// # Errors
    ///
    /// * `PubMedError::ApiError` - Non-success status
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::XmlError` - If the body is not well-formed XML
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_records<S: AsRef<str>>(&self, pmids: &[S]) -> Result<Vec<PaperRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let id_list = pmids
            .iter()
            .map(|id| id.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            urlencoding::encode(&id_list)
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let records = parse_records_from_xml(&xml_text)?;
        info!(
            requested = pmids.len(),
            parsed = records.len(),
            "EFetch completed"
        );

        Ok(records)
    }

    /// Search for `query` and fetch the matching records
    ///
    /// Never fails: every failure is reported through the returned
    /// [`SearchOutcome`], tagged with the step that failed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_papers::{PubMedClient, SearchOutcome};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     match client.fetch_papers("crispr off-target").await {
    ///         SearchOutcome::Found(records) => {
    ///             for record in records {
    ///                 println!("{}: {}", record.pubmed_id, record.title);
    ///             }
    ///         }
    ///         SearchOutcome::NoMatches => println!("No papers found."),
    ///         other => eprintln!("{:?}", other),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query))]
    pub async fn fetch_papers(&self, query: &str) -> SearchOutcome {
        let pmids = match self.search_ids(query).await {
            Ok(pmids) => pmids,
            Err(e) => {
                warn!(error = %e, "Search step failed");
                return SearchOutcome::from_error(Stage::Search, e);
            }
        };

        if pmids.is_empty() {
            info!("No papers found for the given query");
            return SearchOutcome::NoMatches;
        }

        match self.fetch_records(&pmids).await {
            Ok(records) if records.is_empty() => {
                info!("EFetch returned no articles");
                SearchOutcome::NoMatches
            }
            Ok(records) => SearchOutcome::Found(records),
            Err(e) => {
                warn!(error = %e, "Fetch step failed");
                SearchOutcome::from_error(Stage::Fetch, e)
            }
        }
    }

    /// Send a GET request with the NCBI identification parameters appended.
    /// Any non-success status becomes `PubMedError::ApiError`.
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();

        for (key, value) in self.config.build_api_params() {
            let separator = if final_url.contains('?') { '&' } else { '?' };
            final_url.push(separator);
            final_url.push_str(&key);
            final_url.push('=');
            final_url.push_str(&urlencoding::encode(&value));
        }

        // Without the tool/email parameters
        debug!("Making API request to: {}", url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
