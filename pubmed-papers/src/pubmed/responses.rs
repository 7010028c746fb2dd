use serde::Deserialize;

/// ESearch JSON envelope (`retmode=json`)
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: ESearchData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub idlist: Vec<String>,
}
