//! Cleanup applied to EFetch XML before extraction

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Remove inline formatting tags (`<i>`, `<sup>`, `<b>`, ...) from titles and abstracts
///
/// PubMed marks up chemical formulas, gene names and emphasis inline. Left in
/// place they split an element's text into several pieces; stripped, the
/// text reads as it would on the PubMed page.
///
/// ```ignore
/// let cleaned = strip_inline_markup("<ArticleTitle>CO<sub>2</sub> uptake</ArticleTitle>");
/// assert_eq!(cleaned, "<ArticleTitle>CO2 uptake</ArticleTitle>");
/// ```
pub(crate) fn strip_inline_markup(xml: &str) -> String {
    static INLINE_TAG: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag pattern is valid")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            removed_bytes = xml.len() - cleaned.len(),
            "Stripped inline markup from EFetch XML"
        );
    }

    cleaned.into_owned()
}
