//! EFetch XML extraction
//!
//! Walks a PubMed EFetch document (`retmode=xml`) with a streaming reader and
//! produces one [`PaperRecord`] per `<PubmedArticle>`, in document order.
//!
//! Within an article:
//!
//! - `PubmedID` is the first `<PMID>` anywhere below the article
//! - `Title` is the first `<ArticleTitle>`
//! - `Abstract` is the first `<AbstractText>` directly under an `<Abstract>`
//! - `Authors` lists every `<Author>` with both a `<ForeName>` and a
//!   `<LastName>` child, as `"ForeName LastName"`, joined with `", "`
//!
//! A field whose element is missing (or has no text) becomes [`PLACEHOLDER`].
//! Authors missing either name part are left out of the list.

mod preprocessing;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::{PLACEHOLDER, PaperRecord};
use preprocessing::strip_inline_markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pmid,
    Title,
    Abstract,
    ForeName,
    LastName,
}

/// Text collected for a field until its element closes
struct Capture {
    field: Field,
    depth: usize,
    text: String,
}

#[derive(Default)]
struct AuthorBuilder {
    fore_name: Option<String>,
    last_name: Option<String>,
}

#[derive(Default)]
struct ArticleBuilder {
    pmid: Option<String>,
    title: Option<String>,
    abstract_text: Option<String>,
    authors: Vec<String>,
    current_author: Option<AuthorBuilder>,
}

impl ArticleBuilder {
    /// Register an opening tag; returns the field to capture if this element fills one
    fn open(&mut self, name: &[u8], parent: &[u8]) -> Option<Field> {
        let field = match name {
            b"Author" => {
                self.current_author = Some(AuthorBuilder::default());
                return None;
            }
            b"PMID" => Field::Pmid,
            b"ArticleTitle" => Field::Title,
            b"AbstractText" if parent == b"Abstract" => Field::Abstract,
            b"ForeName" if parent == b"Author" => Field::ForeName,
            b"LastName" if parent == b"Author" => Field::LastName,
            _ => return None,
        };

        // Only the first matching element counts
        self.slot(field)?.is_none().then_some(field)
    }

    fn slot(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::Pmid => Some(&mut self.pmid),
            Field::Title => Some(&mut self.title),
            Field::Abstract => Some(&mut self.abstract_text),
            Field::ForeName => self.current_author.as_mut().map(|a| &mut a.fore_name),
            Field::LastName => self.current_author.as_mut().map(|a| &mut a.last_name),
        }
    }

    fn assign(&mut self, field: Field, text: String) {
        if let Some(slot) = self.slot(field) {
            *slot = Some(text.trim().to_string());
        }
    }

    fn close_author(&mut self) {
        let Some(author) = self.current_author.take() else {
            return;
        };

        match (non_empty(author.fore_name), non_empty(author.last_name)) {
            (Some(fore), Some(last)) => self.authors.push(format!("{} {}", fore, last)),
            _ => debug!("Skipping author without both ForeName and LastName"),
        }
    }

    fn build(self) -> PaperRecord {
        let authors = if self.authors.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.authors.join(", ")
        };

        PaperRecord {
            pubmed_id: or_placeholder(self.pmid),
            title: or_placeholder(self.title),
            authors,
            abstract_text: or_placeholder(self.abstract_text),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn or_placeholder(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn xml_error<R>(reader: &Reader<R>, err: impl std::fmt::Display) -> PubMedError {
    PubMedError::XmlError(format!(
        "Failed to parse EFetch XML at byte {}: {}",
        reader.buffer_position(),
        err
    ))
}

/// Extract paper records from an EFetch XML response
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] when the body is empty, is not
/// well-formed XML, or leaves elements unclosed.
///
/// # Example
///
/// ```
/// use pubmed_papers::parse_records_from_xml;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article><ArticleTitle>Example Article</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let records = parse_records_from_xml(xml)?;
/// assert_eq!(records[0].pubmed_id, "12345678");
/// assert_eq!(records[0].abstract_text, "N/A");
/// # Ok::<(), pubmed_papers::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_records_from_xml(xml: &str) -> Result<Vec<PaperRecord>> {
    if xml.trim().is_empty() {
        return Err(PubMedError::XmlError(
            "EFetch response body is empty".to_string(),
        ));
    }

    let cleaned = strip_inline_markup(xml);
    // Text pieces keep their whitespace; `assign` trims the whole field
    let mut reader = Reader::from_str(&cleaned);

    let mut records = Vec::new();
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut article: Option<ArticleBuilder> = None;
    let mut capture: Option<Capture> = None;
    let mut seen_element = false;

    loop {
        let event = reader.read_event().map_err(|e| xml_error(&reader, e))?;

        match event {
            Event::Start(e) => {
                seen_element = true;
                let name = e.name().as_ref().to_vec();

                if name == b"PubmedArticle" {
                    article = Some(ArticleBuilder::default());
                } else if let Some(builder) = article.as_mut() {
                    let parent = open.last().map(Vec::as_slice).unwrap_or_default();
                    if let Some(field) = builder.open(&name, parent) {
                        if capture.is_none() {
                            capture = Some(Capture {
                                field,
                                depth: open.len() + 1,
                                text: String::new(),
                            });
                        }
                    }
                }

                open.push(name);
            }
            Event::Empty(e) => {
                seen_element = true;
                if e.name().as_ref() == b"PubmedArticle" {
                    records.push(ArticleBuilder::default().build());
                } else if let Some(builder) = article.as_mut() {
                    let name = e.name();
                    let parent = open.last().map(Vec::as_slice).unwrap_or_default();
                    if let Some(field) = builder.open(name.as_ref(), parent) {
                        builder.assign(field, String::new());
                    }
                    if name.as_ref() == b"Author" {
                        builder.close_author();
                    }
                }
            }
            Event::Text(e) => {
                if let Some(c) = capture.as_mut() {
                    let text = e.unescape().map_err(|err| xml_error(&reader, err))?;
                    c.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => {
                let depth = open.len();
                if let Some(done) = capture.take_if(|c| c.depth == depth) {
                    if let Some(builder) = article.as_mut() {
                        builder.assign(done.field, done.text);
                    }
                }
                open.pop();

                match e.name().as_ref() {
                    b"Author" => {
                        if let Some(builder) = article.as_mut() {
                            builder.close_author();
                        }
                    }
                    b"PubmedArticle" => {
                        if let Some(builder) = article.take() {
                            records.push(builder.build());
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(name) = open.last() {
        return Err(PubMedError::XmlError(format!(
            "Unexpected end of EFetch XML: <{}> is not closed",
            String::from_utf8_lossy(name)
        )));
    }

    if !seen_element {
        return Err(PubMedError::XmlError(
            "EFetch response contains no XML elements".to_string(),
        ));
    }

    debug!(records = records.len(), "Extracted paper records");
    Ok(records)
}
