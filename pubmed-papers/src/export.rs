//! CSV export for paper records
//!
//! Columns are `PubmedID,Title,Authors,Abstract`. Fields are quoted only when
//! they contain a delimiter, quote or line break, and rows end with `\n`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::PaperRecord;

/// Write a header row followed by one row per record
///
/// The header is written even when `records` is empty.
pub fn write_csv<W: Write>(writer: W, records: &[PaperRecord]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(PaperRecord::HEADERS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Render records as a CSV document
///
/// # Example
///
/// ```
/// use pubmed_papers::PaperRecord;
/// use pubmed_papers::export::records_to_csv;
///
/// let records = vec![PaperRecord {
///     pubmed_id: "1".to_string(),
///     title: "T".to_string(),
///     authors: "A".to_string(),
///     abstract_text: "Ab".to_string(),
/// }];
///
/// assert_eq!(records_to_csv(&records)?, "PubmedID,Title,Authors,Abstract\n1,T,A,Ab\n");
/// # Ok::<(), pubmed_papers::PubMedError>(())
/// ```
pub fn records_to_csv(records: &[PaperRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Create (or truncate) `path` and write the records to it
#[instrument(skip(records), fields(path = %path.as_ref().display(), records = records.len()))]
pub fn save_csv<P: AsRef<Path>>(path: P, records: &[PaperRecord]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(file, records)?;
    debug!("CSV file written");
    Ok(())
}

/// Read records back from CSV produced by [`write_csv`]
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PaperRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let records = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<PaperRecord>, _>>()?;

    Ok(records)
}
