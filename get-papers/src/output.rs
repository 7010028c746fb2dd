//! Terminal table rendering for paper records

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use pubmed_papers::PaperRecord;

/// Render one row per record under a `PubmedID | Title | Authors | Abstract` header
///
/// With `width`, cells are wrapped so the table fits in that many columns;
/// without it every cell stays on a single line.
pub fn render_table(records: &[PaperRecord], width: Option<u16>) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(PaperRecord::HEADERS);

    if let Some(width) = width {
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(width);
    }

    for record in records {
        table.add_row(record.fields());
    }

    table.to_string()
}
