//! Mapping between review records and CSV rows.

use csv::StringRecord;
use revlens_core::{AnalyzedReview, RawReview, Sentiment};

use crate::list_format::{format_list, parse_list};
use crate::table::{RecordKind, Table};

/// A record that can be appended to one of the two store tables.
pub trait StoreRecord {
    const KIND: RecordKind;

    /// Dedup key, comparable with the keys read back from the file.
    fn identity_key(&self) -> String;

    /// Cells in [`RecordKind::header`] order.
    fn to_row(&self) -> Vec<String>;
}

impl StoreRecord for RawReview {
    const KIND: RecordKind = RecordKind::Raw;

    fn identity_key(&self) -> String {
        RawReview::identity_key(self).to_string()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.product.clone(),
            self.site.clone(),
            self.url.clone(),
            self.snippet.clone(),
        ]
    }
}

impl StoreRecord for AnalyzedReview {
    const KIND: RecordKind = RecordKind::Analyzed;

    fn identity_key(&self) -> String {
        AnalyzedReview::identity_key(self)
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.product.clone(),
            self.review.clone(),
            self.sentiment.to_string(),
            format_list(&self.pros),
            format_list(&self.cons),
            format_list(&self.improvements),
            self.verdict.clone(),
        ]
    }
}

/// Build the identity key of a stored row, joining key columns with `||`.
pub(crate) fn row_key(table: &Table, row: &StringRecord, kind: RecordKind) -> String {
    kind.key_columns()
        .iter()
        .map(|col| table.value(row, col))
        .collect::<Vec<_>>()
        .join(revlens_core::ANALYZED_KEY_SEPARATOR)
}

/// Decode one analyzed-table row.
pub(crate) fn analyzed_from_row(table: &Table, row: &StringRecord) -> Result<AnalyzedReview, String> {
    let sentiment = table.value(row, "sentiment").parse::<Sentiment>()?;
    Ok(AnalyzedReview {
        product: table.value(row, "product").to_string(),
        review: table.value(row, "review").to_string(),
        sentiment,
        pros: parse_list(table.value(row, "pros")),
        cons: parse_list(table.value(row, "cons")),
        improvements: parse_list(table.value(row, "improvements")),
        verdict: table.value(row, "verdict").to_string(),
    })
}
