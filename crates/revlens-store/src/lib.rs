//! Append-only, deduplicated CSV persistence for collected and analyzed reviews.
//!
//! Two tables live side by side: the collected table (`Product, Site, URL,
//! Review`, keyed by URL) and the analyzed table (`product, review, sentiment,
//! pros, cons, improvements, verdict`, keyed by `product||review`). Rows are
//! never rewritten or deleted; appends skip any row whose identity key is
//! already present.
//!
//! The read-then-append sequence is not atomic across processes. Callers must
//! run one collection or analysis at a time against a given data directory.

pub mod error;
pub mod list_format;
pub mod records;
pub mod store;
pub mod table;

pub use error::{StoreError, StoreReadFailure};
pub use records::StoreRecord;
pub use store::{AppendSummary, ReviewStore};
pub use table::{RecordKind, Table};
