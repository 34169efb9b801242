//! bl-ttest-core: Welch's t-test between two tabular columns
//!
//! The crate covers the whole run as one linear flow: parse an uploaded
//! CSV/xlsx buffer into a table, pull two columns out as numeric samples,
//! run Welch's t-test, and render the result twice from the same shared
//! histogram table: as text for the screen and as an .xlsx workbook with an
//! embedded column chart for download.

pub mod errors;
pub mod export;
pub mod histogram;
pub mod loader;
pub mod report;
pub mod types;
pub mod welch;

pub use errors::{TtestError, TtestResult};
pub use types::{Alternative, Sample};
