//! Output sinks for the ranked averages: console table and CSV report.

pub mod report;
pub mod table;

pub use report::write_report;
pub use table::render_table;
