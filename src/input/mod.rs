//! Reading GDP observations from CSV inputs into a per-country/year map.

pub mod parse;
pub mod record;

pub use parse::read_files;
pub use record::{ColumnLayout, CountryYearMap, GdpRecord};
