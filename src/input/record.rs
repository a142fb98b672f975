use csv::StringRecord;
use std::collections::{BTreeMap, HashMap};

/// A single (country, year, gdp) observation taken from one CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdpRecord {
    pub country: String,
    pub year: i64,
    pub gdp: i64,
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub country: usize,
    pub gdp: usize,
    pub year: usize,
}

impl ColumnLayout {
    pub const COUNTRY: &'static str = "country";
    pub const GDP: &'static str = "gdp";
    pub const YEAR: &'static str = "year";

    /// Locate the required columns by exact name. Returns None if any is absent.
    pub fn locate(header: &StringRecord) -> Option<Self> {
        let position = |name: &str| header.iter().position(|field| field == name);
        Some(Self {
            country: position(Self::COUNTRY)?,
            gdp: position(Self::GDP)?,
            year: position(Self::YEAR)?,
        })
    }

    /// Minimum number of fields a row needs to cover every required column.
    pub fn required_len(&self) -> usize {
        self.country.max(self.gdp).max(self.year) + 1
    }
}

/// Years recorded for one country.
pub type YearMap = BTreeMap<i64, i64>;

/// Country -> (year -> gdp), iterated in the order countries were first seen.
///
/// Inserting an existing (country, year) pair overwrites the previous value
/// but keeps the country's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryYearMap {
    entries: Vec<(String, YearMap)>,
    index: HashMap<String, usize>,
}

impl CountryYearMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: GdpRecord) {
        let GdpRecord { country, year, gdp } = record;
        let slot = match self.index.get(&country) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(country.clone(), slot);
                self.entries.push((country, YearMap::new()));
                slot
            }
        };
        self.entries[slot].1.insert(year, gdp);
    }

    #[cfg(test)]
    pub fn get(&self, country: &str) -> Option<&YearMap> {
        self.index.get(country).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &YearMap)> {
        self.entries
            .iter()
            .map(|(country, years)| (country.as_str(), years))
    }
}

impl IntoIterator for CountryYearMap {
    type Item = (String, YearMap);
    type IntoIter = std::vec::IntoIter<(String, YearMap)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
