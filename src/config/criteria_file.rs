use crate::domain::model::SearchCriteria;
use crate::utils::error::Result;
use std::path::Path;

/// Search criteria loaded from a TOML file, so a recurring search can be kept
/// next to the data instead of retyped as flags:
///
/// ```toml
/// [search]
/// client = "acme"
/// from_date = "2024-01-01"
/// to_date = "2024-06-30"
/// ```
///
/// Dates are quoted ISO strings. Omitted fields stay inactive.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CriteriaFile {
    pub search: SearchCriteria,
}

impl CriteriaFile {
    pub fn load(path: &Path) -> Result<SearchCriteria> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<SearchCriteria> {
        let file: CriteriaFile = toml::from_str(raw)?;
        Ok(file.search)
    }
}
