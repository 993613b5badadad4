pub mod criteria_file;

pub use criteria_file::CriteriaFile;

#[cfg(feature = "cli")]
mod cli {
    use super::CriteriaFile;
    use crate::domain::model::SearchCriteria;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_date_order, validate_non_empty_string, Validate};
    use chrono::NaiveDate;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "shipment-archive")]
    #[command(about = "Search the shipment archive and render printable reports")]
    pub struct CliConfig {
        /// Directory holding the record store and cached lists
        #[arg(long, default_value = "./data")]
        pub data_dir: String,

        /// Directory the rendered report is written to
        #[arg(long, default_value = "./output")]
        pub output_dir: String,

        /// Case-insensitive substring match on the file number
        #[arg(long)]
        pub file_number: Option<String>,

        /// Case-insensitive substring match on the client name
        #[arg(long)]
        pub client: Option<String>,

        /// Exact match on the responsible person
        #[arg(long)]
        pub responsible: Option<String>,

        /// Inclusive lower bound on the archive date (YYYY-MM-DD)
        #[arg(long)]
        pub from_date: Option<NaiveDate>,

        /// Inclusive upper bound on the archive date (YYYY-MM-DD)
        #[arg(long)]
        pub to_date: Option<NaiveDate>,

        /// Load search criteria from a TOML file instead of the flags above
        #[arg(long)]
        pub criteria: Option<PathBuf>,

        /// Render and print a report over the whole archive
        #[arg(long)]
        pub report: bool,

        /// List the responsible-person selector options and exit
        #[arg(long)]
        pub list_responsibles: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Effective search criteria: the TOML file when given, else the
        /// individual flags.
        pub fn search_criteria(&self) -> Result<SearchCriteria> {
            if let Some(path) = &self.criteria {
                return CriteriaFile::load(path);
            }
            Ok(SearchCriteria {
                file_number: self.file_number.clone(),
                client: self.client.clone(),
                responsible: self.responsible.clone(),
                from_date: self.from_date,
                to_date: self.to_date,
            })
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_empty_string("data_dir", &self.data_dir)?;
            validate_non_empty_string("output_dir", &self.output_dir)?;
            validate_date_order(self.from_date, self.to_date)?;
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
