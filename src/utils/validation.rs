use crate::utils::error::{ArchiveError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ArchiveError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_date_order(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(ArchiveError::Config {
                message: format!("from-date {} is after to-date {}", from, to),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("data_dir", "./data").is_ok());
        assert!(validate_non_empty_string("data_dir", "").is_err());
        assert!(validate_non_empty_string("data_dir", "   ").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let early = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        assert!(validate_date_order(Some(early), Some(late)).is_ok());
        assert!(validate_date_order(Some(late), Some(early)).is_err());
        assert!(validate_date_order(None, Some(late)).is_ok());
        assert!(validate_date_order(Some(early), None).is_ok());
        assert!(validate_date_order(None, None).is_ok());
    }
}
