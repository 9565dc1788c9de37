use crate::utils::error::{FleetError, Result};
use chrono::{NaiveDate, NaiveTime};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FleetError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 表單必填文字欄位（去除空白後不可為空）
pub fn require_text(field_name: &str, value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::validation(field_name, message));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FleetError::validation(
            field_name,
            format!("{} must be between {} and {}", field_name, min, max),
        ));
    }
    Ok(())
}

/// 數值必須是有限的正數（NaN 也視為無效）
pub fn validate_positive(field_name: &str, value: f64, message: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FleetError::validation(field_name, message));
    }
    Ok(())
}

pub fn validate_positive_id(field_name: &str, value: Option<i64>, message: &str) -> Result<i64> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(FleetError::validation(field_name, message)),
    }
}

pub fn parse_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FleetError::validation(field_name, "Invalid date format"))
}

pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(FleetError::validation(
            "EindDatum",
            "End date cannot be before start date",
        ));
    }
    Ok(())
}

/// `HH:MM` 補成 `HH:MM:SS`，其他格式原樣保留
pub fn normalize_time(value: &str) -> String {
    let trimmed = value.trim();
    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(time) => time.format("%H:%M:%S").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

pub fn parse_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|_| {
        FleetError::validation(
            field_name,
            format!("{} must be a time in HH:MM or HH:MM:SS format", field_name),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://drone.example.com/api").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:5328/api").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range_bounds_are_inclusive() {
        assert!(validate_range("batterij", 0, 0, 100).is_ok());
        assert!(validate_range("batterij", 100, 0, 100).is_ok());
        let err = validate_range("batterij", 101, 0, 100).unwrap_err();
        assert_eq!(err.to_string(), "batterij must be between 0 and 100");
        assert!(validate_range("batterij", -1, 0, 100).is_err());
    }

    #[test]
    fn test_validate_positive_rejects_zero_and_nan() {
        assert!(validate_positive("breedte", 12.5, "bad").is_ok());
        assert!(validate_positive("breedte", 0.0, "bad").is_err());
        assert!(validate_positive("breedte", -3.0, "bad").is_err());
        assert!(validate_positive("breedte", f64::NAN, "bad").is_err());
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("09:30"), "09:30:00");
        assert_eq!(normalize_time("09:30:15"), "09:30:15");
        assert_eq!(normalize_time(" 18:00 "), "18:00:00");
        assert_eq!(normalize_time(""), "");
    }

    #[test]
    fn test_normalize_time_leaves_other_shapes_alone() {
        assert_eq!(normalize_time("9:5:0"), "9:5:0");
        assert_eq!(normalize_time("ab:cd"), "ab:cd");
        assert_eq!(normalize_time("12345"), "12345");
    }

    #[test]
    fn test_date_order() {
        let start = parse_iso_date("StartDatum", "2025-06-01").unwrap();
        let end = parse_iso_date("EindDatum", "2025-06-03").unwrap();
        assert!(validate_date_order(start, end).is_ok());
        assert!(validate_date_order(start, start).is_ok());

        let err = validate_date_order(end, start).unwrap_err();
        assert_eq!(err.to_string(), "End date cannot be before start date");
        assert!(parse_iso_date("StartDatum", "01-06-2025").is_err());
    }
}
