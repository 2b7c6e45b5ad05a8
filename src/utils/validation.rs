use crate::utils::error::{Result, VesselError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url_with_schemes(field_name, url_str, &["http", "https"])
}

/// 代理伺服器 URL，必須帶 host 與 port
pub fn validate_proxy_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url_with_schemes(field_name, url_str, &["http", "https"])?;

    let url = Url::parse(url_str).map_err(|e| invalid(field_name, url_str, format!("{}", e)))?;
    if url.host_str().is_none() {
        return Err(invalid(field_name, url_str, "Proxy URL has no host".to_string()));
    }
    if url.port_or_known_default().is_none() {
        return Err(invalid(field_name, url_str, "Proxy URL has no port".to_string()));
    }
    Ok(())
}

fn validate_url_with_schemes(field_name: &str, url_str: &str, schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty".to_string()));
    }

    match Url::parse(url_str) {
        Ok(url) => {
            if schemes.contains(&url.scheme()) {
                Ok(())
            } else {
                Err(invalid(
                    field_name,
                    url_str,
                    format!("Unsupported URL scheme: {}", url.scheme()),
                ))
            }
        }
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only".to_string(),
        ));
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
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// MMSI 必須剛好是 9 個 ASCII 數字
pub fn is_nine_digit_identifier(value: &str) -> bool {
    value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit())
}

fn invalid(field_name: &str, value: &str, reason: String) -> VesselError {
    VesselError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    }
}
