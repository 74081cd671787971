//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! request handling never reads process-wide environment variables.

use crate::constants::{
    DEFAULT_NEIS_BASE_URL, DEFAULT_OFFICE_CODE, DEFAULT_SCHOOL_CODE, DEFAULT_SCHOOL_FULL_NAME,
    DEFAULT_SCHOOL_NAME,
};
use crate::{MealError, MealResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    neis_base_url: String,
    office_code: String,
    school_code: String,
    school_name: String,
    school_full_name: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    /// Returns [`MealError::InvalidInput`] if:
    /// - `neis_base_url` does not start with `http://` or `https://`,
    /// - `office_code` or `school_code` is empty or contains characters other than ASCII
    ///   alphanumerics.
    pub fn new(
        neis_base_url: String,
        office_code: String,
        school_code: String,
        school_name: String,
        school_full_name: String,
    ) -> MealResult<Self> {
        if !(neis_base_url.starts_with("http://") || neis_base_url.starts_with("https://")) {
            return Err(MealError::InvalidInput(format!(
                "NEIS base URL must be http(s), got: '{neis_base_url}'"
            )));
        }
        validate_code("office code", &office_code)?;
        validate_code("school code", &school_code)?;

        Ok(Self {
            neis_base_url,
            office_code,
            school_code,
            school_name,
            school_full_name,
        })
    }

    /// Build a configuration from optional override values, falling back to the defaults for
    /// anything missing or blank.
    ///
    /// The arguments are typically `std::env::var(..).ok()` results read by the binary.
    pub fn from_overrides(
        neis_base_url: Option<String>,
        office_code: Option<String>,
        school_code: Option<String>,
        school_name: Option<String>,
        school_full_name: Option<String>,
    ) -> MealResult<Self> {
        Self::new(
            value_or_default(neis_base_url, DEFAULT_NEIS_BASE_URL),
            value_or_default(office_code, DEFAULT_OFFICE_CODE),
            value_or_default(school_code, DEFAULT_SCHOOL_CODE),
            value_or_default(school_name, DEFAULT_SCHOOL_NAME),
            value_or_default(school_full_name, DEFAULT_SCHOOL_FULL_NAME),
        )
    }

    pub fn neis_base_url(&self) -> &str {
        &self.neis_base_url
    }

    pub fn office_code(&self) -> &str {
        &self.office_code
    }

    pub fn school_code(&self) -> &str {
        &self.school_code
    }

    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    pub fn school_full_name(&self) -> &str {
        &self.school_full_name
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            neis_base_url: DEFAULT_NEIS_BASE_URL.into(),
            office_code: DEFAULT_OFFICE_CODE.into(),
            school_code: DEFAULT_SCHOOL_CODE.into(),
            school_name: DEFAULT_SCHOOL_NAME.into(),
            school_full_name: DEFAULT_SCHOOL_FULL_NAME.into(),
        }
    }
}

fn value_or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn validate_code(what: &str, code: &str) -> MealResult<()> {
    if code.is_empty() {
        return Err(MealError::InvalidInput(format!("{what} cannot be empty")));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(MealError::InvalidInput(format!(
            "{what} must be ASCII alphanumeric, got: '{code}'"
        )));
    }
    Ok(())
}
