//! Query form input and validation.

use serde::Deserialize;

pub const FIELD_REQUIRED: &str = "This field is required.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer value.";

/// Raw form submission. Fields a page does not use are simply left empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub comune: String,
    #[serde(default)]
    pub year: String,
}

impl QueryForm {
    /// Validated municipality name.
    pub fn comune(&self) -> Result<String, &'static str> {
        let comune = self.comune.trim();
        if comune.is_empty() {
            Err(FIELD_REQUIRED)
        } else {
            Ok(comune.to_string())
        }
    }

    /// Validated year.
    pub fn year(&self) -> Result<i32, &'static str> {
        let year = self.year.trim();
        if year.is_empty() {
            return Err(FIELD_REQUIRED);
        }
        year.parse::<i32>().map_err(|_| NOT_AN_INTEGER)
    }
}
