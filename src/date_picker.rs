//! Calendar pop-up attached to the form's date fields

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;

use crate::form::LuckyForm;

/// Display pattern the date fields are configured with
pub const DEFAULT_PATTERN: &str = "dd/mm/yy";

/// Formats and parses dates using a calendar widget display pattern.
///
/// Pattern tokens follow the widget's conventions, not chrono's: `d`/`dd` day without/with padding, `m`/`mm`
/// month without/with padding, `y` two-digit year and `yy` four-digit year. Any other character is copied
/// literally; any other letter is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePicker {
    pattern: String,
    chrono_format: String,
}

impl Default for DatePicker {
    fn default() -> Self {
        DatePicker {
            pattern: DEFAULT_PATTERN.to_string(),
            chrono_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl DatePicker {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(DatePicker {
            pattern: pattern.to_string(),
            chrono_format: to_chrono_format(pattern)?,
        })
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.chrono_format).to_string()
    }

    pub fn parse(&self, value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), &self.chrono_format)
            .with_context(|| format!("'{value}' does not match date pattern '{}'", self.pattern))
    }

    /// Attaches this picker to every date field of `form`, in document order
    pub fn attach<'a>(&'a self, form: &'a LuckyForm) -> Vec<AttachedPicker<'a>> {
        form.date_fields()
            .map(|field| {
                log::debug!("Date picker '{}' attached to {}", self.pattern, field.name);
                AttachedPicker {
                    field: &field.name,
                    value: &field.value,
                    picker: self,
                }
            })
            .collect()
    }
}

/// A date field together with the picker driving it
#[derive(Debug)]
pub struct AttachedPicker<'a> {
    pub field: &'a str,
    value: &'a str,
    picker: &'a DatePicker,
}

impl AttachedPicker<'_> {
    /// Date currently shown in the field, `None` when the field is blank
    pub fn selected(&self) -> Result<Option<NaiveDate>> {
        if self.value.trim().is_empty() {
            return Ok(None);
        }
        self.picker
            .parse(self.value)
            .with_context(|| format!("Invalid date in field {}", self.field))
            .map(Some)
    }
}

fn to_chrono_format(pattern: &str) -> Result<String> {
    let mut format = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            if c == '%' {
                format.push_str("%%");
            } else {
                format.push(c);
            }
            continue;
        }
        let doubled = chars.next_if_eq(&c).is_some();
        let specifier = match (c, doubled) {
            ('d', false) => "%-d",
            ('d', true) => "%d",
            ('m', false) => "%-m",
            ('m', true) => "%m",
            ('y', false) => "%y",
            ('y', true) => "%Y",
            _ => bail!("Unsupported token '{c}' in date pattern '{pattern}'"),
        };
        format.push_str(specifier);
    }
    if format.is_empty() {
        return Err(anyhow!("Date pattern is empty"));
    }
    Ok(format)
}
