//! In-memory form holding the lucky number fields

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    date_picker::DatePicker,
    history::LuckyNumber,
    provider::{Slot, SlotProvider},
};

const FIELD_PREFIX: &str = "lucky-";
const NUMBER_SUFFIX: &str = "number";
const DATE_SUFFIX: &str = "-date";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Field {
    pub fn new(name: &str, value: &str) -> Self {
        Field {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_number(&self) -> bool {
        self.name.starts_with(FIELD_PREFIX) && self.name.ends_with(NUMBER_SUFFIX)
    }

    pub fn is_date(&self) -> bool {
        self.name.starts_with(FIELD_PREFIX) && self.name.ends_with(DATE_SUFFIX)
    }

    /// Part of the name shared by the number and date fields of one row, e.g. `3` for `lucky-3-number`
    fn row_key(&self) -> Option<&str> {
        let inner = self.name.strip_prefix(FIELD_PREFIX)?;
        let inner = inner
            .strip_suffix(DATE_SUFFIX)
            .or_else(|| inner.strip_suffix(NUMBER_SUFFIX))?;
        Some(inner.trim_end_matches('-'))
    }
}

impl Slot for Field {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Form listing the numbers still available and the fields receiving the lucky numbers.
///
/// Fields are kept in document order; number slots and date fields are recognised by their names
/// (`lucky-…number` and `lucky-…-date`), everything else is carried along untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyForm {
    #[serde(default)]
    pub unused_numbers: Vec<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// The number slots of a form, borrowed for a draw or clear
#[derive(Debug)]
pub struct NumberFields<'a>(&'a mut [Field]);

impl SlotProvider for NumberFields<'_> {
    fn list_slots(&mut self) -> Vec<&mut dyn Slot> {
        self.0
            .iter_mut()
            .filter(|field| field.is_number())
            .map(|field| field as &mut dyn Slot)
            .collect()
    }
}

impl LuckyForm {
    /// One date and one number field per date, dates pre-filled in the picker's pattern
    pub fn for_week(dates: &[NaiveDate], unused_numbers: Vec<String>, picker: &DatePicker) -> Self {
        let fields = dates
            .iter()
            .enumerate()
            .flat_map(|(i, date)| {
                [
                    Field::new(&format!("{FIELD_PREFIX}{i}{DATE_SUFFIX}"), &picker.format(*date)),
                    Field::new(&format!("{FIELD_PREFIX}{i}-{NUMBER_SUFFIX}"), ""),
                ]
            })
            .collect();
        LuckyForm {
            unused_numbers,
            fields,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read form {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("Invalid form {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Unable to write form {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn number_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_number())
    }

    pub fn date_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_date())
    }

    /// Splits the form into the candidate pool and the number slots, ready for a draw
    pub fn split_mut(&mut self) -> (&Vec<String>, NumberFields<'_>) {
        (&self.unused_numbers, NumberFields(&mut self.fields))
    }

    /// Rows where both the date and the number are filled in.
    ///
    /// Rows missing either value are skipped. A number that is not a positive integer or a date not matching the
    /// picker's pattern fails the whole form.
    pub fn entries(&self, picker: &DatePicker) -> Result<Vec<LuckyNumber>> {
        let mut entries = vec![];
        for number_field in self.number_fields() {
            let number = number_field.value.trim();
            if number.is_empty() {
                continue;
            }
            let Some(key) = number_field.row_key() else {
                continue;
            };
            let date = self
                .date_fields()
                .find(|field| field.row_key() == Some(key))
                .map(|field| field.value.trim())
                .unwrap_or_default();
            if date.is_empty() {
                log::debug!("Skipping {}, no date given", number_field.name);
                continue;
            }
            let number = number
                .parse::<u16>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("'{number}' in field {} is not a valid number", number_field.name)
                })?;
            let date = picker
                .parse(date)
                .with_context(|| format!("Invalid date for field {}", number_field.name))?;
            entries.push(LuckyNumber { date, number });
        }
        Ok(entries)
    }
}
