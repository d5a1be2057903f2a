// Sort engine for report rows.
//
// Dictionary-keyed fields are compared on their display label, never on the stored key. Text is
// compared with a locale-aware collator. Numbers compare numerically. Sorting is stable and no
// secondary key is applied, so tied rows keep their incoming order.

use crate::modules::reports::core::department_report::DepartmentLine;
use crate::modules::reports::core::merged_report::MergedProjectRow;
use crate::shared::core::dictionary::{Dictionaries, DictionaryKind};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid sort locale {locale:?}: {reason}")]
    InvalidLocale { locale: String, reason: String },

    #[error("no collation data for {locale:?}: {reason}")]
    Collator { locale: String, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Department,
    Type,
    Level,
    Attribute,
    Platform,
    ProjectName,
    Hours,
    Participants,
}

/// Column header sort state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same field flips the direction; another field starts ascending.
    pub fn click(self, field: SortField) -> Self {
        if self.field == Some(field) {
            Self {
                field: self.field,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                field: Some(field),
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Value a row exposes for one sort field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Key(DictionaryKind, &'a str),
    Text(&'a str),
    Number(f64),
    /// The row has no such column; compares equal to anything.
    Absent,
}

pub trait Sortable {
    fn sort_value(&self, field: SortField) -> SortValue<'_>;
}

impl Sortable for MergedProjectRow {
    fn sort_value(&self, field: SortField) -> SortValue<'_> {
        match field {
            SortField::Department => SortValue::Key(DictionaryKind::Departments, &self.department_key),
            SortField::Type => SortValue::Key(DictionaryKind::Types, &self.type_key),
            SortField::Level => SortValue::Key(DictionaryKind::Levels, &self.level_key),
            SortField::Attribute => SortValue::Key(DictionaryKind::Attributes, &self.attribute_key),
            SortField::Platform => SortValue::Key(DictionaryKind::Platforms, &self.platform_key),
            SortField::ProjectName => SortValue::Text(&self.project_name),
            SortField::Hours => SortValue::Number(self.total_hours),
            SortField::Participants => SortValue::Number(self.participants.len() as f64),
        }
    }
}

impl Sortable for DepartmentLine {
    fn sort_value(&self, field: SortField) -> SortValue<'_> {
        match field {
            SortField::Department => SortValue::Key(DictionaryKind::Departments, &self.department_key),
            SortField::Type => SortValue::Key(DictionaryKind::Types, &self.type_key),
            SortField::ProjectName => SortValue::Text(&self.project_name),
            SortField::Hours => SortValue::Number(self.hours),
            SortField::Participants => SortValue::Number(self.people.len() as f64),
            SortField::Level | SortField::Attribute | SortField::Platform => SortValue::Absent,
        }
    }
}

pub fn parse_locale(raw: &str) -> Result<Locale, SortError> {
    raw.trim()
        .parse::<Locale>()
        .map_err(|error| SortError::InvalidLocale {
            locale: raw.to_string(),
            reason: error.to_string(),
        })
}

pub struct Sorter<'d> {
    dictionaries: &'d Dictionaries,
    collator: Collator,
}

impl<'d> Sorter<'d> {
    pub fn new(dictionaries: &'d Dictionaries, locale: &str) -> Result<Self, SortError> {
        let parsed = parse_locale(locale)?;
        let collator = Collator::try_new(&parsed.into(), CollatorOptions::new()).map_err(|error| {
            SortError::Collator {
                locale: locale.to_string(),
                reason: error.to_string(),
            }
        })?;
        Ok(Self {
            dictionaries,
            collator,
        })
    }

    pub fn compare_values(&self, left: SortValue<'_>, right: SortValue<'_>) -> Ordering {
        match (left, right) {
            (SortValue::Key(kind, left), SortValue::Key(_, right)) => self.collator.compare(
                self.dictionaries.translate(kind, left),
                self.dictionaries.translate(kind, right),
            ),
            (SortValue::Text(left), SortValue::Text(right)) => self.collator.compare(left, right),
            (SortValue::Number(left), SortValue::Number(right)) => left.total_cmp(&right),
            _ => Ordering::Equal,
        }
    }

    pub fn sort<T: Sortable>(&self, rows: &mut [T], field: SortField, direction: SortDirection) {
        rows.sort_by(|left, right| {
            let ordering = self.compare_values(left.sort_value(field), right.sort_value(field));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Sorts only when the state names a field.
    pub fn apply<T: Sortable>(&self, rows: &mut [T], state: SortState) {
        if let Some(field) = state.field {
            self.sort(rows, field, state.direction);
        }
    }
}
