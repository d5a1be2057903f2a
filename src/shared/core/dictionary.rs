// Classification dictionaries and the label translator.
//
// Purpose
// - Map stable dictionary keys (for example "rd_center") to display labels.
// - Tolerate legacy records that stored the label where a key was expected.
//
// Boundaries
// - Pure lookups. Never mutates or caches the dictionaries it is given.

use serde::{Deserialize, Serialize};

/// Display text used when a classification value is blank.
pub const BLANK_LABEL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictItem {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConfig {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeConfig {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub sub_types: Vec<DictItem>,
}

/// Anything stored as a `{ key, label }` pair.
pub trait Labelled {
    fn key(&self) -> &str;
    fn label(&self) -> &str;
}

impl Labelled for DictItem {
    fn key(&self) -> &str {
        &self.key
    }
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labelled for TagConfig {
    fn key(&self) -> &str {
        &self.key
    }
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labelled for TypeConfig {
    fn key(&self) -> &str {
        &self.key
    }
    fn label(&self) -> &str {
        &self.label
    }
}

/// Key match first, then label match for legacy values.
pub fn find_label<'a, T: Labelled>(items: &'a [T], value: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.key() == value)
        .or_else(|| items.iter().find(|item| item.label() == value))
        .map(|item| item.label())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DictionaryKind {
    Departments,
    Types,
    Attributes,
    Platforms,
    Levels,
    Stages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionaries {
    pub departments: Vec<DictItem>,
    pub types: Vec<TypeConfig>,
    pub attributes: Vec<DictItem>,
    pub platforms: Vec<DictItem>,
    pub levels: Vec<TagConfig>,
    pub stages: Vec<TagConfig>,
}

impl Dictionaries {
    /// Resolves `value` to its display label.
    ///
    /// Blank values render as [`BLANK_LABEL`]. For [`DictionaryKind::Types`] the subtype lists of
    /// every type are searched when no top-level type matches. Unknown values are returned as is.
    pub fn translate<'a>(&'a self, kind: DictionaryKind, value: &'a str) -> &'a str {
        if value.is_empty() {
            return BLANK_LABEL;
        }
        let found = match kind {
            DictionaryKind::Departments => find_label(&self.departments, value),
            DictionaryKind::Attributes => find_label(&self.attributes, value),
            DictionaryKind::Platforms => find_label(&self.platforms, value),
            DictionaryKind::Levels => find_label(&self.levels, value),
            DictionaryKind::Stages => find_label(&self.stages, value),
            DictionaryKind::Types => find_label(&self.types, value).or_else(|| {
                self.types
                    .iter()
                    .find_map(|major| find_label(&major.sub_types, value))
            }),
        };
        found.unwrap_or(value)
    }

    /// Subtype label looked up under its own parent type only.
    pub fn translate_sub_type<'a>(&'a self, type_value: &str, sub_type: &'a str) -> &'a str {
        self.types
            .iter()
            .find(|major| major.key == type_value)
            .or_else(|| self.types.iter().find(|major| major.label == type_value))
            .and_then(|major| find_label(&major.sub_types, sub_type))
            .unwrap_or_else(|| self.translate(DictionaryKind::Types, sub_type))
    }
}

fn items(pairs: &[(&str, &str)]) -> Vec<DictItem> {
    pairs
        .iter()
        .map(|(key, label)| DictItem {
            key: key.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn tags(triples: &[(&str, &str, &str)]) -> Vec<TagConfig> {
    triples
        .iter()
        .map(|(key, label, color)| TagConfig {
            key: key.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

impl Default for Dictionaries {
    fn default() -> Self {
        let major = |key: &str, label: &str, sub_types: Vec<DictItem>| TypeConfig {
            key: key.to_string(),
            label: label.to_string(),
            sub_types,
        };
        Self {
            types: vec![
                major(
                    "ui_design",
                    "UI design",
                    items(&[
                        ("initial", "Initial design"),
                        ("iterative", "Iterative design"),
                        ("expansion", "Expansion design"),
                        ("adaptation", "Adaptation design"),
                    ]),
                ),
                major("graphic_design", "Graphic design", Vec::new()),
                major("unity_dev", "Unity development", Vec::new()),
                major("video_edit", "Video editing", Vec::new()),
                major("3d_modeling", "3D modeling", Vec::new()),
                major("interaction_design", "Interaction design", Vec::new()),
                major("internal_build", "Internal tooling", Vec::new()),
            ],
            departments: items(&[
                ("brand", "Brand"),
                ("operation", "Operations"),
                ("rd_center", "R&D center"),
                ("marketing", "Marketing"),
                ("ceo_office", "CEO office"),
            ]),
            platforms: items(&[
                ("web", "Web"),
                ("ios", "iOS"),
                ("android", "Android"),
                ("pc", "PC"),
                ("print", "Print"),
                ("social", "Social Media"),
            ]),
            levels: tags(&[
                ("S", "S", "#fee2e2"),
                ("A", "A", "#ffedd5"),
                ("B", "B", "#dbeafe"),
                ("C", "C", "#f3f4f6"),
            ]),
            attributes: items(&[
                ("strategic", "Strategic"),
                ("routine", "Routine"),
                ("incident", "Incident support"),
                ("research", "Research"),
            ]),
            stages: tags(&[
                ("not_started", "Not started", "#f3f4f6"),
                ("ongoing", "Ongoing", "#dcfce7"),
                ("testing", "Testing", "#e0e7ff"),
                ("accepted", "Accepted", "#d1fae5"),
                ("published", "Published", "#ccfbf1"),
                ("paused", "Paused", "#fee2e2"),
            ]),
        }
    }
}
