//! Wire types for the `/schema` and `/predict` endpoints.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Body sent to `/predict`: field identifier to selected option value.
pub type PredictPayload = BTreeMap<String, String>;

/// Schema payload returned by `GET /schema`.
///
/// Only `features` is read; other keys the service adds are ignored. A body
/// without `features` is not a schema.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Schema {
    pub features: Vec<FieldDescriptor>,
}

/// Server-declared metadata for one selectable input.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default, rename = "displayName", alias = "display_name")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: FieldOptions,
}

impl FieldDescriptor {
    /// Descriptor with plain string options and no display text.
    pub fn plain(name: impl Into<String>, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            description: None,
            options: FieldOptions::Plain(options.iter().map(|s| s.to_string()).collect()),
        }
    }
}

/// Option list of a field, normalized to a single shape when decoded.
///
/// A list containing at least one object entry is treated as `Described`;
/// bare strings inside such a list become options without label text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Vec<RawFieldOption>")]
pub enum FieldOptions {
    Plain(Vec<String>),
    Described(Vec<DescribedOption>),
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self::Plain(Vec::new())
    }
}

impl FieldOptions {
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(values) => values.len(),
            Self::Described(options) => options.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Object-shaped option carrying a code plus optional display text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DescribedOption {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldOption {
    Plain(String),
    Described(DescribedOption),
}

impl From<Vec<RawFieldOption>> for FieldOptions {
    fn from(raw: Vec<RawFieldOption>) -> Self {
        let any_described = raw
            .iter()
            .any(|option| matches!(option, RawFieldOption::Described(_)));
        if !any_described {
            return Self::Plain(
                raw.into_iter()
                    .filter_map(|option| match option {
                        RawFieldOption::Plain(value) => Some(value),
                        RawFieldOption::Described(_) => None,
                    })
                    .collect(),
            );
        }
        Self::Described(
            raw.into_iter()
                .map(|option| match option {
                    RawFieldOption::Plain(value) => DescribedOption {
                        value,
                        label: None,
                        description: None,
                    },
                    RawFieldOption::Described(option) => option,
                })
                .collect(),
        )
    }
}

/// Successful classification returned by `POST /predict`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    #[serde(rename = "class")]
    pub class_code: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}
