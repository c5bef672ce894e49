//! Maps a field descriptor and its current value to a renderable control.

use std::collections::HashMap;

use crate::classifier_api::{FieldDescriptor, FieldOptions};

/// Display label of the leading option that represents "unset".
pub const UNSET_OPTION_LABEL: &str = "(choose)";

const ENGLISH_NAMES: [(&str, &str); 8] = [
    ("odor", "Odor"),
    ("spore-print-color", "Spore print color"),
    ("gill-size", "Gill size"),
    ("gill-color", "Gill color"),
    ("ring-type", "Ring type"),
    ("habitat", "Habitat"),
    ("bruises", "Bruises"),
    ("cap-color", "Cap color"),
];

/// Localized display names keyed by field identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    names: HashMap<String, String>,
}

impl LabelDictionary {
    /// Built-in English names for the supported fields.
    pub fn english() -> Self {
        Self::from_pairs(
            ENGLISH_NAMES
                .iter()
                .map(|(name, label)| (name.to_string(), label.to_string())),
        )
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            names: pairs.into_iter().collect(),
        }
    }

    /// Return a copy where `overrides` replace or extend the existing names.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        self.names.extend(overrides);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.names
            .get(name)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }
}

/// One selectable entry of a field control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub display_label: String,
}

/// Everything the renderer needs to draw one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldControl {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    /// Options with the "unset" entry first.
    pub options: Vec<ChoiceOption>,
    /// Text shown for the current value.
    pub selected_label: String,
    /// Position in `options` of the current value; `None` if no option carries it.
    pub selected_index: Option<usize>,
}

impl FieldControl {
    /// Report the option at `index` to `on_change` as `(field name, value)`.
    pub fn choose(&self, index: usize, on_change: impl FnOnce(&str, &str)) {
        if let Some(option) = self.options.get(index) {
            on_change(&self.name, &option.value);
        }
    }
}

/// Build the control description for `descriptor` holding `current_value`.
pub fn render_field(
    descriptor: &FieldDescriptor,
    current_value: &str,
    labels: &LabelDictionary,
) -> FieldControl {
    let label = labels
        .lookup(&descriptor.name)
        .or_else(|| non_empty(descriptor.display_name.as_deref()))
        .unwrap_or(&descriptor.name)
        .to_string();

    let mut options = Vec::with_capacity(descriptor.options.len() + 1);
    options.push(ChoiceOption {
        value: String::new(),
        display_label: UNSET_OPTION_LABEL.to_string(),
    });
    match &descriptor.options {
        FieldOptions::Plain(values) => options.extend(values.iter().map(|value| ChoiceOption {
            value: value.clone(),
            display_label: value.clone(),
        })),
        FieldOptions::Described(described) => {
            options.extend(described.iter().map(|option| ChoiceOption {
                value: option.value.clone(),
                display_label: non_empty(option.label.as_deref())
                    .or_else(|| non_empty(option.description.as_deref()))
                    .unwrap_or(&option.value)
                    .to_string(),
            }))
        }
    }

    let selected_index = options
        .iter()
        .position(|option| option.value == current_value);
    let selected_label = selected_index
        .map(|index| options[index].display_label.clone())
        .unwrap_or_else(|| current_value.to_string());

    FieldControl {
        name: descriptor.name.clone(),
        label,
        description: descriptor
            .description
            .clone()
            .filter(|text| !text.trim().is_empty()),
        options,
        selected_label,
        selected_index,
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
