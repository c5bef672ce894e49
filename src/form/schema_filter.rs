//! Restricts a schema to the fixed set of supported fields.

use std::collections::HashSet;

use crate::classifier_api::FieldDescriptor;

/// Field identifiers the form supports, in canonical order.
pub const MUSHROOM_FIELDS: [&str; 8] = [
    "odor",
    "spore-print-color",
    "gill-size",
    "gill-color",
    "ring-type",
    "habitat",
    "bruises",
    "cap-color",
];

/// Fixed set of field identifiers the form is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowList {
    fields: &'static [&'static str],
}

impl AllowList {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains(&name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(&MUSHROOM_FIELDS)
    }
}

/// Keep the allowed descriptors of `features`, preserving schema order.
///
/// A repeated field name keeps only its first descriptor, so the result never
/// holds more entries than the allow-list. Descriptors with an empty name are
/// dropped even if the allow-list carries `""`.
pub fn filter_fields(features: &[FieldDescriptor], allow: &AllowList) -> Vec<FieldDescriptor> {
    let mut seen = HashSet::new();
    features
        .iter()
        .filter(|field| !field.name.is_empty() && allow.contains(&field.name))
        .filter(|field| seen.insert(field.name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|field| field.name.as_str()).collect()
    }

    #[test]
    fn keeps_allowed_fields_in_schema_order() {
        let schema = [
            FieldDescriptor::plain("habitat", &["g"]),
            FieldDescriptor::plain("cap-shape", &["x"]),
            FieldDescriptor::plain("odor", &["n"]),
            FieldDescriptor::plain("veil-type", &["p"]),
            FieldDescriptor::plain("bruises", &["t"]),
        ];
        let filtered = filter_fields(&schema, &AllowList::default());
        assert_eq!(names(&filtered), ["habitat", "odor", "bruises"]);
    }

    #[test]
    fn ten_field_schema_yields_eight() {
        let mut schema: Vec<FieldDescriptor> = MUSHROOM_FIELDS
            .iter()
            .rev()
            .map(|name| FieldDescriptor::plain(*name, &["a"]))
            .collect();
        schema.insert(3, FieldDescriptor::plain("stalk-root", &["b"]));
        schema.push(FieldDescriptor::plain("population", &["s"]));
        let filtered = filter_fields(&schema, &AllowList::default());
        assert_eq!(filtered.len(), 8);
        assert_eq!(filtered[0].name, "cap-color");
        assert_eq!(filtered[7].name, "odor");
    }

    #[test]
    fn no_matching_fields_is_empty() {
        let schema = [FieldDescriptor::plain("cap-shape", &["x"])];
        assert!(filter_fields(&schema, &AllowList::default()).is_empty());
        assert!(filter_fields(&[], &AllowList::default()).is_empty());
    }

    #[test]
    fn duplicate_names_keep_first_descriptor() {
        let allow = AllowList::default();
        let mut schema = Vec::new();
        for _ in 0..3 {
            for name in MUSHROOM_FIELDS {
                schema.push(FieldDescriptor::plain(name, &[name]));
            }
        }
        schema[0].description = Some("first".into());
        let filtered = filter_fields(&schema, &allow);
        assert_eq!(filtered.len(), allow.len());
        assert_eq!(filtered[0].description.as_deref(), Some("first"));
    }

    #[test]
    fn result_is_an_ordered_subsequence_of_the_schema() {
        let allow = AllowList::default();
        let pool = [
            "odor",
            "ring-number",
            "gill-size",
            "stalk-color",
            "cap-color",
            "habitat",
            "spore-print-color",
        ];
        for rotation in 0..pool.len() {
            let schema: Vec<FieldDescriptor> = pool
                .iter()
                .cycle()
                .skip(rotation)
                .take(pool.len())
                .map(|name| FieldDescriptor::plain(*name, &[]))
                .collect();
            let filtered = filter_fields(&schema, &allow);
            assert!(filtered.iter().all(|field| allow.contains(&field.name)));
            let mut cursor = schema.iter();
            for field in &filtered {
                assert!(cursor.any(|candidate| candidate.name == field.name));
            }
        }
    }

    #[test]
    fn custom_allow_list_restricts_differently() {
        static ONLY_ODOR: [&str; 1] = ["odor"];
        let allow = AllowList::new(&ONLY_ODOR);
        let schema = [
            FieldDescriptor::plain("habitat", &[]),
            FieldDescriptor::plain("odor", &[]),
        ];
        assert_eq!(names(&filter_fields(&schema, &allow)), ["odor"]);
    }

    #[test]
    fn empty_names_never_pass() {
        static WITH_BLANK: [&str; 2] = ["", "odor"];
        let schema = [
            FieldDescriptor::plain("", &["x"]),
            FieldDescriptor::plain("odor", &["n"]),
        ];
        let filtered = filter_fields(&schema, &AllowList::new(&WITH_BLANK));
        assert_eq!(names(&filtered), ["odor"]);
    }
}
