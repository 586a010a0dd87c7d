use crate::domain::model::{Function, Instantiation};
use std::collections::{BTreeMap, HashMap};

const DEFAULT_SUFFIXES: &[(&str, &str)] = &[
    ("int8_t", "i8"),
    ("int16_t", "i16"),
    ("int32_t", "i32"),
    ("int64_t", "i64"),
    ("uint8_t", "ui8"),
    ("uint16_t", "ui16"),
    ("uint32_t", "ui32"),
    ("uint64_t", "ui64"),
    ("half", "f16"),
    ("float", "f32"),
    ("double", "f64"),
];

/// Short names used to build flat C function names.
#[derive(Debug, Clone)]
pub struct SuffixMapping {
    suffixes: HashMap<String, String>,
}

impl Default for SuffixMapping {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES
                .iter()
                .map(|(ty, suffix)| (ty.to_string(), suffix.to_string()))
                .collect(),
        }
    }
}

impl SuffixMapping {
    /// Built-in table with user entries layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut mapping = Self::default();
        mapping.suffixes.extend(
            overrides
                .iter()
                .map(|(ty, suffix)| (ty.clone(), suffix.clone())),
        );
        mapping
    }

    /// Unmapped types keep their own spelling.
    pub fn suffix_for<'a>(&'a self, ty: &'a str) -> &'a str {
        self.suffixes.get(ty).map(String::as_str).unwrap_or(ty)
    }

    pub fn type_suffix<'a, I>(&self, types: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        types
            .into_iter()
            .map(|ty| self.suffix_for(ty))
            .collect::<Vec<_>>()
            .join("_")
    }

    /// `add` bound to `<uint32_t, float>` becomes `add_ui32_f32`.
    pub fn c_function_name(&self, function: &Function, instantiation: &Instantiation) -> String {
        format!(
            "{}_{}",
            function.name,
            self.type_suffix(instantiation.types())
        )
    }
}
