//! Rendering of the export header and the implementation file.

pub mod combinations;
pub mod header;
pub mod implementation;
pub mod signature;
pub mod suffix;

use crate::config::WrapperConfig;
use crate::domain::model::GeneratedSources;
use crate::utils::error::{Result, ScrapperError};
use crate::utils::validation::is_c_identifier;
use std::collections::HashSet;

pub use combinations::template_combinations;
pub use header::export_header;
pub use implementation::implementation;
pub use suffix::SuffixMapping;

pub(crate) const INDENT: &str = "    ";

/// `<x>` and `"x"` are kept verbatim, bare names are quoted.
pub fn include_lines(config: &WrapperConfig) -> Vec<String> {
    config
        .includes
        .iter()
        .map(|include| {
            let include = include.trim();
            if include.starts_with('<') || include.starts_with('"') {
                format!("#include {}", include)
            } else {
                format!("#include \"{}\"", include)
            }
        })
        .collect()
}

/// Flat C names of every wrapper, in emission order.
///
/// Fails when a name is not a valid C identifier or two instantiations
/// collapse onto the same name.
pub fn exported_symbols(config: &WrapperConfig) -> Result<Vec<String>> {
    let mapping = SuffixMapping::with_overrides(&config.suffix_mapping);
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();

    for function in &config.functions {
        for instantiation in template_combinations(&function.templates, function.combination)? {
            let symbol = mapping.c_function_name(function, &instantiation);
            if !is_c_identifier(&symbol) {
                return Err(ScrapperError::GenerationError {
                    message: format!(
                        "wrapper name '{}' is not a valid C identifier; add a suffix-mapping entry for its types",
                        symbol
                    ),
                });
            }
            if !seen.insert(symbol.clone()) {
                return Err(ScrapperError::GenerationError {
                    message: format!("wrapper name '{}' is generated more than once", symbol),
                });
            }
            symbols.push(symbol);
        }
    }

    Ok(symbols)
}

pub fn render(config: &WrapperConfig) -> Result<GeneratedSources> {
    let symbols = exported_symbols(config)?;
    tracing::debug!("Rendering {} wrapper(s)", symbols.len());

    Ok(GeneratedSources {
        header: export_header(config)?,
        implementation: implementation(config)?,
        symbols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> WrapperConfig {
        WrapperConfig::from_json_str(json).unwrap()
    }

    const TWO_FUNCTIONS: &str = r#"{
        "linkage-macro": "LIB",
        "functions": [
            {
                "name": "add",
                "templates": [
                    {"name": "S", "types": ["uint32_t"]},
                    {"name": "T", "types": ["float", "double"]}
                ],
                "return": {"type": "T"},
                "parameters": [
                    {"name": "left", "type": "S"},
                    {"name": "right", "type": "T"}
                ]
            },
            {
                "name": "negate",
                "templates": [{"name": "T", "types": ["int32_t"]}],
                "return": {"type": "T"},
                "parameters": [{"name": "value", "type": "T"}]
            }
        ]
    }"#;

    #[test]
    fn test_exported_symbols_in_order() {
        let symbols = exported_symbols(&config(TWO_FUNCTIONS)).unwrap();
        assert_eq!(symbols, vec!["add_ui32_f32", "add_ui32_f64", "negate_i32"]);
    }

    #[test]
    fn test_colliding_suffixes_are_rejected() {
        let mut cfg = config(TWO_FUNCTIONS);
        cfg.suffix_mapping.insert("double".to_string(), "f32".to_string());

        let err = exported_symbols(&cfg).unwrap_err();
        assert!(err.to_string().contains("add_ui32_f32"));
    }

    #[test]
    fn test_include_lines() {
        let mut cfg = config(TWO_FUNCTIONS);
        cfg.includes = vec![
            "<stdint.h>".to_string(),
            "\"half.hpp\"".to_string(),
            "types.h".to_string(),
        ];
        assert_eq!(
            include_lines(&cfg),
            vec![
                "#include <stdint.h>",
                "#include \"half.hpp\"",
                "#include \"types.h\"",
            ]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let cfg = config(TWO_FUNCTIONS);
        let first = render(&cfg).unwrap();
        let second = render(&cfg).unwrap();
        assert_eq!(first, second);
        assert!(first.header.contains("LIB_IMPORT int32_t negate_i32(int32_t value);"));
        assert!(first
            .implementation
            .contains("return negate<int32_t>(value);"));
    }
}
