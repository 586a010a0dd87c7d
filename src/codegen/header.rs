use crate::codegen::combinations::template_combinations;
use crate::codegen::signature::{c_signature, cpp_signature, forwarded_arguments};
use crate::codegen::suffix::SuffixMapping;
use crate::codegen::{include_lines, INDENT};
use crate::config::WrapperConfig;
use crate::domain::model::Function;
use crate::utils::error::Result;

pub fn import_macro(linkage_macro: &str) -> String {
    format!("{}_IMPORT", linkage_macro)
}

fn extern_c_macro(linkage_macro: &str) -> String {
    format!("{}_EXTERN_C", linkage_macro)
}

pub fn include_guard(linkage_macro: &str) -> String {
    format!("{}_EXPORTED_INTERFACE_H", linkage_macro)
}

fn linkage_macros(linkage_macro: &str) -> Vec<String> {
    let extern_c = extern_c_macro(linkage_macro);
    let import = import_macro(linkage_macro);
    vec![
        "#ifdef __cplusplus".to_string(),
        format!("#define {} extern \"C\"", extern_c),
        "#else".to_string(),
        format!("#define {}", extern_c),
        "#endif".to_string(),
        String::new(),
        "#ifdef _WIN32".to_string(),
        format!("#define {} {} __declspec(dllimport)", import, extern_c),
        "#else".to_string(),
        format!("#define {} {}", import, extern_c),
        "#endif".to_string(),
    ]
}

fn cpp_declarations(config: &WrapperConfig) -> Vec<String> {
    let mut lines = vec!["#ifdef __cplusplus".to_string()];
    lines.extend(config.functions.iter().map(|f| format!("{};", cpp_signature(f))));
    lines.push("#endif".to_string());
    lines
}

fn c_declarations(config: &WrapperConfig, mapping: &SuffixMapping) -> Result<Vec<String>> {
    let import = import_macro(config.linkage_macro());
    let mut lines = Vec::new();
    for function in &config.functions {
        for instantiation in template_combinations(&function.templates, function.combination)? {
            lines.push(format!(
                "{} {};",
                import,
                c_signature(function, &instantiation, mapping)
            ));
        }
        lines.push(String::new());
    }
    Ok(lines)
}

/// Generic C++ overload that forwards each supported instantiation to its C
/// wrapper and fails to compile for anything else.
pub fn cpp_dispatch_definition(function: &Function, mapping: &SuffixMapping) -> Result<Vec<String>> {
    let mut lines = vec![format!("{} {{", cpp_signature(function))];
    let arguments = forwarded_arguments(function);

    for (idx, instantiation) in template_combinations(&function.templates, function.combination)?
        .iter()
        .enumerate()
    {
        let condition = instantiation
            .bindings()
            .iter()
            .map(|(name, concrete)| format!("std::is_same_v<{}, {}>", concrete, name))
            .collect::<Vec<_>>()
            .join(" && ");
        let keyword = if idx == 0 { "if" } else { "else if" };

        lines.push(format!("{}{} constexpr ({}) {{", INDENT, keyword, condition));
        lines.push(format!(
            "{}{}return {}({});",
            INDENT,
            INDENT,
            mapping.c_function_name(function, instantiation),
            arguments
        ));
        lines.push(format!("{}}}", INDENT));
    }

    let first_template = function
        .templates
        .first()
        .map(|t| t.name.as_str())
        .unwrap_or_default();
    lines.push(format!("{}else {{", INDENT));
    lines.push(format!(
        "{}{}static_assert(!sizeof({}*), \"Unsupported type for this function.\");",
        INDENT, INDENT, first_template
    ));
    lines.push(format!("{}}}", INDENT));
    lines.push("}".to_string());
    Ok(lines)
}

fn cpp_definitions(config: &WrapperConfig, mapping: &SuffixMapping) -> Result<Vec<String>> {
    let mut lines = vec![
        "// C++ wrapper impl.".to_string(),
        "#ifdef __cplusplus".to_string(),
        "#include <type_traits>".to_string(),
        String::new(),
    ];
    for function in &config.functions {
        lines.extend(cpp_dispatch_definition(function, mapping)?);
        lines.push(String::new());
    }
    lines.push("#endif".to_string());
    Ok(lines)
}

/// Renders the header consumed by C and C++ callers.
pub fn export_header(config: &WrapperConfig) -> Result<String> {
    let mapping = SuffixMapping::with_overrides(&config.suffix_mapping);
    let guard = include_guard(config.linkage_macro());

    let mut lines = vec![
        format!("#ifndef {}", guard),
        format!("#define {}", guard),
        String::new(),
    ];

    let includes = include_lines(config);
    if !includes.is_empty() {
        lines.extend(includes);
        lines.push(String::new());
    }

    lines.extend(linkage_macros(config.linkage_macro()));
    lines.push(String::new());
    lines.extend(cpp_declarations(config));
    lines.push(String::new());
    lines.extend(c_declarations(config, &mapping)?);
    lines.extend(cpp_definitions(config, &mapping)?);
    lines.push(String::new());
    lines.push(format!("#endif // {}", guard));

    let mut header = lines.join("\n");
    header.push('\n');
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WrapperConfig {
        WrapperConfig::from_json_str(
            r#"{
                "linkage-macro": "SCRAPPER",
                "includes": ["<stdint.h>"],
                "functions": [{
                    "name": "add",
                    "templates": [
                        {"name": "S", "types": ["uint32_t", "int8_t"]},
                        {"name": "T", "types": ["float", "double"]}
                    ],
                    "return": {"type": "T"},
                    "parameters": [
                        {"name": "left", "type": "S", "const": true},
                        {"name": "right", "type": "T", "const": true}
                    ]
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_header_declares_every_instantiation() {
        let header = export_header(&config()).unwrap();

        for decl in [
            "SCRAPPER_IMPORT float add_ui32_f32(uint32_t const left, float const right);",
            "SCRAPPER_IMPORT double add_ui32_f64(uint32_t const left, double const right);",
            "SCRAPPER_IMPORT float add_i8_f32(int8_t const left, float const right);",
            "SCRAPPER_IMPORT double add_i8_f64(int8_t const left, double const right);",
        ] {
            assert!(header.contains(decl), "missing `{}` in:\n{}", decl, header);
        }
    }

    #[test]
    fn test_header_linkage_macros() {
        let header = export_header(&config()).unwrap();

        assert!(header.starts_with("#ifndef SCRAPPER_EXPORTED_INTERFACE_H\n"));
        assert!(header.contains("#define SCRAPPER_EXTERN_C extern \"C\""));
        assert!(header.contains("#define SCRAPPER_IMPORT SCRAPPER_EXTERN_C __declspec(dllimport)"));
        assert!(header.contains("#include <stdint.h>\n"));
        assert!(header.ends_with("#endif // SCRAPPER_EXPORTED_INTERFACE_H\n"));
    }

    #[test]
    fn test_dispatch_definition() {
        let config = config();
        let lines =
            cpp_dispatch_definition(&config.functions[0], &SuffixMapping::default()).unwrap();

        assert_eq!(
            lines[0],
            "template <typename S, typename T> T add(S const left, T const right) {"
        );
        assert_eq!(
            lines[1],
            "    if constexpr (std::is_same_v<uint32_t, S> && std::is_same_v<float, T>) {"
        );
        assert_eq!(lines[2], "        return add_ui32_f32(left, right);");
        assert_eq!(
            lines[4],
            "    else if constexpr (std::is_same_v<uint32_t, S> && std::is_same_v<double, T>) {"
        );
        assert!(lines
            .iter()
            .any(|l| l.contains("static_assert(!sizeof(S*), \"Unsupported type for this function.\");")));
        assert_eq!(lines.last().map(String::as_str), Some("}"));
    }

    #[test]
    fn test_cpp_declaration_is_guarded() {
        let header = export_header(&config()).unwrap();
        assert!(header.contains(
            "#ifdef __cplusplus\ntemplate <typename S, typename T> T add(S const left, T const right);\n#endif"
        ));
    }
}
