use crate::codegen::combinations::template_combinations;
use crate::codegen::signature::{c_signature, cpp_signature, forwarded_arguments};
use crate::codegen::suffix::SuffixMapping;
use crate::codegen::{include_lines, INDENT};
use crate::config::WrapperConfig;
use crate::utils::error::Result;

pub fn export_macro(linkage_macro: &str) -> String {
    format!("{}_EXPORT", linkage_macro)
}

fn linkage_macros(linkage_macro: &str) -> Vec<String> {
    let export = export_macro(linkage_macro);
    vec![
        "#ifdef _WIN32".to_string(),
        format!("#define {} extern \"C\" __declspec(dllexport)", export),
        "#else".to_string(),
        format!(
            "#define {} extern \"C\" __attribute__((visibility(\"default\")))",
            export
        ),
        "#endif".to_string(),
    ]
}

fn c_definitions(config: &WrapperConfig, mapping: &SuffixMapping) -> Result<Vec<String>> {
    let export = export_macro(config.linkage_macro());
    let mut lines = Vec::new();

    for function in &config.functions {
        let arguments = forwarded_arguments(function);
        for instantiation in template_combinations(&function.templates, function.combination)? {
            let template_args = instantiation.types().collect::<Vec<_>>().join(", ");
            lines.push(format!(
                "{} {} {{",
                export,
                c_signature(function, &instantiation, mapping)
            ));
            lines.push(format!(
                "{}return {}<{}>({});",
                INDENT, function.name, template_args, arguments
            ));
            lines.push("}".to_string());
            lines.push(String::new());
        }
    }
    Ok(lines)
}

/// Renders the file the C++ library includes before defining its templates.
/// Each exported C function calls the template with explicit arguments so
/// instantiation never depends on deduction.
pub fn implementation(config: &WrapperConfig) -> Result<String> {
    let mapping = SuffixMapping::with_overrides(&config.suffix_mapping);

    let mut lines = vec!["#pragma once".to_string(), String::new()];

    let includes = include_lines(config);
    if !includes.is_empty() {
        lines.extend(includes);
        lines.push(String::new());
    }

    lines.extend(linkage_macros(config.linkage_macro()));
    lines.push(String::new());
    lines.extend(
        config
            .functions
            .iter()
            .map(|f| format!("{};", cpp_signature(f))),
    );
    lines.push(String::new());
    lines.extend(c_definitions(config, &mapping)?);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let mut implementation = lines.join("\n");
    implementation.push('\n');
    Ok(implementation)
}
