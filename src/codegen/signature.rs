use crate::codegen::suffix::SuffixMapping;
use crate::domain::model::{Argument, Function, Instantiation};

fn spell_type(ty: &str, argument: &Argument) -> String {
    let mut spelled = ty.to_string();
    if argument.is_const {
        spelled.push_str(" const");
    }
    if argument.is_pointer {
        spelled.push('*');
    }
    spelled
}

/// `template <typename S, typename T>`
pub fn template_prefix(function: &Function) -> String {
    let params = function
        .templates
        .iter()
        .map(|t| format!("typename {}", t.name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("template <{}>", params)
}

/// Generic C++ declaration, e.g.
/// `template <typename S, typename T> T add(S const left, T const right)`.
pub fn cpp_signature(function: &Function) -> String {
    let params = function
        .parameters
        .iter()
        .map(|p| format!("{} {}", spell_type(&p.ty, p), p.name()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {} {}({})",
        template_prefix(function),
        spell_type(&function.return_type.ty, &function.return_type),
        function.name,
        params
    )
}

/// Flat C declaration for one instantiation, e.g.
/// `float add_ui32_f32(uint32_t const left, float const right)`.
pub fn c_signature(
    function: &Function,
    instantiation: &Instantiation,
    mapping: &SuffixMapping,
) -> String {
    let params = if function.parameters.is_empty() {
        "void".to_string()
    } else {
        function
            .parameters
            .iter()
            .map(|p| format!("{} {}", spell_type(instantiation.resolve(&p.ty), p), p.name()))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let return_type = &function.return_type;
    format!(
        "{} {}({})",
        spell_type(instantiation.resolve(&return_type.ty), return_type),
        mapping.c_function_name(function, instantiation),
        params
    )
}

/// Argument list forwarded from a wrapper body: `left, right`.
pub fn forwarded_arguments(function: &Function) -> String {
    function
        .parameters
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}
