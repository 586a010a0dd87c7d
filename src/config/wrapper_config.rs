use crate::codegen;
use crate::domain::model::Function;
use crate::utils::error::{Result, ScrapperError};
use crate::utils::validation::{
    validate_identifier, validate_non_empty, validate_non_empty_string, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Config file syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WrapperConfig {
    pub linkage_macro: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub suffix_mapping: BTreeMap<String, String>,
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl WrapperConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_str_with_format(&content, ConfigFormat::from_path(&path))
    }

    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => Self::from_json_str(content),
            ConfigFormat::Toml => Self::from_toml_str(content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Prefix of the generated `_EXTERN_C`, `_IMPORT` and `_EXPORT` macros.
    pub fn linkage_macro(&self) -> &str {
        self.linkage_macro.as_deref().unwrap_or_default()
    }

    pub fn validate_config(&self) -> Result<()> {
        let linkage_macro =
            self.linkage_macro
                .as_deref()
                .ok_or_else(|| ScrapperError::MissingConfigError {
                    field: "linkage-macro".to_string(),
                })?;
        validate_identifier("linkage-macro", linkage_macro)?;

        for (idx, include) in self.includes.iter().enumerate() {
            validate_non_empty_string(&format!("includes[{}]", idx), include)?;
        }

        for (ty, suffix) in &self.suffix_mapping {
            validate_non_empty_string("suffix-mapping", ty)?;
            if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ScrapperError::invalid_value(
                    format!("suffix-mapping.{}", ty),
                    suffix.as_str(),
                    "Suffix may only contain letters, digits and underscores",
                ));
            }
        }

        validate_non_empty("functions", &self.functions)?;
        for (idx, function) in self.functions.iter().enumerate() {
            validate_function(&format!("functions[{}]", idx), function)?;
        }

        // every instantiation needs its own C symbol
        codegen::exported_symbols(self)?;

        Ok(())
    }
}

fn validate_function(field: &str, function: &Function) -> Result<()> {
    validate_identifier(&format!("{}.name", field), &function.name)?;

    validate_non_empty(&format!("{}.templates", field), &function.templates)?;
    for (idx, template) in function.templates.iter().enumerate() {
        let template_field = format!("{}.templates[{}]", field, idx);
        validate_identifier(&format!("{}.name", template_field), &template.name)?;
        validate_non_empty(&format!("{}.types", template_field), &template.types)?;
        for ty in &template.types {
            validate_non_empty_string(&format!("{}.types", template_field), ty)?;
        }
    }
    validate_unique(&format!("{}.templates", field), function.template_names())?;

    validate_non_empty_string(&format!("{}.return.type", field), &function.return_type.ty)?;

    for (idx, parameter) in function.parameters.iter().enumerate() {
        let parameter_field = format!("{}.parameters[{}]", field, idx);
        validate_non_empty_string(&format!("{}.type", parameter_field), &parameter.ty)?;
        let name = parameter
            .name
            .as_deref()
            .ok_or_else(|| ScrapperError::MissingConfigError {
                field: format!("{}.name", parameter_field),
            })?;
        validate_identifier(&format!("{}.name", parameter_field), name)?;
        if function.template_names().any(|t| t == name) {
            return Err(ScrapperError::invalid_value(
                format!("{}.name", parameter_field),
                name,
                "Parameter name shadows a template parameter",
            ));
        }
    }
    validate_unique(
        &format!("{}.parameters", field),
        function.parameters.iter().map(|p| p.name()),
    )?;

    Ok(())
}

impl Validate for WrapperConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
