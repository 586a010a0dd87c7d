use serde::{Deserialize, Serialize};

/// A template parameter and the concrete types it is instantiated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub types: Vec<String>,
}

/// How the per-template type lists are combined into instantiations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combination {
    /// Cartesian product of every type list.
    #[default]
    All,
    /// Position-wise pairing; all type lists must have the same length.
    Fixed,
}

/// A return value or parameter of a wrapped function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(rename = "const", default)]
    pub is_const: bool,
    #[serde(rename = "pointer", default)]
    pub is_pointer: bool,
}

impl Argument {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub templates: Vec<Template>,
    #[serde(default)]
    pub combination: Combination,
    #[serde(rename = "return")]
    pub return_type: Argument,
    #[serde(default)]
    pub parameters: Vec<Argument>,
}

impl Function {
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }
}

/// One concrete binding of every template parameter, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instantiation {
    bindings: Vec<(String, String)>,
}

impl Instantiation {
    pub fn new(bindings: Vec<(String, String)>) -> Self {
        Self { bindings }
    }

    pub fn resolve<'a>(&'a self, ty: &'a str) -> &'a str {
        self.bindings
            .iter()
            .find(|(name, _)| name == ty)
            .map(|(_, concrete)| concrete.as_str())
            .unwrap_or(ty)
    }

    pub fn bindings(&self) -> &[(String, String)] {
        &self.bindings
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(_, concrete)| concrete.as_str())
    }
}

/// The two rendered outputs of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    pub header: String,
    pub implementation: String,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub header_path: Option<String>,
    pub implementation_path: Option<String>,
    pub symbols: Vec<String>,
}
