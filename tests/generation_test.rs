use anyhow::Result;
use scrapper::core::ConfigProvider;
use scrapper::utils::error::ErrorCategory;
use scrapper::{GeneratorEngine, LocalStorage, WrapperPipeline};
use std::path::Path;
use tempfile::TempDir;

struct Paths {
    input: String,
    header: String,
    implementation: String,
}

impl Paths {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            header: "out/exported-interface.h".to_string(),
            implementation: "out/internal-impl.hpp".to_string(),
        }
    }
}

impl ConfigProvider for Paths {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn header_path(&self) -> &str {
        &self.header
    }

    fn implementation_path(&self) -> &str {
        &self.implementation
    }
}

fn demo_config() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("add.json")
        .to_string_lossy()
        .into_owned()
}

fn storage(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_string_lossy().into_owned())
}

#[tokio::test]
async fn test_demo_config_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = WrapperPipeline::new(storage(&temp_dir), Paths::new(&demo_config()));
    let report = GeneratorEngine::new(pipeline).run().await?;

    assert_eq!(
        report.symbols,
        vec!["add_ui32_f32", "add_ui32_f64", "add_i8_f32", "add_i8_f64"]
    );
    assert_eq!(
        report.header_path.as_deref(),
        Some("out/exported-interface.h")
    );

    let header = std::fs::read_to_string(temp_dir.path().join("out/exported-interface.h"))?;
    assert!(header.contains(
        "SCRAPPER_IMPORT float add_ui32_f32(uint32_t const left, float const right);"
    ));
    assert!(header.contains("#include <type_traits>"));
    assert!(header.contains("return add_i8_f64(left, right);"));

    let implementation = std::fs::read_to_string(temp_dir.path().join("out/internal-impl.hpp"))?;
    assert!(implementation.contains(
        "SCRAPPER_EXPORT float add_ui32_f32(uint32_t const left, float const right) {"
    ));
    assert!(implementation.contains("return add<int8_t, float>(left, right);"));

    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline =
        WrapperPipeline::new(storage(&temp_dir), Paths::new(&demo_config())).with_dry_run(true);
    let report = GeneratorEngine::new(pipeline).run().await?;

    assert_eq!(report.symbols.len(), 4);
    assert!(report.header_path.is_none());
    assert!(report.implementation_path.is_none());
    assert!(!temp_dir.path().join("out").exists());

    Ok(())
}

#[tokio::test]
async fn test_toml_config_with_fixed_combination() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("scale.toml"),
        r#"
linkage-macro = "SCALE"
includes = ["<stdint.h>"]

[suffix-mapping]
half = "h"

[[functions]]
name = "scale"
combination = "fixed"
templates = [
    { name = "V", types = ["half", "float"] },
    { name = "F", types = ["float", "double"] },
]
return = { type = "V" }
parameters = [
    { name = "values", type = "V", pointer = true },
    { name = "factor", type = "F", const = true },
]
"#,
    )?;

    let pipeline = WrapperPipeline::new(storage(&temp_dir), Paths::new("scale.toml"));
    let report = GeneratorEngine::new(pipeline).run().await?;

    assert_eq!(report.symbols, vec!["scale_h_f32", "scale_f32_f64"]);

    let header = std::fs::read_to_string(temp_dir.path().join("out/exported-interface.h"))?;
    assert!(header.contains("SCALE_IMPORT half scale_h_f32(half* values, float const factor);"));

    Ok(())
}

#[tokio::test]
async fn test_invalid_config_is_reported_as_configuration_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("bad.json"),
        r#"{"linkage-macro": "BAD MACRO", "functions": []}"#,
    )?;

    let pipeline = WrapperPipeline::new(storage(&temp_dir), Paths::new("bad.json"));
    let err = GeneratorEngine::new(pipeline)
        .run()
        .await
        .expect_err("config should be rejected");

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("out").exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_input_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = WrapperPipeline::new(storage(&temp_dir), Paths::new("missing.json"));
    let err = GeneratorEngine::new(pipeline)
        .run()
        .await
        .expect_err("missing input should fail");

    assert_eq!(err.category(), ErrorCategory::Io);
    assert_eq!(err.exit_code(), 3);

    Ok(())
}
