//! Validate command - Check every offer of a catalog definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use yml_catalog::{CatalogReader, CatalogValidator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Catalog definition file (.yaml, .yml, .json or .toml)
    #[arg(short, long)]
    input: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating catalog definition: {:?}", args.input);

    let catalog = CatalogReader::read_catalog(&args.input)
        .with_context(|| format!("Failed to load catalog definition {:?}", args.input))?;

    let result = CatalogValidator::validate_catalog(&catalog);

    for warning in &result.warnings {
        println!("⚠️  {}", warning);
    }

    if !result.valid {
        println!("❌ {} of {} offers failed validation:", result.errors.len(), catalog.offers().len());
        for error in &result.errors {
            println!("   - {}", error);
        }
        anyhow::bail!("Catalog validation failed");
    }

    println!("✅ All {} offers passed validation", catalog.offers().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_reports_failure() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("catalog.json");
        fs::write(
            &input,
            r#"{"shop": {"name": "a", "company": "b", "url": "c",
                "offers": [{"id": "1", "price": 10, "currency_id": "RUBL"}]}}"#,
        )
        .unwrap();

        let err = execute(ValidateArgs { input }).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_validate_passes() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("catalog.toml");
        fs::write(
            &input,
            r#"
[shop]
name = "a"
company = "b"
url = "c"

[[shop.currencies]]
id = "RUR"
rate = "1"

[[shop.offers]]
id = "1"
price = 10.5
currency_id = "RUR"
"#,
        )
        .unwrap();

        execute(ValidateArgs { input }).unwrap();
    }
}
