//! Build command - Write the XML feed for a catalog definition.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use yml_catalog::{export_to_file, export_to_writer, CatalogError, CatalogReader};

#[derive(Args)]
pub struct BuildArgs {
    /// Catalog definition file (.yaml, .yml, .json or .toml)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long, env = "YML_OUTPUT")]
    output: Option<PathBuf>,

    /// Indent the XML with tabs
    #[arg(long, env = "YML_PRETTY")]
    pretty: bool,

    /// Fail on the first invalid offer instead of skipping it
    #[arg(long)]
    strict: bool,
}

pub fn execute(args: BuildArgs) -> Result<()> {
    info!("Building feed from {:?}", args.input);

    let mut definition = CatalogReader::read_definition(&args.input)
        .with_context(|| format!("Failed to load catalog definition {:?}", args.input))?;

    let mut skipped = 0usize;
    for candidate in std::mem::take(&mut definition.shop.offers) {
        match candidate.offer.validate() {
            Ok(()) => definition.shop.offers.push(candidate),
            Err(violation) if args.strict => {
                return Err(CatalogError::InvalidOffer {
                    id: candidate.offer.id,
                    violation,
                }
                .into());
            }
            Err(violation) => {
                warn!("Skipping offer '{}': {}", candidate.offer.id, violation);
                skipped += 1;
            }
        }
    }

    let catalog = definition.into_catalog()?;

    match &args.output {
        Some(path) => {
            export_to_file(&catalog, path, args.pretty)
                .with_context(|| format!("Failed to write feed to {:?}", path))?;
            info!("Feed written to {:?}", path);
        }
        None => export_to_writer(&catalog, io::stdout().lock(), args.pretty)?,
    }

    info!(
        "Exported {} offers ({} skipped)",
        catalog.offers().len(),
        skipped
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DEFINITION: &str = r#"
shop:
  name: BestShop
  company: Best online seller Inc.
  url: http://best.seller.ru/
  currencies:
    - { id: RUR, rate: "1" }
  offers:
    - { id: good, price: 100, currency_id: RUR, category_id: 1 }
    - { id: bad, price: 0, currency_id: RUR, category_id: 1 }
"#;

    fn args(input: PathBuf, output: PathBuf, strict: bool) -> BuildArgs {
        BuildArgs {
            input,
            output: Some(output),
            pretty: false,
            strict,
        }
    }

    #[test]
    fn test_build_skips_invalid_offers() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("catalog.yaml");
        let output = temp.path().join("feed.xml");
        fs::write(&input, DEFINITION).unwrap();

        execute(args(input, output.clone(), false)).unwrap();

        let feed = fs::read_to_string(&output).unwrap();
        assert!(feed.contains(r#"<offer id="good""#));
        assert!(!feed.contains(r#"<offer id="bad""#));
    }

    #[test]
    fn test_build_strict_fails_on_invalid_offer() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("catalog.yaml");
        let output = temp.path().join("feed.xml");
        fs::write(&input, DEFINITION).unwrap();

        let err = execute(args(input, output.clone(), true)).unwrap_err();
        assert!(format!("{:#}", err).contains("Offer bad is invalid: price is zero"));
        assert!(!output.exists());
    }
}
