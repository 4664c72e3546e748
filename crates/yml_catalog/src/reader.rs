//! Catalog definition files.
//!
//! A definition describes a catalog declaratively in YAML, JSON or TOML.
//! Reading one replays it through the builder, so the result is the same as
//! building the catalog by hand. Offers are not validated here.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Catalog, Category, Currency, Offer, DATE_FORMAT};

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Yaml,
    Json,
    Toml,
}

impl DefinitionFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Root of a definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Generation timestamp as `YYYY-MM-DD HH:MM`; defaults to now.
    #[serde(default)]
    pub date: Option<String>,
    pub shop: ShopDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopDefinition {
    pub name: String,
    pub company: String,
    pub url: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub agency: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cpa: i32,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub delivery_options: Vec<DeliveryTerms>,
    #[serde(default)]
    pub offers: Vec<OfferDefinition>,
}

/// Raw delivery terms, encoded into a day range when replayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryTerms {
    pub cost: i64,
    pub days_from: i64,
    pub days_to: i64,
    pub order_before: i32,
}

/// An offer plus its own delivery terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferDefinition {
    #[serde(flatten)]
    pub offer: Offer,
    #[serde(default)]
    pub delivery_options: Vec<DeliveryTerms>,
}

impl CatalogDefinition {
    /// Replay the definition through the builder.
    pub fn into_catalog(self) -> CatalogResult<Catalog> {
        let shop = self.shop;
        let mut catalog = Catalog::new(shop.name, shop.company, shop.url);

        if let Some(date) = self.date {
            let parsed = NaiveDateTime::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
                CatalogError::InvalidDefinition(format!("date {date:?} is not YYYY-MM-DD HH:MM: {e}"))
            })?;
            catalog.set_date(parsed);
        }

        catalog.shop.platform = shop.platform;
        catalog.shop.version = shop.version;
        catalog.shop.agency = shop.agency;
        catalog.shop.email = shop.email;
        catalog.shop.cpa = shop.cpa;

        for currency in shop.currencies {
            catalog.add_currency(currency.id, currency.rate, currency.plus);
        }

        for category in shop.categories {
            catalog.add_category(category.id, category.parent_id, category.name);
        }

        for terms in &shop.delivery_options {
            catalog.add_delivery_option(terms.cost, terms.days_from, terms.days_to, terms.order_before);
        }

        for definition in shop.offers {
            let mut offer = definition.offer;
            for terms in &definition.delivery_options {
                offer.add_delivery_option(terms.cost, terms.days_from, terms.days_to, terms.order_before);
            }
            catalog.add_offer(offer);
        }

        Ok(catalog)
    }
}

/// Reader for catalog definition files.
pub struct CatalogReader;

impl CatalogReader {
    /// Parse a definition from a string in the given format.
    pub fn parse_definition(content: &str, format: DefinitionFormat) -> CatalogResult<CatalogDefinition> {
        let definition = match format {
            DefinitionFormat::Yaml => serde_yaml::from_str(content)?,
            DefinitionFormat::Json => serde_json::from_str(content)?,
            DefinitionFormat::Toml => toml::from_str(content)?,
        };
        Ok(definition)
    }

    /// Read a definition file, picking the format from its extension.
    pub fn read_definition(path: impl AsRef<Path>) -> CatalogResult<CatalogDefinition> {
        let path = path.as_ref();
        let format = DefinitionFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
        debug!("Reading {:?} catalog definition from {:?}", format, path);

        let content = fs::read_to_string(path)?;
        Self::parse_definition(&content, format)
    }

    /// Read a definition file and build the catalog it describes.
    pub fn read_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let catalog = Self::read_definition(path)?.into_catalog()?;
        debug!(
            "Loaded catalog for shop '{}' with {} offers",
            catalog.shop.name,
            catalog.offers().len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferType;

    const YAML: &str = r#"
date: "2013-02-03 00:00"
shop:
  name: BestShop
  company: Best online seller Inc.
  url: http://best.seller.ru/
  currencies:
    - { id: RUR, rate: "1" }
  categories:
    - { id: 1, name: Книги }
    - { id: 2, parent_id: 1, name: Детективы }
  delivery_options:
    - { cost: 0, days_from: 0, days_to: 0, order_before: 10 }
  offers:
    - id: "12341"
      type: vendor.model
      available: true
      price: 16800
      currency_id: USD
      category_id: 6
      vendor: HP
      model: Deskjet D2663
      barcodes: ["1234567890120"]
      params:
        - { name: Вес, unit: кг, value: "2.73" }
      delivery_options:
        - { cost: 300, days_from: 1, days_to: 3 }
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DefinitionFormat::from_path(Path::new("a.yml")), Some(DefinitionFormat::Yaml));
        assert_eq!(DefinitionFormat::from_path(Path::new("a.YAML")), Some(DefinitionFormat::Yaml));
        assert_eq!(DefinitionFormat::from_path(Path::new("a.json")), Some(DefinitionFormat::Json));
        assert_eq!(DefinitionFormat::from_path(Path::new("a.toml")), Some(DefinitionFormat::Toml));
        assert_eq!(DefinitionFormat::from_path(Path::new("a.xml")), None);
        assert_eq!(DefinitionFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_yaml_definition_replays_through_builder() {
        let catalog = CatalogReader::parse_definition(YAML, DefinitionFormat::Yaml)
            .unwrap()
            .into_catalog()
            .unwrap();

        assert_eq!(catalog.date_string(), "2013-02-03 00:00");
        assert_eq!(catalog.shop.currencies()[0].plus, 0.0);
        assert_eq!(catalog.shop.categories()[1].parent_id, 1);
        assert_eq!(catalog.shop.delivery_options().unwrap().options()[0].days, "0");

        let offer = &catalog.offers()[0];
        assert_eq!(offer.offer_type, OfferType::VendorModel);
        assert_eq!(offer.price, 16800.0);
        assert_eq!(offer.params[0].unit, "кг");
        let options = offer.delivery_options.as_ref().unwrap();
        assert_eq!(options.options()[0].days, "1-3");
        assert!(offer.validate().is_ok());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let yaml = "date: yesterday\nshop: { name: a, company: b, url: c }\n";
        let result = CatalogReader::parse_definition(yaml, DefinitionFormat::Yaml)
            .unwrap()
            .into_catalog();
        assert!(matches!(result, Err(CatalogError::InvalidDefinition(_))));
    }

    #[test]
    fn test_missing_shop_name_fails_to_parse() {
        let result = CatalogReader::parse_definition(r#"{"shop": {"company": "b", "url": "c"}}"#, DefinitionFormat::Json);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
