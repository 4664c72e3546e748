//! Data models for a YML catalog.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of the catalog `date` attribute (minute precision, no timezone).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Root of a YML document: one shop and the generation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub shop: Shop,
    pub(crate) date: NaiveDateTime,
}

impl Catalog {
    /// Create a catalog for a shop, stamped with the current local time.
    pub fn new(name: impl Into<String>, company: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            shop: Shop::new(name, company, url),
            date: Local::now().naive_local(),
        }
    }

    /// Overwrite the generation timestamp.
    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.date = date;
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// The timestamp as written to the `date` attribute.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn offers(&self) -> &[Offer] {
        &self.shop.offers
    }
}

/// Shop metadata plus its currencies, categories, delivery terms and offers.
///
/// Collections only grow through the builder methods on [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shop {
    pub name: String,
    pub company: String,
    pub url: String,
    pub platform: String,
    pub version: String,
    pub agency: String,
    pub email: String,
    pub cpa: i32,
    pub(crate) currencies: Vec<Currency>,
    pub(crate) categories: Vec<Category>,
    pub(crate) delivery_options: Option<DeliveryOptions>,
    pub(crate) offers: Vec<Offer>,
}

impl Shop {
    pub fn new(name: impl Into<String>, company: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Shop-wide delivery terms, if any were added.
    pub fn delivery_options(&self) -> Option<&DeliveryOptions> {
        self.delivery_options.as_ref()
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }
}

/// A currency and its exchange rate.
///
/// `rate` is either a number or a reference such as `CBRF` or another
/// currency id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub rate: String,
    #[serde(default)]
    pub plus: f64,
}

/// A node of the category forest. `parent_id == 0` marks a root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub parent_id: i64,
    pub name: String,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }
}

/// An ordered block of delivery options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOptions {
    pub(crate) options: Vec<DeliveryOption>,
}

impl DeliveryOptions {
    pub fn options(&self) -> &[DeliveryOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }
}

/// A single delivery term. `days` is already in the schema encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOption {
    pub cost: i64,
    pub days: String,
    /// Order cutoff hour; 0 means unset.
    #[serde(default)]
    pub order_before: i32,
}

/// Offer classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferType {
    #[default]
    #[serde(rename = "generic")]
    Generic,
    #[serde(rename = "vendor.model")]
    VendorModel,
}

impl OfferType {
    /// Value of the offer `type` attribute; generic offers carry none.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            OfferType::Generic => None,
            OfferType::VendorModel => Some("vendor.model"),
        }
    }
}

/// Age restriction of an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub unit: String,
    pub value: String,
}

/// A free-form technical attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub value: String,
}

/// One sellable product entry.
///
/// `available = true` means delivery within two days; `false` means three
/// days up to two months.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offer {
    pub id: String,
    pub bid: u32,
    pub cbid: u32,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub available: bool,
    pub url: String,
    pub price: f64,
    pub old_price: f64,
    pub currency_id: String,
    pub category_id: i64,
    pub market_category: String,
    pub pictures: Vec<String>,
    pub store: bool,
    pub pickup: bool,
    pub delivery: bool,
    #[serde(skip)]
    pub delivery_options: Option<DeliveryOptions>,
    pub name: String,
    pub type_prefix: String,
    pub vendor: String,
    pub vendor_code: String,
    pub model: String,
    pub description: String,
    pub sales_notes: String,
    pub manufacturer_warranty: bool,
    pub country_of_origin: String,
    pub downloadable: bool,
    pub adult: bool,
    pub age: Option<Age>,
    pub barcodes: Vec<String>,
    pub cpa: i32,
    pub rec: String,
    pub expiry: String,
    pub weight: f64,
    pub dimensions: String,
    pub params: Vec<Param>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new("BestShop", "Best online seller Inc.", "http://best.seller.ru/");
        assert_eq!(catalog.shop.name, "BestShop");
        assert_eq!(catalog.shop.company, "Best online seller Inc.");
        assert!(catalog.offers().is_empty());
        assert!(catalog.shop.delivery_options().is_none());
    }

    #[test]
    fn test_date_string_has_minute_precision() {
        let mut catalog = Catalog::new("a", "b", "c");
        let date = NaiveDate::from_ymd_opt(2013, 2, 3)
            .unwrap()
            .and_hms_opt(14, 5, 59)
            .unwrap();
        catalog.set_date(date);
        assert_eq!(catalog.date_string(), "2013-02-03 14:05");
        assert_eq!(catalog.date(), date);
    }

    #[test]
    fn test_offer_type_attr() {
        assert_eq!(OfferType::default(), OfferType::Generic);
        assert_eq!(OfferType::Generic.as_attr(), None);
        assert_eq!(OfferType::VendorModel.as_attr(), Some("vendor.model"));
    }

    #[test]
    fn test_offer_type_serde_names() {
        let json = serde_json::to_string(&OfferType::VendorModel).unwrap();
        assert_eq!(json, "\"vendor.model\"");
        let parsed: OfferType = serde_json::from_str("\"generic\"").unwrap();
        assert_eq!(parsed, OfferType::Generic);
    }
}
