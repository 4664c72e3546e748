//! Offer validation against the feed schema rules.

use thiserror::Error;

use crate::models::{Catalog, Offer, OfferType};
use crate::reference::{allowed_age_values, is_known_country};

pub const MAX_ID_LEN: usize = 20;
pub const CURRENCY_ID_LEN: usize = 3;
pub const MAX_CATEGORY_ID: i64 = 999_999_999_999_999_999;
pub const MAX_PICTURE_URL_LEN: usize = 512;
pub const MAX_DESCRIPTION_LEN: usize = 175;
pub const MAX_SALES_NOTES_LEN: usize = 50;

/// The first schema rule an offer breaks.
///
/// Lengths are counted in Unicode code points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OfferViolation {
    #[error("id is {len} characters long, at most 20 allowed")]
    IdTooLong { len: usize },

    #[error("vendor.model offer requires both vendor and model")]
    MissingVendorOrModel,

    #[error("price is zero")]
    ZeroPrice,

    #[error("old price {old_price} must be greater than price {price}")]
    OldPriceNotAbovePrice { old_price: f64, price: f64 },

    #[error("currency id {0:?} must be exactly 3 characters")]
    InvalidCurrencyId(String),

    #[error("category id {0} exceeds 18 digits")]
    CategoryIdTooLarge(i64),

    #[error("picture #{index} URL is {len} characters long, at most 512 allowed")]
    PictureUrlTooLong { index: usize, len: usize },

    #[error("description is {len} characters long without commas and periods, at most 175 allowed")]
    DescriptionTooLong { len: usize },

    #[error("sales notes are {len} characters long, at most 50 allowed")]
    SalesNotesTooLong { len: usize },

    #[error("unknown country of origin: {0}")]
    UnknownCountry(String),

    #[error("age unit {0:?} is not one of year, month")]
    InvalidAgeUnit(String),

    #[error("age value {value:?} is not allowed for unit {unit}")]
    InvalidAgeValue { unit: String, value: String },
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Check an offer against every schema rule, stopping at the first failure.
pub fn validate_offer(offer: &Offer) -> Result<(), OfferViolation> {
    let id_len = char_len(&offer.id);
    if id_len > MAX_ID_LEN {
        return Err(OfferViolation::IdTooLong { len: id_len });
    }

    if offer.offer_type == OfferType::VendorModel && (offer.vendor.is_empty() || offer.model.is_empty()) {
        return Err(OfferViolation::MissingVendorOrModel);
    }

    if offer.price == 0.0 {
        return Err(OfferViolation::ZeroPrice);
    }

    if offer.old_price > 0.0 && offer.old_price <= offer.price {
        return Err(OfferViolation::OldPriceNotAbovePrice {
            old_price: offer.old_price,
            price: offer.price,
        });
    }

    if char_len(&offer.currency_id) != CURRENCY_ID_LEN {
        return Err(OfferViolation::InvalidCurrencyId(offer.currency_id.clone()));
    }

    if offer.category_id > MAX_CATEGORY_ID {
        return Err(OfferViolation::CategoryIdTooLarge(offer.category_id));
    }

    for (index, picture) in offer.pictures.iter().enumerate() {
        let len = char_len(picture);
        if len > MAX_PICTURE_URL_LEN {
            return Err(OfferViolation::PictureUrlTooLong { index, len });
        }
    }

    // Commas and periods are not counted.
    let description_len = offer
        .description
        .chars()
        .filter(|c| *c != ',' && *c != '.')
        .count();
    if description_len > MAX_DESCRIPTION_LEN {
        return Err(OfferViolation::DescriptionTooLong { len: description_len });
    }

    let notes_len = char_len(&offer.sales_notes);
    if notes_len > MAX_SALES_NOTES_LEN {
        return Err(OfferViolation::SalesNotesTooLong { len: notes_len });
    }

    if !offer.country_of_origin.is_empty() && !is_known_country(&offer.country_of_origin) {
        return Err(OfferViolation::UnknownCountry(offer.country_of_origin.clone()));
    }

    if let Some(age) = offer.age.as_ref().filter(|age| !age.unit.is_empty()) {
        let allowed = allowed_age_values(&age.unit)
            .ok_or_else(|| OfferViolation::InvalidAgeUnit(age.unit.clone()))?;
        if !allowed.contains(age.value.as_str()) {
            return Err(OfferViolation::InvalidAgeValue {
                unit: age.unit.clone(),
                value: age.value.clone(),
            });
        }
    }

    Ok(())
}

impl Offer {
    /// Shorthand for [`validate_offer`].
    pub fn validate(&self) -> Result<(), OfferViolation> {
        validate_offer(self)
    }
}

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Validator for whole catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every offer of a catalog, one error per failing offer.
    pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::new();

        if catalog.shop.currencies().is_empty() {
            result.add_warning("Shop declares no currencies");
        }

        if catalog.offers().is_empty() {
            result.add_warning("Shop has no offers");
        }

        for (position, offer) in catalog.offers().iter().enumerate() {
            if let Err(violation) = validate_offer(offer) {
                result.add_error(format!("Offer '{}' (#{}): {}", offer.id, position + 1, violation));
            }
        }

        result
    }
}
