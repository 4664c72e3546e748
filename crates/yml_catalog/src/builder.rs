//! Append-only builder operations.
//!
//! Nothing here validates input: ids are not checked for uniqueness, parents
//! are not resolved and negative numbers pass through. Offers are checked
//! separately with [`crate::validator::validate_offer`].

use crate::delivery::encode_days;
use crate::models::{Age, Catalog, Category, Currency, DeliveryOption, DeliveryOptions, Offer, Param};

impl Catalog {
    /// Append a currency.
    pub fn add_currency(&mut self, id: impl Into<String>, rate: impl Into<String>, plus: f64) {
        self.shop.currencies.push(Currency {
            id: id.into(),
            rate: rate.into(),
            plus,
        });
    }

    /// Append a category. A `parent_id` of 0 makes it a root.
    pub fn add_category(&mut self, id: i64, parent_id: i64, name: impl Into<String>) {
        self.shop.categories.push(Category {
            id,
            parent_id,
            name: name.into(),
        });
    }

    /// Append a shop-wide delivery option. A cost of 0 means free delivery.
    pub fn add_delivery_option(&mut self, cost: i64, days_from: i64, days_to: i64, order_before: i32) {
        self.shop
            .delivery_options
            .get_or_insert_with(DeliveryOptions::default)
            .add(cost, days_from, days_to, order_before);
    }

    /// Append an offer. Offers are written in the order they were added.
    pub fn add_offer(&mut self, offer: Offer) {
        self.shop.offers.push(offer);
    }
}

impl DeliveryOptions {
    pub(crate) fn add(&mut self, cost: i64, days_from: i64, days_to: i64, order_before: i32) {
        self.options.push(DeliveryOption {
            cost,
            days: encode_days(days_from, days_to),
            order_before,
        });
    }
}

impl Offer {
    pub fn add_picture(&mut self, url: impl Into<String>) {
        self.pictures.push(url.into());
    }

    pub fn add_barcode(&mut self, barcode: impl Into<String>) {
        self.barcodes.push(barcode.into());
    }

    pub fn add_param(&mut self, name: impl Into<String>, unit: impl Into<String>, value: impl Into<String>) {
        self.params.push(Param {
            name: name.into(),
            unit: unit.into(),
            value: value.into(),
        });
    }

    /// Set the age restriction. Only the first call has an effect.
    pub fn add_age(&mut self, unit: impl Into<String>, value: impl Into<String>) {
        if self.age.is_none() {
            self.age = Some(Age {
                unit: unit.into(),
                value: value.into(),
            });
        }
    }

    /// Append an offer-level delivery option, overriding the shop defaults.
    pub fn add_delivery_option(&mut self, cost: i64, days_from: i64, days_to: i64, order_before: i32) {
        self.delivery_options
            .get_or_insert_with(DeliveryOptions::default)
            .add(cost, days_from, days_to, order_before);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::new("BestShop", "Best online seller Inc.", "http://best.seller.ru/")
    }

    #[test]
    fn test_add_currency_and_categories() {
        let mut cat = catalog();
        cat.add_currency("RUR", "1", 0.0);
        cat.add_category(1, 0, "Книги");
        cat.add_category(2, 1, "Детективы");
        // Dangling parent and duplicate id are accepted as-is.
        cat.add_category(2, 99, "Дубликат");

        assert_eq!(cat.shop.currencies().len(), 1);
        assert_eq!(cat.shop.currencies()[0].rate, "1");
        assert_eq!(cat.shop.categories().len(), 3);
        assert!(cat.shop.categories()[0].is_root());
        assert_eq!(cat.shop.categories()[2].parent_id, 99);
    }

    #[test]
    fn test_shop_delivery_options_are_encoded() {
        let mut cat = catalog();
        cat.add_delivery_option(0, 0, 0, 10);
        cat.add_delivery_option(0, 1, 0, 0);
        cat.add_delivery_option(-300, 2, 5, 0);

        let options = cat.shop.delivery_options().unwrap().options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].days, "0");
        assert_eq!(options[0].order_before, 10);
        assert_eq!(options[1].days, "1");
        assert_eq!(options[2].days, "2-5");
        assert_eq!(options[2].cost, -300);
    }

    #[test]
    fn test_offer_delivery_override() {
        let mut offer = Offer::default();
        assert!(offer.delivery_options.is_none());
        offer.add_delivery_option(300, 1, 3, 18);
        let options = offer.delivery_options.as_ref().unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options.options()[0].days, "1-3");
    }

    #[test]
    fn test_add_age_first_write_wins() {
        let mut offer = Offer::default();
        offer.add_age("year", "18");
        offer.add_age("month", "3");
        let age = offer.age.as_ref().unwrap();
        assert_eq!(age.unit, "year");
        assert_eq!(age.value, "18");
    }

    #[test]
    fn test_offer_helpers_append() {
        let mut offer = Offer::default();
        offer.add_picture("http://a/1.jpg");
        offer.add_picture("http://a/2.jpg");
        offer.add_barcode("0123456789012");
        offer.add_param("Вес", "кг", "2.73");
        offer.add_param("Цвет", "", "белый");

        assert_eq!(offer.pictures, vec!["http://a/1.jpg", "http://a/2.jpg"]);
        assert_eq!(offer.barcodes.len(), 1);
        assert_eq!(offer.params[0].unit, "кг");
        assert_eq!(offer.params[1].name, "Цвет");
    }

    proptest! {
        #[test]
        fn prop_add_offer_preserves_order(ids in proptest::collection::vec("[a-z0-9]{1,20}", 0..40)) {
            let mut cat = catalog();
            for id in &ids {
                cat.add_offer(Offer { id: id.clone(), ..Default::default() });
            }
            let stored: Vec<&str> = cat.offers().iter().map(|o| o.id.as_str()).collect();
            let expected: Vec<&str> = ids.iter().map(String::as_str).collect();
            prop_assert_eq!(stored, expected);
        }
    }
}
