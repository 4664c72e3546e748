//! # yml_catalog
//!
//! Builds product catalogs in the YML marketplace feed format.
//!
//! The crate covers the catalog data model, its append-only builder, the
//! per-offer schema rules, delivery day-range encoding and export to XML.
//!
//! ## Modules
//!
//! - **Models**: catalog, shop, currencies, categories, delivery options, offers
//! - **Builder**: `add_*` operations; infallible and unvalidated
//! - **Validator**: first-violation checks for a single offer
//! - **Schema / Serializer**: descriptor tables and the XML renderer
//! - **Exporter**: preamble plus document, to a stream or a file
//! - **Reader**: declarative YAML/JSON/TOML catalog definitions
//!
//! ## Example
//!
//! ```rust,no_run
//! use yml_catalog::{export_to_file, Catalog, Offer};
//!
//! let mut catalog = Catalog::new("BestShop", "Best online seller Inc.", "http://best.seller.ru/");
//! catalog.add_currency("RUR", "1", 0.0);
//! catalog.add_category(1, 0, "Книги");
//! catalog.add_delivery_option(0, 1, 3, 18);
//!
//! let mut offer = Offer {
//!     id: "123".into(),
//!     available: true,
//!     price: 600.0,
//!     currency_id: "RUR".into(),
//!     category_id: 1,
//!     ..Default::default()
//! };
//! offer.add_age("year", "18");
//!
//! if offer.validate().is_ok() {
//!     catalog.add_offer(offer);
//! }
//!
//! export_to_file(&catalog, "feed.xml", true).unwrap();
//! ```

pub mod builder;
pub mod delivery;
pub mod error;
pub mod exporter;
pub mod models;
pub mod reader;
pub mod reference;
pub mod schema;
pub mod serializer;
pub mod validator;

pub use delivery::{encode_days, DayRange};
pub use error::{CatalogError, CatalogResult};
pub use exporter::{export_to_file, export_to_string, export_to_writer, HEADER};
pub use models::*;
pub use reader::{CatalogDefinition, CatalogReader, DefinitionFormat};
pub use validator::{validate_offer, CatalogValidator, OfferViolation, ValidationResult};
