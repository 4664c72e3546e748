//! Field descriptor tables mapping the catalog model to YML tags.
//!
//! Each entity lists its fields in output order, with the wire name, whether
//! the field is an attribute, a child element or the element's inner text,
//! and whether an empty value is dropped. [`crate::serializer`] walks these
//! tables; nothing about the wire format lives on the model types.

use crate::models::{Age, Catalog, Category, Currency, DeliveryOption, DeliveryOptions, Offer, Param, Shop};

/// Root element name of a YML document.
pub const ROOT_TAG: &str = "yml_catalog";

/// How a field appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Attribute,
    Element,
    Inner,
}

/// One row of a descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub omit_empty: bool,
}

impl Field {
    pub const fn attr(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Attribute, omit_empty: false }
    }

    pub const fn attr_opt(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Attribute, omit_empty: true }
    }

    pub const fn elem(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Element, omit_empty: false }
    }

    pub const fn elem_opt(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Element, omit_empty: true }
    }

    pub const fn inner() -> Self {
        Self { name: "", kind: FieldKind::Inner, omit_empty: false }
    }
}

/// A field value handed to the serializer.
pub enum Value<'a> {
    /// Not present at all; never written.
    Absent,
    Text(&'a str),
    /// Text computed on demand, such as formatted dates.
    Owned(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Repeated text elements sharing the field name.
    Texts(&'a [String]),
    /// A nested entity written as one element.
    Record(&'a dyn Record),
    /// Nested entities written as sibling elements sharing the field name.
    Records(Vec<&'a dyn Record>),
    /// A wrapper element holding one `item` element per entity.
    Group { item: &'static str, records: Vec<&'a dyn Record> },
}

impl Value<'_> {
    /// Zero values in the sense of omit-when-empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Text(s) => s.is_empty(),
            Value::Owned(s) => s.is_empty(),
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
            Value::Texts(items) => items.is_empty(),
            Value::Record(_) => false,
            Value::Records(items) => items.is_empty(),
            Value::Group { records, .. } => records.is_empty(),
        }
    }

    /// Text form of a scalar value, `None` for composite values.
    pub fn scalar(&self) -> Option<String> {
        match self {
            Value::Text(s) => Some((*s).to_string()),
            Value::Owned(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(x) => Some(format_float(*x)),
            _ => None,
        }
    }
}

/// Shortest round-trip form of `x`, switching to exponent notation
/// (`1e+06`, `1.5e-05`) when the decimal exponent is below -4 or at least 6.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return x.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..6).contains(&exp) {
        x.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

/// An entity with a descriptor table.
pub trait Record {
    /// Descriptor rows in output order.
    fn fields(&self) -> &'static [Field];

    /// Value of the field named in the descriptor (`""` for inner text).
    fn value(&self, field: &str) -> Value<'_>;
}

fn records<T: Record>(items: &[T]) -> Vec<&dyn Record> {
    items.iter().map(|item| item as &dyn Record).collect()
}

fn optional<T: Record>(item: Option<&T>) -> Value<'_> {
    match item {
        Some(item) => Value::Record(item),
        None => Value::Absent,
    }
}

const CATALOG_FIELDS: &[Field] = &[Field::attr("date"), Field::elem("shop")];

impl Record for Catalog {
    fn fields(&self) -> &'static [Field] {
        CATALOG_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "date" => Value::Owned(self.date_string()),
            "shop" => Value::Record(&self.shop),
            _ => Value::Absent,
        }
    }
}

const SHOP_FIELDS: &[Field] = &[
    Field::elem("name"),
    Field::elem("company"),
    Field::elem("url"),
    Field::elem_opt("platform"),
    Field::elem_opt("version"),
    Field::elem_opt("agency"),
    Field::elem_opt("email"),
    Field::elem("currencies"),
    Field::elem("categories"),
    Field::elem("delivery-options"),
    Field::elem_opt("cpa"),
    Field::elem("offers"),
];

impl Record for Shop {
    fn fields(&self) -> &'static [Field] {
        SHOP_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::Text(&self.name),
            "company" => Value::Text(&self.company),
            "url" => Value::Text(&self.url),
            "platform" => Value::Text(&self.platform),
            "version" => Value::Text(&self.version),
            "agency" => Value::Text(&self.agency),
            "email" => Value::Text(&self.email),
            "currencies" => Value::Group { item: "currency", records: records(&self.currencies) },
            "categories" => Value::Group { item: "category", records: records(&self.categories) },
            "delivery-options" => optional(self.delivery_options.as_ref()),
            "cpa" => Value::Int(i64::from(self.cpa)),
            "offers" => Value::Group { item: "offer", records: records(&self.offers) },
            _ => Value::Absent,
        }
    }
}

const CURRENCY_FIELDS: &[Field] = &[Field::attr("id"), Field::attr("rate"), Field::attr("plus")];

impl Record for Currency {
    fn fields(&self) -> &'static [Field] {
        CURRENCY_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Text(&self.id),
            "rate" => Value::Text(&self.rate),
            "plus" => Value::Float(self.plus),
            _ => Value::Absent,
        }
    }
}

const CATEGORY_FIELDS: &[Field] = &[Field::attr("id"), Field::attr_opt("parentId"), Field::inner()];

impl Record for Category {
    fn fields(&self) -> &'static [Field] {
        CATEGORY_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Int(self.id),
            "parentId" => Value::Int(self.parent_id),
            "" => Value::Text(&self.name),
            _ => Value::Absent,
        }
    }
}

const DELIVERY_OPTIONS_FIELDS: &[Field] = &[Field::elem("option")];

impl Record for DeliveryOptions {
    fn fields(&self) -> &'static [Field] {
        DELIVERY_OPTIONS_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "option" => Value::Records(records(&self.options)),
            _ => Value::Absent,
        }
    }
}

const DELIVERY_OPTION_FIELDS: &[Field] = &[
    Field::attr("cost"),
    Field::attr("days"),
    Field::attr_opt("order-before"),
];

impl Record for DeliveryOption {
    fn fields(&self) -> &'static [Field] {
        DELIVERY_OPTION_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "cost" => Value::Int(self.cost),
            "days" => Value::Text(&self.days),
            "order-before" => Value::Int(i64::from(self.order_before)),
            _ => Value::Absent,
        }
    }
}

const OFFER_FIELDS: &[Field] = &[
    Field::attr("id"),
    Field::attr_opt("bid"),
    Field::attr_opt("cid"),
    Field::attr_opt("type"),
    Field::attr("available"),
    Field::elem_opt("url"),
    Field::elem("price"),
    Field::elem_opt("oldprice"),
    Field::elem("currencyId"),
    Field::elem("categoryId"),
    Field::elem_opt("market_category"),
    Field::elem_opt("picture"),
    Field::elem_opt("store"),
    Field::elem_opt("pickup"),
    Field::elem_opt("delivery"),
    Field::elem_opt("delivery-options"),
    Field::elem_opt("name"),
    Field::elem_opt("typePrefix"),
    Field::elem_opt("vendor"),
    Field::elem_opt("vendorCode"),
    Field::elem_opt("model"),
    Field::elem_opt("description"),
    Field::elem_opt("sales_notes"),
    Field::elem_opt("manufacturer_warranty"),
    Field::elem_opt("country_of_origin"),
    Field::elem_opt("downloadable"),
    Field::elem_opt("adult"),
    Field::elem_opt("age"),
    Field::elem_opt("barcode"),
    Field::elem_opt("cpa"),
    Field::elem_opt("rec"),
    Field::elem_opt("expiry"),
    Field::elem_opt("weight"),
    Field::elem_opt("dimensions"),
    Field::elem_opt("param"),
];

impl Record for Offer {
    fn fields(&self) -> &'static [Field] {
        OFFER_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Text(&self.id),
            "bid" => Value::Int(i64::from(self.bid)),
            "cid" => Value::Int(i64::from(self.cbid)),
            "type" => self.offer_type.as_attr().map_or(Value::Absent, Value::Text),
            "available" => Value::Bool(self.available),
            "url" => Value::Text(&self.url),
            "price" => Value::Float(self.price),
            "oldprice" => Value::Float(self.old_price),
            "currencyId" => Value::Text(&self.currency_id),
            "categoryId" => Value::Int(self.category_id),
            "market_category" => Value::Text(&self.market_category),
            "picture" => Value::Texts(&self.pictures),
            "store" => Value::Bool(self.store),
            "pickup" => Value::Bool(self.pickup),
            "delivery" => Value::Bool(self.delivery),
            "delivery-options" => optional(self.delivery_options.as_ref()),
            "name" => Value::Text(&self.name),
            "typePrefix" => Value::Text(&self.type_prefix),
            "vendor" => Value::Text(&self.vendor),
            "vendorCode" => Value::Text(&self.vendor_code),
            "model" => Value::Text(&self.model),
            "description" => Value::Text(&self.description),
            "sales_notes" => Value::Text(&self.sales_notes),
            "manufacturer_warranty" => Value::Bool(self.manufacturer_warranty),
            "country_of_origin" => Value::Text(&self.country_of_origin),
            "downloadable" => Value::Bool(self.downloadable),
            "adult" => Value::Bool(self.adult),
            "age" => optional(self.age.as_ref()),
            "barcode" => Value::Texts(&self.barcodes),
            "cpa" => Value::Int(i64::from(self.cpa)),
            "rec" => Value::Text(&self.rec),
            "expiry" => Value::Text(&self.expiry),
            "weight" => Value::Float(self.weight),
            "dimensions" => Value::Text(&self.dimensions),
            "param" => Value::Records(records(&self.params)),
            _ => Value::Absent,
        }
    }
}

const AGE_FIELDS: &[Field] = &[Field::attr("unit"), Field::inner()];

impl Record for Age {
    fn fields(&self) -> &'static [Field] {
        AGE_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "unit" => Value::Text(&self.unit),
            "" => Value::Text(&self.value),
            _ => Value::Absent,
        }
    }
}

const PARAM_FIELDS: &[Field] = &[Field::attr("name"), Field::attr_opt("unit"), Field::inner()];

impl Record for Param {
    fn fields(&self) -> &'static [Field] {
        PARAM_FIELDS
    }

    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::Text(&self.name),
            "unit" => Value::Text(&self.unit),
            "" => Value::Text(&self.value),
            _ => Value::Absent,
        }
    }
}
