use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use thiserror::Error;

pub const DEFAULT_CATEGORY: &str = "General";

/// Catalog product as returned by the API.
///
/// Every key is always serialized; unset optional fields render as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("product record has no _id")]
    MissingId,

    #[error("field '{field}' holds {found}, expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl From<NormalizeError> for AppError {
    fn from(err: NormalizeError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl TryFrom<&Document> for Product {
    type Error = NormalizeError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Product::from_document(doc)
    }
}

impl Product {
    /// Normalizes a raw stored record, filling defaults for missing fields.
    /// A `null` value counts as missing.
    pub fn from_document(doc: &Document) -> Result<Self, NormalizeError> {
        let id = match field(doc, "_id") {
            Some(value) => encode_id(value)?,
            None => return Err(NormalizeError::MissingId),
        };

        Ok(Product {
            id,
            title: optional_string(doc, "title")?.unwrap_or_default(),
            description: optional_string(doc, "description")?,
            price: optional_price(doc, "price")?.unwrap_or(0.0),
            category: optional_string(doc, "category")?
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            in_stock: optional_flag(doc, "in_stock")?.unwrap_or(true),
            image_url: optional_string(doc, "image_url")?,
            brand: optional_string(doc, "brand")?,
            rating: optional_number(doc, "rating")?,
        })
    }
}

fn field<'a>(doc: &'a Document, key: &str) -> Option<&'a Bson> {
    match doc.get(key) {
        None | Some(Bson::Null) | Some(Bson::Undefined) => None,
        Some(value) => Some(value),
    }
}

fn invalid(field: &'static str, expected: &'static str, value: &Bson) -> NormalizeError {
    NormalizeError::InvalidType {
        field,
        expected,
        found: format!("{:?}", value.element_type()),
    }
}

/// Same native identifier always yields the same string.
fn encode_id(value: &Bson) -> Result<String, NormalizeError> {
    match value {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s.clone()),
        Bson::Int32(n) => Ok(n.to_string()),
        Bson::Int64(n) => Ok(n.to_string()),
        other => Err(invalid("_id", "an ObjectId, string or integer", other)),
    }
}

fn optional_string(doc: &Document, key: &'static str) -> Result<Option<String>, NormalizeError> {
    match field(doc, key) {
        None => Ok(None),
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(key, "a string", other)),
    }
}

fn optional_number(doc: &Document, key: &'static str) -> Result<Option<f64>, NormalizeError> {
    let Some(value) = field(doc, key) else {
        return Ok(None);
    };

    let number = match value {
        Bson::Double(n) => *n,
        Bson::Int32(n) => f64::from(*n),
        Bson::Int64(n) => *n as f64,
        Bson::Decimal128(d) => d
            .to_string()
            .parse::<f64>()
            .map_err(|_| invalid(key, "a number", value))?,
        Bson::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(key, "a number", value))?,
        other => return Err(invalid(key, "a number", other)),
    };

    // NaN and infinities serialize as JSON null.
    if !number.is_finite() {
        return Err(invalid(key, "a finite number", value));
    }

    Ok(Some(number))
}

fn optional_price(doc: &Document, key: &'static str) -> Result<Option<f64>, NormalizeError> {
    match optional_number(doc, key)? {
        Some(price) if price < 0.0 => Err(NormalizeError::InvalidType {
            field: key,
            expected: "a non-negative number",
            found: price.to_string(),
        }),
        price => Ok(price),
    }
}

fn optional_flag(doc: &Document, key: &'static str) -> Result<Option<bool>, NormalizeError> {
    match field(doc, key) {
        None => Ok(None),
        Some(Bson::Boolean(b)) => Ok(Some(*b)),
        Some(Bson::Int32(n)) => Ok(Some(*n != 0)),
        Some(Bson::Int64(n)) => Ok(Some(*n != 0)),
        Some(Bson::Double(n)) => Ok(Some(*n != 0.0)),
        Some(Bson::String(s)) => Ok(Some(!s.is_empty())),
        Some(other) => Err(invalid(key, "a boolean", other)),
    }
}
