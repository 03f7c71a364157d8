//! Product Aggregate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};
use crate::domain::value_objects::{Discount, Money};
use crate::CatalogError;

/// A catalog record. Immutable for the lifetime of a dashboard session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[validate(length(min = 1))]
    id: String,
    #[validate(length(min = 1))]
    name: String,
    category: String,
    brand: String,
    #[serde(default)]
    size: String,
    #[validate(custom = "non_negative")]
    price: Decimal,
    #[serde(default)]
    stock: u32,
    status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 100))]
    discount: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year_produced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Active, Self::OnHold, Self::OutOfStock];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace() && *c != '_' && *c != '-').collect();
        match normalized.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "onhold" => Ok(Self::OnHold),
            "outofstock" => Ok(Self::OutOfStock),
            _ => Err(format!("unknown product status '{}'", s)),
        }
    }
}

fn non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() { return Err(ValidationError::new("negative_price")); }
    Ok(())
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: impl Into<String>, category: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(), name: name.into(), brand: brand.into(), category: category.into(),
            size: String::new(), price, stock: 0, status: ProductStatus::Active, discount: None,
            image: None, year_produced: None, origin: None, description: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self { self.size = size.into(); self }
    pub fn with_stock(mut self, stock: u32) -> Self { self.stock = stock; self }
    pub fn with_status(mut self, status: ProductStatus) -> Self { self.status = status; self }
    /// Percentages above 100 are kept as given and fail `check()`.
    pub fn with_discount(mut self, percent: u8) -> Self { self.discount = Some(percent); self }
    pub fn with_image(mut self, image: impl Into<String>) -> Self { self.image = Some(image.into()); self }
    pub fn with_year(mut self, year: impl Into<String>) -> Self { self.year_produced = Some(year.into()); self }
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self { self.origin = Some(origin.into()); self }
    pub fn with_description(mut self, description: impl Into<String>) -> Self { self.description = Some(description.into()); self }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn brand(&self) -> &str { &self.brand }
    pub fn category(&self) -> &str { &self.category }
    pub fn size(&self) -> &str { &self.size }
    pub fn price(&self) -> Decimal { self.price }
    pub fn stock(&self) -> u32 { self.stock }
    pub fn status(&self) -> ProductStatus { self.status }
    pub fn image(&self) -> Option<&str> { self.image.as_deref() }
    pub fn year_produced(&self) -> Option<&str> { self.year_produced.as_deref() }
    pub fn origin(&self) -> Option<&str> { self.origin.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn discount(&self) -> Option<Discount> { self.discount.and_then(Discount::new) }
    pub fn is_discounted(&self) -> bool { self.discount().is_some_and(|d| d.percent() > 0) }
    pub fn is_in_stock(&self) -> bool { self.stock > 0 && self.status != ProductStatus::OutOfStock }

    /// Production year as a sort key; absent or unparseable years order as 0.
    pub fn year_key(&self) -> u32 {
        self.year_produced.as_deref().and_then(|y| y.trim().parse().ok()).unwrap_or(0)
    }

    pub fn effective_price(&self) -> Decimal {
        match self.discount() {
            Some(d) => d.apply(self.price),
            None => self.price,
        }
    }

    pub fn price_tag(&self, currency: &str) -> PriceTag {
        let list = Money::new(self.price, currency);
        match self.discount().filter(|d| d.percent() > 0) {
            Some(d) => PriceTag {
                list: list.format_whole(),
                discounted: Some(Money::new(d.apply(self.price), currency).format_whole()),
                discount_label: Some(d.label()),
            },
            None => PriceTag { list: list.format_whole(), discounted: None, discount_label: None },
        }
    }

    pub fn check(&self) -> Result<(), CatalogError> {
        self.validate().map_err(|e| CatalogError::InvalidRecord { id: self.id.clone(), reason: e.to_string() })
    }
}

/// Display-ready prices for card and detail views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceTag {
    pub list: String,
    pub discounted: Option<String>,
    pub discount_label: Option<String>,
}
