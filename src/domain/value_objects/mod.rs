//! Value Objects for the catalog dashboard

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money value object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money { amount: Decimal, currency: String }

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self { Self { amount, currency: currency.to_string() } }
    pub fn usd(amount: Decimal) -> Self { Self::new(amount, "USD") }
    pub fn zero(currency: &str) -> Self { Self::new(Decimal::ZERO, currency) }
    pub fn amount(&self) -> Decimal { self.amount }
    pub fn currency(&self) -> &str { &self.currency }

    /// Sum of two amounts; both must be in the same currency.
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch { expected: self.currency.clone(), found: other.currency.clone() });
        }
        Ok(Money::new(self.amount + other.amount, &self.currency))
    }

    /// Value of `stock` units at this unit price.
    pub fn for_stock(&self, stock: u32) -> Money { Money::new(self.amount * Decimal::from(stock), &self.currency) }

    /// Formats as whole currency units with thousands separators, e.g. `$2,868`.
    ///
    /// Fractions are rounded half away from zero.
    pub fn format_whole(&self) -> String {
        let rounded = self.amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{}{}{}", sign, currency_prefix(&self.currency), group_thousands(&digits))
    }
}

impl Default for Money { fn default() -> Self { Self::zero("USD") } }

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.format_whole()) }
}

fn currency_prefix(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "NGN" => "₦".to_string(),
        other => format!("{} ", other),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError { CurrencyMismatch { expected: String, found: String } }
impl std::error::Error for MoneyError {}
impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrencyMismatch { expected, found } => write!(f, "cannot add {} to a {} total", found, expected),
        }
    }
}

/// Percentage discount, 0 to 100 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount(u8);

impl Discount {
    pub fn new(percent: u8) -> Option<Self> { (percent <= 100).then_some(Self(percent)) }
    pub fn percent(&self) -> u8 { self.0 }
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * (Decimal::ONE_HUNDRED - Decimal::from(self.0)) / Decimal::ONE_HUNDRED
    }
    /// Badge text such as `-10%`.
    pub fn label(&self) -> String { format!("-{}%", self.0) }
}

/// Closed price interval `[min, max]` on list price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceRange { min: Decimal, max: Decimal }

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, PriceRangeError> {
        if min.is_sign_negative() && !min.is_zero() { return Err(PriceRangeError::Negative { value: min }); }
        if max.is_sign_negative() && !max.is_zero() { return Err(PriceRangeError::Negative { value: max }); }
        if min > max { return Err(PriceRangeError::Inverted { min, max }); }
        Ok(Self { min, max })
    }
    pub fn up_to(max: Decimal) -> Result<Self, PriceRangeError> { Self::new(Decimal::ZERO, max) }
    pub fn zero_to(max: u32) -> Self { Self { min: Decimal::ZERO, max: Decimal::from(max) } }
    pub fn min(&self) -> Decimal { self.min }
    pub fn max(&self) -> Decimal { self.max }
    pub fn contains(&self, price: Decimal) -> bool { self.min <= price && price <= self.max }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceRangeError { Inverted { min: Decimal, max: Decimal }, Negative { value: Decimal } }
impl std::error::Error for PriceRangeError {}
impl fmt::Display for PriceRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { min, max } => write!(f, "min {} exceeds max {}", min, max),
            Self::Negative { value } => write!(f, "bound {} is negative", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_stock_value_in_one_currency() {
        let unit = Money::new(Decimal::new(3250, 0), "NGN");
        let held = unit.for_stock(325);
        assert_eq!(held.amount(), Decimal::new(1_056_250, 0));
        let total = Money::zero("NGN").checked_add(&held).unwrap().checked_add(&unit.for_stock(0)).unwrap();
        assert_eq!(total.format_whole(), "₦1,056,250");
        let err = total.checked_add(&Money::usd(Decimal::ONE)).unwrap_err();
        assert_eq!(err, MoneyError::CurrencyMismatch { expected: "NGN".into(), found: "USD".into() });
        assert_eq!(err.to_string(), "cannot add USD to a NGN total");
    }
    #[test]
    fn test_format_whole() {
        assert_eq!(Money::usd(Decimal::new(2868, 0)).format_whole(), "$2,868");
        assert_eq!(Money::usd(Decimal::new(23778, 1)).format_whole(), "$2,378");
        assert_eq!(Money::usd(Decimal::new(9995, 1)).format_whole(), "$1,000");
        assert_eq!(Money::usd(Decimal::new(1234567, 0)).format_whole(), "$1,234,567");
        assert_eq!(Money::usd(Decimal::ZERO).format_whole(), "$0");
        assert_eq!(Money::new(Decimal::new(1950, 0), "CHF").format_whole(), "CHF 1,950");
    }
    #[test]
    fn test_discount() {
        let d = Discount::new(25).unwrap();
        assert_eq!(d.apply(Decimal::new(2436, 0)), Decimal::new(1827, 0));
        assert_eq!(d.label(), "-25%");
        assert!(Discount::new(101).is_none());
    }
    #[test]
    fn test_price_range() {
        let r = PriceRange::new(Decimal::ZERO, Decimal::new(2000, 0)).unwrap();
        assert!(r.contains(Decimal::new(1950, 0)));
        assert!(r.contains(Decimal::new(2000, 0)));
        assert!(!r.contains(Decimal::new(2436, 0)));
        assert!(matches!(PriceRange::new(Decimal::TEN, Decimal::ONE), Err(PriceRangeError::Inverted { .. })));
        assert!(matches!(PriceRange::new(Decimal::NEGATIVE_ONE, Decimal::ONE), Err(PriceRangeError::Negative { .. })));
    }
}
