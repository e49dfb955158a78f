//! Money in integer cents, with shop-configurable display formatting.
//!
//! Two formatting paths exist on purpose: filter params and stored prices use
//! plain two-decimal strings, while storefront labels go through the shop's
//! money-format template (`${{amount}}` and friends).

use serde::{Deserialize, Serialize};

/// An amount in cents (hundredths of the shop currency unit).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Currency units as a float, e.g. 4599 cents -> 45.99.
    pub fn units(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole-unit rounding for compact labels (the slider shows no decimals).
    pub fn whole_units(self) -> i64 {
        self.units().round() as i64
    }

    /// Two-decimal string used for filter params, e.g. 4000 -> "40.00".
    pub fn to_param(self) -> String {
        format!("{:.2}", self.units())
    }

    /// Parse a decimal param string back into cents. Returns `None` on junk.
    pub fn from_param(s: &str) -> Option<Money> {
        let v: f64 = s.trim().parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        Some(Money((v * 100.0).round() as i64))
    }
}

/// A shop money-format template with `{{...}}` placeholders.
///
/// Supported placeholders mirror the storefront conventions:
/// `amount`, `amount_no_decimals`, `amount_with_comma_separator`,
/// `amount_no_decimals_with_comma_separator`, `amount_with_apostrophe_separator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoneyFormat {
    template: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        MoneyFormat::new("${{amount}}")
    }
}

impl MoneyFormat {
    pub fn new(template: impl Into<String>) -> Self {
        MoneyFormat {
            template: template.into(),
        }
    }

    /// Render an amount through the template.
    pub fn format(&self, amount: Money) -> String {
        let whole = amount.units().trunc() as i64;
        let cents_part = (amount.cents().abs() % 100) as u8;

        let amount_std = format!("{}.{:02}", group(whole, ','), cents_part);
        let amount_comma = format!("{},{:02}", group(whole, '.'), cents_part);
        let amount_apostrophe = format!("{}.{:02}", group(whole, '\''), cents_part);
        let no_decimals = group(whole, ',');
        let no_decimals_comma = group(whole, '.');

        self.template
            .replace("{{amount_with_comma_separator}}", &amount_comma)
            .replace("{{amount_no_decimals_with_comma_separator}}", &no_decimals_comma)
            .replace("{{amount_with_apostrophe_separator}}", &amount_apostrophe)
            .replace("{{amount_no_decimals}}", &no_decimals)
            .replace("{{amount}}", &amount_std)
    }
}

/// Group an integer's digits in threes with the given separator.
fn group(n: i64, sep: char) -> String {
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    if lead > 0 {
        out.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits[lead..].as_bytes().chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            out.push(sep);
        }
        out.push_str(std::str::from_utf8(chunk).expect("ascii digits"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_roundtrip() {
        assert_eq!(Money(4000).to_param(), "40.00");
        assert_eq!(Money(4599).to_param(), "45.99");
        assert_eq!(Money::from_param("40.00"), Some(Money(4000)));
        assert_eq!(Money::from_param("  45.99 "), Some(Money(4599)));
        assert_eq!(Money::from_param("not a price"), None);
    }

    #[test]
    fn whole_units_rounds() {
        assert_eq!(Money(4049).whole_units(), 40);
        assert_eq!(Money(4050).whole_units(), 41);
    }

    #[test]
    fn default_template() {
        let fmt = MoneyFormat::default();
        assert_eq!(fmt.format(Money(129_900)), "$1,299.00");
    }

    #[test]
    fn comma_separator_template() {
        let fmt = MoneyFormat::new("{{amount_with_comma_separator}} kr");
        assert_eq!(fmt.format(Money(129_950)), "1.299,50 kr");
    }

    #[test]
    fn no_decimals_template() {
        let fmt = MoneyFormat::new("${{amount_no_decimals}}");
        assert_eq!(fmt.format(Money(129_999)), "$1,299");
    }

    #[test]
    fn grouping() {
        assert_eq!(group(0, ','), "0");
        assert_eq!(group(999, ','), "999");
        assert_eq!(group(1_000, ','), "1,000");
        assert_eq!(group(1_234_567, ','), "1,234,567");
    }
}
