//! Locale-aware rendering of cent amounts for the currency mask.

use crate::error::MaskError;
use chub_domain::config::LocaleConfig;
use std::borrow::Cow;

/// Symbol and separators used to render an amount of cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: Cow<'static, str>,
    decimal_separator: char,
    thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::BRL
    }
}

impl CurrencyFormat {
    /// Brazilian real: `R$ 1.234,56`.
    pub const BRL: Self =
        Self { symbol: Cow::Borrowed("R$"), decimal_separator: ',', thousands_separator: '.' };

    /// Builds a format from explicit parts.
    ///
    /// # Errors
    /// Returns [`MaskError::InvalidLocale`] if the symbol or a separator contains a digit,
    /// or both separators are the same character. Either would make re-applying the mask
    /// to its own output change the value.
    pub fn new(
        symbol: impl Into<Cow<'static, str>>,
        decimal_separator: char,
        thousands_separator: char,
    ) -> Result<Self, MaskError> {
        let symbol = symbol.into();

        if symbol.chars().any(|c| c.is_ascii_digit()) {
            return Err(MaskError::InvalidLocale {
                message: format!("currency symbol '{symbol}' contains digits").into(),
                context: None,
            });
        }
        if decimal_separator.is_ascii_digit() || thousands_separator.is_ascii_digit() {
            return Err(MaskError::InvalidLocale {
                message: "separators must not be digits".into(),
                context: None,
            });
        }
        if decimal_separator == thousands_separator {
            return Err(MaskError::InvalidLocale {
                message: format!("decimal and thousands separators are both '{decimal_separator}'")
                    .into(),
                context: None,
            });
        }

        Ok(Self { symbol, decimal_separator, thousands_separator })
    }

    /// # Errors
    /// See [`CurrencyFormat::new`].
    pub fn from_locale(locale: &LocaleConfig) -> Result<Self, MaskError> {
        Self::new(
            locale.currency_symbol.clone(),
            locale.decimal_separator,
            locale.thousands_separator,
        )
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Renders a run of ASCII digits as an amount of cents.
    ///
    /// An empty run renders as an empty string so an untouched field stays distinct
    /// from an explicit zero. Leading zeros are not significant.
    #[must_use]
    pub fn format_cents(&self, digits: &str) -> String {
        if digits.is_empty() {
            return String::new();
        }

        let significant = digits.trim_start_matches('0');
        let padded = format!("{significant:0>3}");
        let (units, cents) = padded.split_at(padded.len() - 2);

        let mut out = String::with_capacity(self.symbol.len() + padded.len() + padded.len() / 3 + 2);
        out.push_str(&self.symbol);
        out.push(' ');
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(digit);
        }
        out.push(self.decimal_separator);
        out.push_str(cents);
        out
    }

    /// Longest rendering of `max_digits` digits of cents.
    #[must_use]
    pub fn max_len(&self, max_digits: usize) -> usize {
        let units = max_digits.saturating_sub(2).max(1);
        let grouping = (units - 1) / 3;
        self.symbol.chars().count() + 1 + units + grouping + 1 + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping() {
        let brl = CurrencyFormat::BRL;
        assert_eq!(brl.format_cents("1"), "R$ 0,01");
        assert_eq!(brl.format_cents("100"), "R$ 1,00");
        assert_eq!(brl.format_cents("123456"), "R$ 1.234,56");
        assert_eq!(brl.format_cents("123456789"), "R$ 1.234.567,89");
        assert_eq!(brl.format_cents("00042"), "R$ 0,42");
        assert_eq!(brl.format_cents("0"), "R$ 0,00");
        assert_eq!(brl.format_cents(""), "");
    }

    #[test]
    fn max_len_matches_the_widest_amount() {
        let brl = CurrencyFormat::BRL;
        assert_eq!(brl.max_len(12), brl.format_cents("999999999999").chars().count());
        assert_eq!(brl.max_len(12), 19);
        assert_eq!(brl.max_len(3), brl.format_cents("999").chars().count());
    }

    #[test]
    fn rejects_ambiguous_locales() {
        assert!(CurrencyFormat::new("R1", ',', '.').is_err());
        assert!(CurrencyFormat::new("R$", ',', ',').is_err());
        assert!(CurrencyFormat::new("R$", '0', '.').is_err());

        let usd = CurrencyFormat::new("US$", '.', ',').expect("valid locale");
        assert_eq!(usd.format_cents("123456"), "US$ 1,234.56");
    }
}
