//! Currency registry, conversion, and resolution policy.
//!
//! The engine never fetches exchange rates itself: the application supplies a
//! rate table and the engine only does the conversion math. Conversion and
//! per-paycheck currency resolution are injected into the rate calculations
//! through the [`CurrencyConverter`] and [`CurrencyResolver`] traits, keeping
//! the calculation core free of policy.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

use crate::models::{Paycheck, Position};

/// The currency every exchange-rate table is expressed against.
pub const BASE_CURRENCY: &str = "EUR";

/// Static display information for a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 code, e.g. "EUR".
    pub code: &'static str,
    /// Display symbol, e.g. "€".
    pub symbol: &'static str,
    /// Human-readable name, e.g. "Euro".
    pub name: &'static str,
}

/// The currencies the application offers, in display order.
pub const CURRENCIES: [CurrencyInfo; 7] = [
    CurrencyInfo {
        code: "EUR",
        symbol: "€",
        name: "Euro",
    },
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    CurrencyInfo {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
    },
    CurrencyInfo {
        code: "DKK",
        symbol: "kr",
        name: "Danish Krone",
    },
    CurrencyInfo {
        code: "NOK",
        symbol: "kr",
        name: "Norwegian Krone",
    },
    CurrencyInfo {
        code: "SEK",
        symbol: "kr",
        name: "Swedish Krona",
    },
    CurrencyInfo {
        code: "CHF",
        symbol: "CHF",
        name: "Swiss Franc",
    },
];

/// Looks up the registry entry for a currency code.
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|info| info.code == code)
}

/// Returns the display symbol for a currency code, falling back to the code
/// itself for currencies outside the registry.
///
/// # Example
///
/// ```
/// use worklog_engine::currency::currency_symbol;
///
/// assert_eq!(currency_symbol("EUR"), "€");
/// assert_eq!(currency_symbol("JPY"), "JPY");
/// ```
pub fn currency_symbol<'a>(code: &'a str) -> &'a str {
    currency_info(code).map_or(code, |info| info.symbol)
}

/// Converts an amount from one currency toward a fixed target currency.
///
/// Injected into [`calculate_hourly_rate`](crate::calculation::calculate_hourly_rate)
/// by the caller; the engine works with raw amounts when no converter is given.
pub trait CurrencyConverter {
    /// Converts `amount` from `from_currency` into the implementation's
    /// target currency.
    fn convert(&self, amount: Decimal, from_currency: &str) -> Decimal;
}

/// Resolves the currency a paycheck was paid in.
pub trait CurrencyResolver {
    /// Returns the currency code for the given paycheck.
    fn resolve(&self, paycheck: &Paycheck) -> String;
}

/// An EUR-based exchange-rate table with a fixed conversion target.
///
/// Rates map a currency code to its value per one euro. A missing rate is a
/// degraded-but-valid situation: the original amount is returned unchanged
/// and a warning is logged, mirroring how a stale or partial rate feed should
/// never block the user from seeing their numbers.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use worklog_engine::currency::ExchangeRates;
///
/// let mut rates = HashMap::new();
/// rates.insert("USD".to_string(), Decimal::from_str("1.10").unwrap());
/// let table = ExchangeRates::new("EUR", rates);
///
/// let amount = Decimal::from_str("110").unwrap();
/// assert_eq!(
///     table.convert_between(amount, "USD", "EUR"),
///     Decimal::from_str("100").unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    target: String,
    rates: HashMap<String, Decimal>,
}

impl ExchangeRates {
    /// Creates a rate table converting toward `target`.
    pub fn new(target: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        Self {
            target: target.into(),
            rates,
        }
    }

    /// Returns the currency this table converts toward.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Converts an amount between two currencies via the EUR base.
    ///
    /// Same source and target, an empty table, or a missing rate all return
    /// the original amount unchanged.
    pub fn convert_between(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        if from == to || self.rates.is_empty() {
            return amount;
        }

        let amount_in_base = if from == BASE_CURRENCY {
            amount
        } else {
            match self.rates.get(from) {
                Some(rate) if !rate.is_zero() => amount / rate,
                _ => {
                    warn!(currency = from, "exchange rate not available");
                    return amount;
                }
            }
        };

        if to == BASE_CURRENCY {
            return amount_in_base;
        }

        match self.rates.get(to) {
            Some(rate) => amount_in_base * rate,
            None => {
                warn!(currency = to, "exchange rate not available");
                amount
            }
        }
    }
}

impl CurrencyConverter for ExchangeRates {
    fn convert(&self, amount: Decimal, from_currency: &str) -> Decimal {
        self.convert_between(amount, from_currency, &self.target)
    }
}

/// Resolves paycheck currencies from the positions they were earned under.
#[derive(Debug, Clone)]
pub struct PositionCurrencies {
    by_position: HashMap<Uuid, String>,
    default: String,
}

impl PositionCurrencies {
    /// Creates an empty resolver that always answers with `default`.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            by_position: HashMap::new(),
            default: default.into(),
        }
    }

    /// Builds a resolver from a set of positions.
    pub fn from_positions(positions: &[Position], default: impl Into<String>) -> Self {
        let by_position = positions
            .iter()
            .map(|position| (position.id, position.currency.clone()))
            .collect();
        Self {
            by_position,
            default: default.into(),
        }
    }

    /// Registers the currency for a single position.
    pub fn insert(&mut self, position_id: Uuid, currency: impl Into<String>) {
        self.by_position.insert(position_id, currency.into());
    }
}

impl CurrencyResolver for PositionCurrencies {
    fn resolve(&self, paycheck: &Paycheck) -> String {
        self.by_position
            .get(&paycheck.position_id)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_rates() -> HashMap<String, Decimal> {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), dec("1.10"));
        rates.insert("DKK".to_string(), dec("7.45"));
        rates
    }

    fn make_paycheck(position_id: Uuid) -> Paycheck {
        Paycheck {
            id: Uuid::new_v4(),
            position_id,
            reference_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            net_amount: dec("1800"),
            gross_amount: None,
            bonuses: Decimal::ZERO,
        }
    }

    #[test]
    fn test_currency_symbol_known_codes() {
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("DKK"), "kr");
    }

    #[test]
    fn test_currency_symbol_unknown_code_falls_back() {
        assert_eq!(currency_symbol("JPY"), "JPY");
    }

    #[test]
    fn test_currency_info_lookup() {
        assert_eq!(currency_info("CHF").unwrap().name, "Swiss Franc");
        assert!(currency_info("JPY").is_none());
    }

    #[test]
    fn test_convert_same_currency_is_identity() {
        let table = ExchangeRates::new("EUR", make_rates());
        assert_eq!(table.convert_between(dec("42"), "USD", "USD"), dec("42"));
    }

    #[test]
    fn test_convert_empty_table_returns_amount() {
        let table = ExchangeRates::new("EUR", HashMap::new());
        assert_eq!(table.convert_between(dec("42"), "USD", "EUR"), dec("42"));
    }

    #[test]
    fn test_convert_to_base() {
        let table = ExchangeRates::new("EUR", make_rates());
        assert_eq!(table.convert_between(dec("110"), "USD", "EUR"), dec("100"));
    }

    #[test]
    fn test_convert_from_base() {
        let table = ExchangeRates::new("DKK", make_rates());
        assert_eq!(table.convert_between(dec("100"), "EUR", "DKK"), dec("745.00"));
    }

    #[test]
    fn test_convert_cross_currency_goes_through_base() {
        let table = ExchangeRates::new("EUR", make_rates());
        // 110 USD -> 100 EUR -> 745 DKK
        assert_eq!(
            table.convert_between(dec("110"), "USD", "DKK"),
            dec("745.0000")
        );
    }

    #[test]
    fn test_convert_missing_rate_returns_amount() {
        let table = ExchangeRates::new("EUR", make_rates());
        assert_eq!(table.convert_between(dec("42"), "JPY", "EUR"), dec("42"));
        assert_eq!(table.convert_between(dec("42"), "EUR", "JPY"), dec("42"));
    }

    #[test]
    fn test_converter_trait_targets_table_currency() {
        let table = ExchangeRates::new("EUR", make_rates());
        assert_eq!(table.target(), "EUR");
        assert_eq!(table.convert(dec("110"), "USD"), dec("100"));
    }

    #[test]
    fn test_position_currencies_resolve() {
        let position_id = Uuid::new_v4();
        let mut resolver = PositionCurrencies::new("EUR");
        resolver.insert(position_id, "DKK");

        assert_eq!(resolver.resolve(&make_paycheck(position_id)), "DKK");
        assert_eq!(resolver.resolve(&make_paycheck(Uuid::new_v4())), "EUR");
    }
}
