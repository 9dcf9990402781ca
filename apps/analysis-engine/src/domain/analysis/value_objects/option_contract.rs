//! Options Contract Value Object

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Position side (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl PositionSide {
    /// Check if this is a long position.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }

    /// Check if this is a short position.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// A single options leg held to expiration.
///
/// The payoff depends only on the type, strike, premiums and side. The
/// expiration date is carried for the caller and never read by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsContract {
    /// Call or put.
    #[serde(rename = "type")]
    option_type: OptionType,
    /// Strike price.
    strike_price: Decimal,
    /// Bid premium (received when opening short).
    bid: Decimal,
    /// Ask premium (paid when opening long).
    ask: Decimal,
    /// Expiration timestamp.
    #[serde(default)]
    expiration_date: Option<DateTime<Utc>>,
    /// Long or short.
    long_short: PositionSide,
}

impl OptionsContract {
    /// Create a new contract without an expiration date.
    #[must_use]
    pub const fn new(
        option_type: OptionType,
        strike_price: Decimal,
        bid: Decimal,
        ask: Decimal,
        long_short: PositionSide,
    ) -> Self {
        Self {
            option_type,
            strike_price,
            bid,
            ask,
            expiration_date: None,
            long_short,
        }
    }

    /// Create a long call.
    #[must_use]
    pub const fn long_call(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Call, strike_price, bid, ask, PositionSide::Long)
    }

    /// Create a short call.
    #[must_use]
    pub const fn short_call(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Call, strike_price, bid, ask, PositionSide::Short)
    }

    /// Create a long put.
    #[must_use]
    pub const fn long_put(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Put, strike_price, bid, ask, PositionSide::Long)
    }

    /// Create a short put.
    #[must_use]
    pub const fn short_put(strike_price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        Self::new(OptionType::Put, strike_price, bid, ask, PositionSide::Short)
    }

    /// Attach an expiration date.
    #[must_use]
    pub const fn with_expiration(mut self, expiration_date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    /// Get the option type.
    #[must_use]
    pub const fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike_price(&self) -> Decimal {
        self.strike_price
    }

    /// Get the bid premium.
    #[must_use]
    pub const fn bid(&self) -> Decimal {
        self.bid
    }

    /// Get the ask premium.
    #[must_use]
    pub const fn ask(&self) -> Decimal {
        self.ask
    }

    /// Get the expiration date, if one was supplied.
    #[must_use]
    pub const fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expiration_date
    }

    /// Get the position side.
    #[must_use]
    pub const fn long_short(&self) -> PositionSide {
        self.long_short
    }

    /// Check if this is a call option.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.option_type, OptionType::Call)
    }

    /// Check if this is a put option.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.option_type, OptionType::Put)
    }

    /// Intrinsic value at expiration for the given underlying price.
    ///
    /// # Panics
    ///
    /// Panics on `Decimal` overflow. See [`Self::checked_intrinsic_value`].
    #[must_use]
    pub fn intrinsic_value(&self, underlying_price: Decimal) -> Decimal {
        let raw = match self.option_type {
            OptionType::Call => underlying_price - self.strike_price,
            OptionType::Put => self.strike_price - underlying_price,
        };
        raw.max(Decimal::ZERO)
    }

    /// Intrinsic value, or `None` if the difference overflows.
    #[must_use]
    pub fn checked_intrinsic_value(&self, underlying_price: Decimal) -> Option<Decimal> {
        let raw = match self.option_type {
            OptionType::Call => underlying_price.checked_sub(self.strike_price),
            OptionType::Put => self.strike_price.checked_sub(underlying_price),
        }?;
        Some(raw.max(Decimal::ZERO))
    }

    /// Profit or loss of this leg at expiration for the given underlying price.
    ///
    /// Long legs pay the ask to open; short legs collect the bid and owe the
    /// intrinsic value.
    ///
    /// # Panics
    ///
    /// Panics on `Decimal` overflow. See [`Self::checked_profit_loss`].
    #[must_use]
    pub fn profit_loss(&self, underlying_price: Decimal) -> Decimal {
        let intrinsic = self.intrinsic_value(underlying_price);
        match self.long_short {
            PositionSide::Long => intrinsic - self.ask,
            PositionSide::Short => self.bid - intrinsic,
        }
    }

    /// Profit or loss, or `None` if any step overflows.
    #[must_use]
    pub fn checked_profit_loss(&self, underlying_price: Decimal) -> Option<Decimal> {
        let intrinsic = self.checked_intrinsic_value(underlying_price)?;
        match self.long_short {
            PositionSide::Long => intrinsic.checked_sub(self.ask),
            PositionSide::Short => self.bid.checked_sub(intrinsic),
        }
    }

    /// Underlying price at which this leg alone neither gains nor loses.
    ///
    /// # Panics
    ///
    /// Panics on `Decimal` overflow. See [`Self::checked_break_even`].
    #[must_use]
    pub fn break_even(&self) -> Decimal {
        let premium = self.opening_premium();
        match self.option_type {
            OptionType::Call => self.strike_price + premium,
            OptionType::Put => self.strike_price - premium,
        }
    }

    /// Break-even price, or `None` if it does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_break_even(&self) -> Option<Decimal> {
        let premium = self.opening_premium();
        match self.option_type {
            OptionType::Call => self.strike_price.checked_add(premium),
            OptionType::Put => self.strike_price.checked_sub(premium),
        }
    }

    const fn opening_premium(&self) -> Decimal {
        match self.long_short {
            PositionSide::Long => self.ask,
            PositionSide::Short => self.bid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn option_type_serde() {
        let json = serde_json::to_string(&OptionType::Call).unwrap();
        assert_eq!(json, "\"call\"");

        let parsed: OptionType = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(parsed, OptionType::Put);
    }

    #[test]
    fn position_side_display() {
        assert_eq!(PositionSide::Long.to_string(), "long");
        assert_eq!(PositionSide::Short.to_string(), "short");
        assert!(PositionSide::Long.is_long());
        assert!(PositionSide::Short.is_short());
    }

    #[test]
    fn call_intrinsic_value() {
        let call = OptionsContract::long_call(dec!(100), dec!(4), dec!(5));

        assert_eq!(call.intrinsic_value(dec!(90)), Decimal::ZERO);
        assert_eq!(call.intrinsic_value(dec!(100)), Decimal::ZERO);
        assert_eq!(call.intrinsic_value(dec!(112.5)), dec!(12.5));
    }

    #[test]
    fn put_intrinsic_value() {
        let put = OptionsContract::long_put(dec!(50), dec!(2), dec!(3));

        assert_eq!(put.intrinsic_value(dec!(60)), Decimal::ZERO);
        assert_eq!(put.intrinsic_value(dec!(42)), dec!(8));
    }

    #[test]
    fn long_call_profit_loss() {
        let call = OptionsContract::long_call(dec!(100), dec!(4), dec!(5));

        assert_eq!(call.profit_loss(dec!(80)), dec!(-5));
        assert_eq!(call.profit_loss(dec!(105)), Decimal::ZERO);
        assert_eq!(call.profit_loss(dec!(120)), dec!(15));
    }

    #[test]
    fn short_call_profit_loss() {
        let call = OptionsContract::short_call(dec!(100), dec!(4), dec!(5));

        assert_eq!(call.profit_loss(dec!(90)), dec!(4));
        assert_eq!(call.profit_loss(dec!(104)), Decimal::ZERO);
        assert_eq!(call.profit_loss(dec!(130)), dec!(-26));
    }

    #[test]
    fn long_put_profit_loss() {
        let put = OptionsContract::long_put(dec!(50), dec!(2), dec!(3));

        assert_eq!(put.profit_loss(dec!(60)), dec!(-3));
        assert_eq!(put.profit_loss(dec!(47)), Decimal::ZERO);
        assert_eq!(put.profit_loss(dec!(0)), dec!(47));
    }

    #[test]
    fn short_put_profit_loss() {
        let put = OptionsContract::short_put(dec!(50), dec!(2), dec!(3));

        assert_eq!(put.profit_loss(dec!(55)), dec!(2));
        assert_eq!(put.profit_loss(dec!(48)), Decimal::ZERO);
        assert_eq!(put.profit_loss(dec!(0)), dec!(-48));
    }

    #[test]
    fn break_even_per_side() {
        assert_eq!(
            OptionsContract::long_call(dec!(100), dec!(4), dec!(5)).break_even(),
            dec!(105)
        );
        assert_eq!(
            OptionsContract::short_call(dec!(100), dec!(4), dec!(5)).break_even(),
            dec!(104)
        );
        assert_eq!(
            OptionsContract::long_put(dec!(50), dec!(2), dec!(3)).break_even(),
            dec!(47)
        );
        assert_eq!(
            OptionsContract::short_put(dec!(50), dec!(2), dec!(3)).break_even(),
            dec!(48)
        );
    }

    #[test]
    fn checked_variants_match_plain_arithmetic() {
        let put = OptionsContract::short_put(dec!(50), dec!(2), dec!(3));

        assert_eq!(put.checked_intrinsic_value(dec!(42)), Some(dec!(8)));
        assert_eq!(put.checked_profit_loss(dec!(42)), Some(put.profit_loss(dec!(42))));
        assert_eq!(put.checked_break_even(), Some(dec!(48)));
    }

    #[test]
    fn checked_variants_report_overflow() {
        let call = OptionsContract::long_call(Decimal::MAX, dec!(0), dec!(1));

        assert_eq!(call.checked_break_even(), None);
        assert_eq!(call.checked_intrinsic_value(dec!(1)), Some(Decimal::ZERO));
        assert_eq!(call.checked_intrinsic_value(Decimal::MIN), None);
        let put = OptionsContract::long_put(Decimal::MAX, dec!(0), dec!(1));
        assert_eq!(put.checked_intrinsic_value(dec!(-1)), None);
    }

    #[test]
    fn expiration_does_not_affect_payoff() {
        let expiry = Utc.with_ymd_and_hms(2025, 1, 17, 21, 0, 0).unwrap();
        let plain = OptionsContract::long_call(dec!(100), dec!(4), dec!(5));
        let dated = plain.clone().with_expiration(expiry);

        assert_eq!(dated.expiration_date(), Some(expiry));
        assert_eq!(plain.profit_loss(dec!(117)), dated.profit_loss(dec!(117)));
        assert_eq!(plain.break_even(), dated.break_even());
    }

    #[test]
    fn contract_serde_uses_wire_names() {
        let json = r#"{
            "type": "call",
            "strike_price": 100,
            "bid": "4",
            "ask": 5.25,
            "expiration_date": "2025-01-17T21:00:00Z",
            "long_short": "long"
        }"#;

        let contract: OptionsContract = serde_json::from_str(json).unwrap();
        assert!(contract.is_call());
        assert_eq!(contract.strike_price(), dec!(100));
        assert_eq!(contract.bid(), dec!(4));
        assert_eq!(contract.ask(), dec!(5.25));
        assert!(contract.expiration_date().is_some());
        assert_eq!(contract.long_short(), PositionSide::Long);
    }

    #[test]
    fn contract_expiration_is_optional() {
        let json = r#"{"type":"put","strike_price":50,"bid":2,"ask":3,"long_short":"short"}"#;

        let contract: OptionsContract = serde_json::from_str(json).unwrap();
        assert!(contract.is_put());
        assert!(contract.expiration_date().is_none());
    }
}
