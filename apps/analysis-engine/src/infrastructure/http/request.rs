//! HTTP request DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::{AnalysisError, OptionType, OptionsContract, PositionSide};

/// One contract as posted to `/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRequest {
    /// Call or put.
    #[serde(rename = "type")]
    pub option_type: OptionType,
    /// Strike price.
    pub strike_price: Decimal,
    /// Bid premium.
    pub bid: Decimal,
    /// Ask premium.
    pub ask: Decimal,
    /// Expiration timestamp (RFC 3339).
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    /// Long or short.
    pub long_short: PositionSide,
}

impl ContractRequest {
    /// Validate and convert into a domain contract.
    ///
    /// `index` is the position in the request body, used in error messages.
    pub fn into_contract(self, index: usize) -> Result<OptionsContract, AnalysisError> {
        let invalid = |message: String| AnalysisError::InvalidContract { index, message };

        if self.strike_price <= Decimal::ZERO {
            return Err(invalid(format!(
                "strike_price must be positive, got {}",
                self.strike_price
            )));
        }
        if self.bid < Decimal::ZERO {
            return Err(invalid(format!("bid must not be negative, got {}", self.bid)));
        }
        if self.ask < Decimal::ZERO {
            return Err(invalid(format!("ask must not be negative, got {}", self.ask)));
        }

        let contract = OptionsContract::new(
            self.option_type,
            self.strike_price,
            self.bid,
            self.ask,
            self.long_short,
        );
        Ok(match self.expiration_date {
            Some(expiration) => contract.with_expiration(expiration),
            None => contract,
        })
    }
}

/// Validate every contract in a request body, stopping at the first failure.
pub fn contracts_from_requests(
    requests: Vec<ContractRequest>,
) -> Result<Vec<OptionsContract>, AnalysisError> {
    requests
        .into_iter()
        .enumerate()
        .map(|(index, request)| request.into_contract(index))
        .collect()
}
