//! Analysis Value Objects

mod analysis_result;
mod option_contract;
mod price_range;
mod profit_bound;
mod sampling_policy;
mod xy_value;

pub use analysis_result::AnalysisResult;
pub use option_contract::{OptionType, OptionsContract, PositionSide};
pub use price_range::PriceRange;
pub use profit_bound::ProfitBound;
pub use sampling_policy::{
    DEFAULT_MAX_POINTS, DEFAULT_PRICE_MARGIN, DEFAULT_PRICE_STEP, SamplingPolicy,
};
pub use xy_value::XYValue;
