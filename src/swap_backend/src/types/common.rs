use candid::CandidType;
use serde::{Deserialize, Serialize};

/// Fee schedule as the UI consumes it
#[derive(CandidType, Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FeeInfo {
    /// Proportional fee as a fraction ("0.003" = 0.3%)
    pub fee_percent: String,
    pub fixed_commission: String,
}

/// Static configuration snapshot for the health endpoint
#[derive(CandidType, Deserialize, Serialize, Debug, Clone)]
pub struct HealthStatus {
    pub version: String,
    pub fee_percent: String,
    pub fixed_commission: String,
    pub display_decimals: u32,
}
