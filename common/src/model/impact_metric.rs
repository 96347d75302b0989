use serde::{Deserialize, Serialize};

/// A before/after measurement of the rebrand's effect.
///
/// Values are display strings (`"18%"`, `"$6.20"`, `"-12% YoY"`), never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetric {
    #[serde(default)]
    pub id: String,
    pub metric_name: String,
    pub before_value: String,
    pub after_value: String,
    pub improvement: String,
}
