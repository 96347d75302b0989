use serde::{Deserialize, Serialize};

/// A piece of marketing collateral produced for the launch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingCollateralItem {
    #[serde(default)]
    pub id: String,
    /// Collateral type, e.g. `packaging`, `social`, `print`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}
