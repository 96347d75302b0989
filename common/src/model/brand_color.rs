use serde::{Deserialize, Serialize};

/// A palette entry of the new identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// CSS color, e.g. `#3E2723`.
    pub hex_code: String,
    /// Role in the palette: `primary`, `accent`, `background`, `text`.
    #[serde(rename = "type")]
    pub kind: String,
    pub usage: String,
}
