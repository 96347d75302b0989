use serde::{Deserialize, Serialize};

/// One finding from the research phase, shown as a card on the Research page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchInsight {
    #[serde(default)]
    pub id: String,
    /// Free-form category label; the page maps it to an icon.
    pub category: String,
    pub title: String,
    pub description: String,
    /// Headline figure, e.g. `"18% under 35"`.
    pub metric: String,
}
