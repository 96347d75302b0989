use serde::{Deserialize, Serialize};

/// A typeface and the role it plays in the identity system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyEntry {
    #[serde(default)]
    pub id: String,
    /// Role: `heading`, `body`, `accent`.
    #[serde(rename = "type")]
    pub kind: String,
    pub font_family: String,
    pub usage: String,
    /// Weights in display order, e.g. `["Regular (400)", "Bold (700)"]`.
    #[serde(default)]
    pub weights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn weights_keep_their_order() {
        let entry: TypographyEntry = serde_json::from_str(
            r#"{"id":"1","type":"heading","font_family":"Playfair Display","usage":"Headlines",
                "weights":["Bold (700)","Regular (400)","SemiBold (600)"]}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, "heading");
        assert_eq!(
            entry.weights,
            vec!["Bold (700)", "Regular (400)", "SemiBold (600)"]
        );
    }
}
