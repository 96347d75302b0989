use serde::{Deserialize, Deserializer, Serialize};

/// The singleton document describing the brand and the rebrand's premise.
///
/// Served by `GET /api/brand-overview` and read by the Home and Challenge
/// pages. `industry`, `founded` and `locations` are optional extras: older
/// content files omit them and the pages fall back to fixed copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandOverview {
    pub brand_name: String,
    /// Case study year. Content files write it either as `"2024"` or `2024`.
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    pub challenge: String,
    pub solution: String,
    pub old_tagline: String,
    pub new_tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn year_accepts_a_number() {
        let overview: BrandOverview = serde_json::from_str(
            r#"{"brand_name":"Vintage Brew","year":2024,"old_tagline":"A","new_tagline":"B","challenge":"C","solution":"D"}"#,
        )
        .unwrap();
        assert_eq!(overview.year, "2024");
        assert_eq!(overview.old_tagline, "A");
        assert_eq!(overview.new_tagline, "B");
        assert_eq!(overview.founded, None);
    }

    #[test]
    fn year_accepts_a_string_and_extras_are_kept() {
        let overview: BrandOverview = serde_json::from_str(
            r#"{"brand_name":"Vintage Brew","industry":"Coffee","year":"2024","founded":"1983",
                "locations":"47 locations","old_tagline":"A","new_tagline":"B","challenge":"C","solution":"D"}"#,
        )
        .unwrap();
        assert_eq!(overview.year, "2024");
        assert_eq!(overview.industry.as_deref(), Some("Coffee"));
        assert_eq!(overview.founded.as_deref(), Some("1983"));
    }

    #[test]
    fn absent_extras_are_not_serialized() {
        let overview = BrandOverview {
            brand_name: "Vintage Brew".to_string(),
            year: "2024".to_string(),
            ..BrandOverview::default()
        };
        let json = serde_json::to_value(&overview).unwrap();
        assert!(json.get("industry").is_none());
        assert_eq!(json["year"], "2024");
    }

    #[test]
    fn year_rejects_other_shapes() {
        let result: Result<BrandOverview, _> = serde_json::from_str(
            r#"{"brand_name":"X","year":[2024],"old_tagline":"A","new_tagline":"B","challenge":"C","solution":"D"}"#,
        );
        assert!(result.is_err());
    }
}
