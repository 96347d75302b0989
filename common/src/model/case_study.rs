use serde::{Deserialize, Serialize};

use super::{
    BrandColor, BrandOverview, ImpactMetric, MarketingCollateralItem, ResearchInsight, Testimonial,
    TypographyEntry,
};

/// Every document of the case study in one file.
///
/// This is the backend's seed format. Each field is published as-is by one
/// `/api` endpoint; sequences keep the order they have in the file. A missing
/// collection is served as an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub brand_overview: BrandOverview,
    #[serde(default)]
    pub research_insights: Vec<ResearchInsight>,
    #[serde(default)]
    pub brand_colors: Vec<BrandColor>,
    #[serde(default)]
    pub typography: Vec<TypographyEntry>,
    #[serde(default)]
    pub marketing_collateral: Vec<MarketingCollateralItem>,
    #[serde(default)]
    pub impact_metrics: Vec<ImpactMetric>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OVERVIEW: &str = r#""brand_overview":{"brand_name":"Vintage Brew","year":"2024",
        "old_tagline":"A","new_tagline":"B","challenge":"C","solution":"D"}"#;

    #[test]
    fn missing_collections_default_to_empty() {
        let study: CaseStudy = serde_json::from_str(&format!("{{{OVERVIEW}}}")).unwrap();
        assert_eq!(study.brand_overview.brand_name, "Vintage Brew");
        assert!(study.research_insights.is_empty());
        assert!(study.testimonials.is_empty());
    }

    #[test]
    fn ids_are_not_validated() {
        let json = format!(
            r#"{{{OVERVIEW},"impact_metrics":[
                {{"metric_name":"No id","before_value":"1","after_value":"2","improvement":"+1"}},
                {{"id":"dup","metric_name":"First","before_value":"1","after_value":"2","improvement":"+1"}},
                {{"id":"dup","metric_name":"Second","before_value":"1","after_value":"2","improvement":"+1"}}
            ]}}"#
        );
        let study: CaseStudy = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = study
            .impact_metrics
            .iter()
            .map(|m| m.metric_name.as_str())
            .collect();
        assert_eq!(names, vec!["No id", "First", "Second"]);
        assert_eq!(study.impact_metrics[0].id, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = format!(
            r##"{{{OVERVIEW},"brand_colors":[{{"id":"1","name":"Heritage Espresso","hex_code":"#3E2723",
                "type":"primary","usage":"Headlines","pantone":"4625 C"}}]}}"##
        );
        let study: CaseStudy = serde_json::from_str(&json).unwrap();
        assert_eq!(study.brand_colors[0].kind, "primary");
    }
}
