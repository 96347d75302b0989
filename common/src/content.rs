use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix under which every content endpoint is mounted.
pub const API_PREFIX: &str = "/api";

/// One readable content collection.
///
/// Each variant maps to exactly one `GET` endpoint. The backend registers a
/// route per variant and the browser app requests them by variant, so the two
/// sides cannot drift apart on paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Singleton `BrandOverview` document.
    BrandOverview,
    ResearchInsights,
    BrandColors,
    Typography,
    MarketingCollateral,
    ImpactMetrics,
    Testimonials,
}

impl Collection {
    /// Every collection, in the order the API documents them.
    pub const ALL: [Collection; 7] = [
        Collection::BrandOverview,
        Collection::ResearchInsights,
        Collection::BrandColors,
        Collection::Typography,
        Collection::MarketingCollateral,
        Collection::ImpactMetrics,
        Collection::Testimonials,
    ];

    /// Endpoint segment relative to `API_PREFIX`, without a leading slash.
    pub const fn path(self) -> &'static str {
        match self {
            Collection::BrandOverview => "brand-overview",
            Collection::ResearchInsights => "research-insights",
            Collection::BrandColors => "brand-colors",
            Collection::Typography => "typography",
            Collection::MarketingCollateral => "marketing-collateral",
            Collection::ImpactMetrics => "impact-metrics",
            Collection::Testimonials => "testimonials",
        }
    }

    /// Inverse of `path`.
    pub fn from_path(path: &str) -> Option<Collection> {
        Collection::ALL.into_iter().find(|c| c.path() == path)
    }

    /// Absolute endpoint path, e.g. `/api/impact-metrics`.
    pub fn endpoint(self) -> String {
        format!("{}/{}", API_PREFIX, self.path())
    }

    /// Whether the endpoint returns a sequence rather than a single document.
    pub const fn is_sequence(self) -> bool {
        !matches!(self, Collection::BrandOverview)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
