//! Content documents served by the case study API.
//!
//! Every type here is a read-only snapshot owned by the backend. The browser
//! keeps a copy for the lifetime of one page visit and never writes back.

pub mod brand_color;
pub mod brand_overview;
pub mod case_study;
pub mod impact_metric;
pub mod marketing_collateral;
pub mod research_insight;
pub mod testimonial;
pub mod typography;

pub use brand_color::BrandColor;
pub use brand_overview::BrandOverview;
pub use case_study::CaseStudy;
pub use impact_metric::ImpactMetric;
pub use marketing_collateral::MarketingCollateralItem;
pub use research_insight::ResearchInsight;
pub use testimonial::Testimonial;
pub use typography::TypographyEntry;
