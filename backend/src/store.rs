//! Read-only content store backing the `/api` endpoints.
//!
//! The store is built once at startup from a `CaseStudy` document, either the
//! seed compiled into the binary or a JSON file named by `CONTENT_PATH`. Each
//! collection is serialized up front, so handlers only clone a ready
//! `serde_json::Value`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use common::content::Collection;
use common::model::CaseStudy;
use serde_json::Value;
use thiserror::Error;

static SEED: &str = include_str!("../content/case_study.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content file {origin} is not a valid case study: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Case study content keyed by collection.
#[derive(Debug, Clone)]
pub struct ContentStore {
    documents: HashMap<Collection, Value>,
}

impl ContentStore {
    /// Builds the store from the seed content compiled into the binary.
    pub fn embedded() -> Result<Self, StoreError> {
        Self::from_json("embedded seed", SEED)
    }

    /// Loads `path` when given, the embedded seed otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, StoreError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&path.display().to_string(), &raw)
            }
            None => Self::embedded(),
        }
    }

    fn from_json(origin: &str, raw: &str) -> Result<Self, StoreError> {
        let study: CaseStudy = serde_json::from_str(raw).map_err(|source| StoreError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self::from_case_study(&study))
    }

    pub fn from_case_study(study: &CaseStudy) -> Self {
        let documents = Collection::ALL
            .into_iter()
            .map(|collection| (collection, project(study, collection)))
            .collect();
        Self { documents }
    }

    /// The published document for `collection`.
    pub fn document(&self, collection: Collection) -> Value {
        self.documents
            .get(&collection)
            .cloned()
            .unwrap_or(Value::Null)
    }
}

fn project(study: &CaseStudy, collection: Collection) -> Value {
    let value = match collection {
        Collection::BrandOverview => serde_json::to_value(&study.brand_overview),
        Collection::ResearchInsights => serde_json::to_value(&study.research_insights),
        Collection::BrandColors => serde_json::to_value(&study.brand_colors),
        Collection::Typography => serde_json::to_value(&study.typography),
        Collection::MarketingCollateral => serde_json::to_value(&study.marketing_collateral),
        Collection::ImpactMetrics => serde_json::to_value(&study.impact_metrics),
        Collection::Testimonials => serde_json::to_value(&study.testimonials),
    };
    // Plain structs of strings always serialize.
    value.unwrap_or(Value::Null)
}
