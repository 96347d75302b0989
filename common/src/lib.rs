//! Types shared by the case study backend and the browser app.
//!
//! - `model`: the read-only content documents served under `/api`.
//! - `content`: the fixed table of collections and their endpoint paths.

pub mod content;
pub mod model;
