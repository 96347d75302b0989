pub mod data_bound;
pub mod navigation;
pub mod sections;
