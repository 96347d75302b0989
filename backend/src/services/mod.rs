pub mod content;
pub mod site;
