use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub quote: String,
    /// Portrait URL.
    pub image: String,
}
