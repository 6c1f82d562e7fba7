use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Recommendation {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(custom(function = "crate::utils::validation::validate_http_url"))]
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecommendationsResult {
    #[validate(nested)]
    pub udemy: Vec<Recommendation>,
    #[validate(nested)]
    pub youtube: Vec<Recommendation>,
    #[serde(default)]
    #[validate(nested)]
    pub percipio: Vec<Recommendation>,
}

impl RecommendationsResult {
    pub fn len(&self) -> usize {
        self.udemy.len() + self.youtube.len() + self.percipio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
