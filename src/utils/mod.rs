pub mod markdown;
pub mod validation;
