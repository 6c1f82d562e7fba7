pub mod catalog;
pub mod exercise;
pub mod learning_path;
pub mod quiz;
pub mod recommendation;
