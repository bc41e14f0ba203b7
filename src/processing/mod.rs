//! Resume scoring pipeline

pub mod analyzer;
pub mod classifier;
pub mod features;
pub mod industry;
pub mod section_scorer;
pub mod taxonomy;
pub mod text_processor;

