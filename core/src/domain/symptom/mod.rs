pub mod extractor;
pub mod rules;
