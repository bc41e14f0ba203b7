//! Document input: file type detection and text extraction for the CLI

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
