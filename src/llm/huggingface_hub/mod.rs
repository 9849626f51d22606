pub mod client;
pub mod models;

pub use client::HuggingFaceHub;
pub use models::HuggingFaceTask;
