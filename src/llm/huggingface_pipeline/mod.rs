pub mod client;

pub use client::HuggingFacePipeline;
