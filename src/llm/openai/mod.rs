pub mod client;

pub use client::OpenAI;
