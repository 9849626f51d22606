pub mod client;

pub use client::Cohere;
