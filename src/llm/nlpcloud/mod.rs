pub mod client;

pub use client::NLPCloud;
