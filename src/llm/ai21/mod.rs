pub mod client;
pub mod models;

pub use client::AI21;
pub use models::AI21PenaltyData;
