pub mod auction;
pub mod bidding;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod service;
