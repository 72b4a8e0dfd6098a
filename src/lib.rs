pub mod api;
pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod services;
pub mod telegram;
pub mod validation;
pub mod web;

pub use bot::{PriceBot, HELP_TEXT, INVALID_QUERY_MESSAGE};
pub use error::{Error, Result};

// Declare tests module only when testing
#[cfg(test)]
pub mod tests;
