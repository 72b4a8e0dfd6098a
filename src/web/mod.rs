pub mod server;

pub use server::{routes, serve_metrics};
