pub mod quotes;
pub mod resolver;

pub use quotes::{QuoteFetcher, QUOTE_CURRENCIES};
pub use resolver::IdentifierResolver;
