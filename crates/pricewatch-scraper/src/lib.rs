pub mod batch;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod outcome;
pub mod retailer;
pub mod scrape;

pub use batch::scrape_batch;
pub use error::ScrapeError;
pub use fetch::{FetchClient, FetchMode};
pub use outcome::ScrapeOutcome;
pub use retailer::classify_retailer;
pub use scrape::PageScraper;
