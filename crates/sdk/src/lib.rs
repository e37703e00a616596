//! # Raindrop SDK
//!
//! Async Rust client for the [Raindrop.io](https://raindrop.io) REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use raindrop_sdk::{NewBookmark, RaindropClient, RaindropResult, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> RaindropResult<()> {
//!     let client = RaindropClient::builder()
//!         .token("your-test-token")
//!         .build()?;
//!
//!     // Save a link to the Unsorted collection
//!     let created = client
//!         .raindrops()
//!         .create(&NewBookmark::new("https://www.rust-lang.org"))
//!         .await?;
//!     println!("Saved {}", created.item.link);
//!
//!     // Search across all collections
//!     let found = client
//!         .raindrops()
//!         .search(0, &SearchQuery::new("rust"))
//!         .await?;
//!     println!("Found {} bookmarks", found.count);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main client
pub use client::{RaindropClient, RaindropClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{RaindropError, RaindropResult};

pub use types::{
    Bookmark, Collection, CollectionRef, CollectionsResponse, CreateBookmarkResponse,
    NewBookmark, SearchQuery, SearchResponse, SortOrder,
};
