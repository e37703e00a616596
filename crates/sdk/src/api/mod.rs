//! API endpoint groups.

mod collections;
mod raindrops;

pub use collections::CollectionsApi;
pub use raindrops::RaindropsApi;
