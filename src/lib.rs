//! Pokecache - A thread-safe in-memory byte cache
//!
//! Stores opaque payloads under string keys and drops them after a fixed
//! interval via a background sweep.
//!
//! ```no_run
//! use std::time::Duration;
//! use pokecache::Cache;
//!
//! # #[tokio::main]
//! # async fn main() -> pokecache::error::Result<()> {
//! let cache = Cache::new(Duration::from_secs(5))?;
//! cache.add("https://pokeapi.co/api/v2/location-area/", b"{\"count\":1089}");
//!
//! if let Some(bytes) = cache.get("https://pokeapi.co/api/v2/location-area/") {
//!     println!("{} cached bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod shell;
pub mod tasks;

pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_reaper_task;
