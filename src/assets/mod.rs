//! Asset retrieval and in-memory pools
//!
//! Sounds and effect images are discovered the same way: a fetcher resolves
//! locations to bytes, discovery decides which locations to try (probing or an
//! explicit manifest), and every decoded asset lands in a per-category pool.

pub mod discovery;
pub mod fetcher;
pub mod pool;

pub use discovery::{load_manifest, probe_category};
pub use fetcher::{AssetFetcher, DirFetcher, HttpFetcher};
pub use pool::{AssetPool, CategoryPools};
