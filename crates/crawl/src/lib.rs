mod crawl;
pub mod error;
pub mod provider;

pub use crate::crawl::{Batch, Clock, Crawler, DEFAULT_WORKERS};
pub use crate::provider::{DocumentProvider, Page};
use std::sync::Arc;

pub type ProviderHandle = Arc<dyn DocumentProvider + Send + Sync>;
