//! The upstream-catalog boundary.

use async_trait::async_trait;
use reelquery_model::{CatalogPage, CatalogRequest};

use crate::error::CoreError;

mod tmdb;

pub use tmdb::{TmdbGateway, DEFAULT_TMDB_BASE};

/// Performs one authenticated read against the upstream catalog.
///
/// The gateway owns credentials, timeouts, and retry policy; callers see a
/// single blocking call that either yields a page or fails the request.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch(
        &self,
        request: &CatalogRequest,
    ) -> Result<CatalogPage, CoreError>;
}
