//! Seed selection
//!
//! Picks one movie and one series from the catalog's top lists to use as
//! realistic lookups against the addon under test.

use crate::catalog::{CatalogError, CatalogItem, CatalogProvider, ContentKind};
use crate::timed_call::{TimedResult, timed};
use rand::Rng;
use std::thread;

/// The content used for one check: a movie and a series
#[derive(Debug, Clone, PartialEq)]
pub struct SeedPair {
    pub movie: CatalogItem,
    pub series: CatalogItem,
}

/// Fetches both top lists concurrently and draws one entry from each
///
/// Fails with [`CatalogError::EmptyCatalog`] when either list comes back
/// empty. The returned result carries the combined elapsed time.
pub fn select_seeds<P, R>(provider: &P, rng: &mut R) -> TimedResult<SeedPair>
where
    P: CatalogProvider + ?Sized,
    R: Rng,
{
    timed(|| {
        let (movies, series) = fetch_both(provider);
        let movies = non_empty(movies?, ContentKind::Movie)?;
        let series = non_empty(series?, ContentKind::Series)?;

        Ok::<_, CatalogError>(SeedPair {
            movie: pick(movies, rng),
            series: pick(series, rng),
        })
    })
}

type CatalogResult = Result<Vec<CatalogItem>, CatalogError>;

/// Runs the movie and series catalog fetches on two scoped threads
fn fetch_both<P>(provider: &P) -> (CatalogResult, CatalogResult)
where
    P: CatalogProvider + ?Sized,
{
    thread::scope(|scope| {
        let movies = scope.spawn(|| provider.fetch_top(ContentKind::Movie));
        let series = scope.spawn(|| provider.fetch_top(ContentKind::Series));
        (join_fetch(movies), join_fetch(series))
    })
}

fn join_fetch(handle: thread::ScopedJoinHandle<'_, CatalogResult>) -> CatalogResult {
    handle.join().unwrap_or_else(|_| {
        Err(CatalogError::RequestError(
            "catalog fetch panicked".to_string(),
        ))
    })
}

fn non_empty(items: Vec<CatalogItem>, kind: ContentKind) -> CatalogResult {
    if items.is_empty() {
        Err(CatalogError::EmptyCatalog(kind))
    } else {
        Ok(items)
    }
}

/// Uniform draw; `items` is non-empty.
fn pick<R: Rng>(mut items: Vec<CatalogItem>, rng: &mut R) -> CatalogItem {
    let index = rng.gen_range(0..items.len());
    items.swap_remove(index)
}
