//! Parallel exhaustive nearest-neighbour search.

use std::cmp::Ordering;

use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::cost::CostModel;
use crate::error::{LexdistError, Result};
use crate::levenshtein::distance;
use crate::search::config::SearchConfig;
use crate::search::topk::BoundedTopK;
use crate::symbol::Symbol;

/// A lexicon entry together with its distance from the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a, S> {
    pub distance: f32,
    pub entry: &'a [S],
}

fn by_distance<S>(a: &Neighbor<'_, S>, b: &Neighbor<'_, S>) -> Ordering {
    a.distance.total_cmp(&b.distance)
}

/// Finds the lexicon entries closest to a query.
///
/// The lexicon and cost model are borrowed read-only and shared by all
/// workers. Each query sweeps the whole lexicon on a dedicated thread pool;
/// the only shared mutable state is the per-query top-k sink, which is
/// guarded by a mutex.
///
/// Among entries at equal distance, which ones are kept depends on the order
/// in which workers reach the sink and is not deterministic. The set of
/// returned distances is.
pub struct NearestNeighborSearch<'a, S: Symbol> {
    lexicon: &'a [Vec<S>],
    costs: &'a CostModel<S>,
    config: SearchConfig,
    thread_pool: ThreadPool,
}

impl<'a, S: Symbol> NearestNeighborSearch<'a, S> {
    /// Create a search over `lexicon` scored with `costs`.
    pub fn new(lexicon: &'a [Vec<S>], costs: &'a CostModel<S>, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let thread_pool_size = config.effective_threads();

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("nearest-search-{i}"))
            .build()
            .map_err(|e| LexdistError::thread_pool(format!("Failed to create thread pool: {e}")))?;
        info!("Using {thread_pool_size} threads.");

        Ok(Self {
            lexicon,
            costs,
            config,
            thread_pool,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of entries in the lexicon.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Return up to `k` entries nearest to `query`, ascending by distance.
    pub fn find_closest(&self, query: &[S]) -> Vec<Neighbor<'a, S>> {
        let lexicon: &'a [Vec<S>] = self.lexicon;
        let costs = self.costs;
        let max_length_diff = self.config.max_length_diff;
        let sink = Mutex::new(BoundedTopK::with_comparator(
            self.config.k,
            by_distance::<S> as fn(&Neighbor<'a, S>, &Neighbor<'a, S>) -> Ordering,
        ));

        self.thread_pool.install(|| {
            lexicon
                .par_iter()
                .filter(|entry| within_length_bound(entry, query, max_length_diff))
                .for_each(|entry| {
                    let distance = distance(entry, query, costs);
                    sink.lock().push(Neighbor {
                        distance,
                        entry: entry.as_slice(),
                    });
                });
        });

        let closest = sink.into_inner().into_sorted_vec();
        debug!(
            "query of length {} matched {} neighbours",
            query.len(),
            closest.len()
        );
        closest
    }

    /// Run [`find_closest`](Self::find_closest) for each query in turn.
    pub fn find_closest_many(&self, queries: &[Vec<S>]) -> Vec<Vec<Neighbor<'a, S>>> {
        queries.iter().map(|query| self.find_closest(query)).collect()
    }
}

fn within_length_bound<S>(entry: &[S], query: &[S], max_length_diff: Option<usize>) -> bool {
    match max_length_diff {
        Some(max) => entry.len().abs_diff(query.len()) <= max,
        None => true,
    }
}

/// Find the `config.k` lexicon entries nearest to `query`.
///
/// Convenience wrapper that builds a [`NearestNeighborSearch`] for a single
/// query.
pub fn find_closest<'a, S: Symbol>(
    query: &[S],
    lexicon: &'a [Vec<S>],
    config: SearchConfig,
    costs: &'a CostModel<S>,
) -> Result<Vec<Neighbor<'a, S>>> {
    let search = NearestNeighborSearch::new(lexicon, costs, config)?;
    Ok(search.find_closest(query))
}
