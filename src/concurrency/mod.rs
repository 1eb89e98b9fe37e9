//! Bounded concurrent fan-out, the only concurrency primitive the decision
//! core needs beyond the session store. Used by the causal reasoner and the
//! explanation layer: many independent per-candidate requests to a slow
//! external service, capped by a worker pool, reassembled by original index
//! so completion order never affects the final ranking.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

/// Run `f(item)` for every item in `items`, at most `limit` concurrently,
/// each bounded by `deadline`. Results are returned in the same order as
/// `items`; a timed-out or failed call yields `None` at that index.
pub async fn fan_out<T, F, Fut, R>(items: Vec<T>, limit: usize, deadline: Duration, f: F) -> Vec<Option<R>>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Option<R>> + Send,
    R: Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let f = Arc::new(f);

    let mut futs = FuturesUnordered::new();
    for (idx, item) in items.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let f = Arc::clone(&f);
        futs.push(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore never closed");
            let result = tokio::time::timeout(deadline, f(item)).await.ok().flatten();
            (idx, result)
        });
    }

    let mut out: Vec<Option<R>> = Vec::new();
    out.resize_with(futs.len(), || None);
    while let Some((idx, result)) = futs.next().await {
        out[idx] = result;
    }
    out
}

/// Fraction of `results` that are `Some`, used by the request-level
/// cancellation rule: a majority of completed fan-out results is enough to
/// proceed, with the rest falling back.
pub fn completion_ratio<R>(results: &[Option<R>]) -> f64 {
    if results.is_empty() {
        return 1.0;
    }
    let complete = results.iter().filter(|r| r.is_some()).count();
    complete as f64 / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preserves_original_order() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let results = fan_out(items.clone(), 4, Duration::from_millis(500), |n| async move {
            Some(n * 2)
        })
        .await;
        let expected: Vec<Option<i32>> = items.iter().map(|n| Some(n * 2)).collect();
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn timeout_yields_none_at_that_index() {
        let items = vec![0, 1, 2];
        let results = fan_out(items, 4, Duration::from_millis(20), |n| async move {
            if n == 1 {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Some(n)
        })
        .await;
        assert_eq!(results, vec![Some(0), None, Some(2)]);
    }

    #[test]
    fn completion_ratio_of_empty_is_full() {
        let results: Vec<Option<i32>> = vec![];
        assert_eq!(completion_ratio(&results), 1.0);
    }

    #[test]
    fn completion_ratio_counts_some() {
        let results = vec![Some(1), None, Some(3), None];
        assert_eq!(completion_ratio(&results), 0.5);
    }
}
