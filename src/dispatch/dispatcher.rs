use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::core::constants::error_messages;
use crate::core::types::{ProbeResult, Strategy};
use crate::logging;
use crate::probe::Probe;

/// Drives a [`Probe`] over a list of targets.
///
/// Every dispatched target yields exactly one result, whether the probe
/// succeeds, fails or panics.
pub struct Dispatcher<P> {
    prober: Arc<P>,
}

impl<P: Probe + 'static> Dispatcher<P> {
    pub fn new(prober: P) -> Self {
        Self {
            prober: Arc::new(prober),
        }
    }

    pub fn from_arc(prober: Arc<P>) -> Self {
        Self { prober }
    }

    /// Probe every target with the given strategy.
    ///
    /// Sequential runs return results in input order. Concurrent runs return
    /// them in completion order.
    pub async fn run(&self, targets: &[String], strategy: Strategy) -> Vec<ProbeResult> {
        if targets.is_empty() {
            return Vec::new();
        }

        logging::log_dispatch_start(strategy, targets.len());
        let start = Instant::now();

        let results = match strategy {
            Strategy::Sequential => self.run_sequential(targets).await,
            Strategy::Concurrent => self.run_concurrent(targets).await,
        };

        logging::log_dispatch_complete(strategy, &results, start.elapsed().as_millis());
        results
    }

    /// Like [`Dispatcher::run`], also returning the wall-clock time of the run.
    pub async fn run_timed(
        &self,
        targets: &[String],
        strategy: Strategy,
    ) -> (Vec<ProbeResult>, Duration) {
        let start = Instant::now();
        let results = self.run(targets, strategy).await;
        (results, start.elapsed())
    }

    async fn run_sequential(&self, targets: &[String]) -> Vec<ProbeResult> {
        let mut results = Vec::with_capacity(targets.len());

        for url in targets {
            let result = probe_guarded(self.prober.as_ref(), url.clone()).await;
            logging::log_probe_result(&result);
            results.push(result);
        }

        results
    }

    async fn run_concurrent(&self, targets: &[String]) -> Vec<ProbeResult> {
        let expected = targets.len();
        let (tx, mut rx) = mpsc::channel::<ProbeResult>(1);

        for url in targets {
            let tx = tx.clone();
            let prober = Arc::clone(&self.prober);
            let url = url.clone();

            tokio::spawn(async move {
                let result = probe_guarded(prober.as_ref(), url).await;
                // Only fails once the receiving dispatcher is gone
                let _ = tx.send(result).await;
            });
        }

        // recv() must see None once every task has dropped its sender
        drop(tx);

        let mut results = Vec::with_capacity(expected);
        for _ in 0..expected {
            match rx.recv().await {
                Some(result) => {
                    logging::log_probe_result(&result);
                    results.push(result);
                }
                None => break,
            }
        }

        if results.len() < expected {
            logging::log_collection_shortfall(results.len(), expected);
        }

        results
    }
}

/// Run one probe, turning a panic into a synthetic unreachable result.
async fn probe_guarded<P: Probe + ?Sized>(prober: &P, url: String) -> ProbeResult {
    let start = Instant::now();
    let outcome = AssertUnwindSafe(prober.probe(&url)).catch_unwind().await;

    match outcome {
        Ok(result) => result,
        Err(_) => {
            logging::log_probe_panic(&url);
            ProbeResult::down(url, start.elapsed(), error_messages::PROBE_TASK_PANICKED)
        }
    }
}
