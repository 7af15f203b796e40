//! Concurrent dispatcher.
//!
//! Fans out one task per domain, each probing record types in priority order
//! through a [`RecordLookup`], and fans the "found" verdicts back in over a
//! channel that is drained only after every task has been joined.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinError;

use crate::resolver::{RecordLookup, RecordType};

/// Probes `domain` for each record type in [`RecordType::PROBE_ORDER`].
///
/// Stops at the first type that has a record; later types are never queried.
pub async fn check_domain<L>(lookup: &L, domain: &str) -> bool
where
    L: RecordLookup + ?Sized,
{
    for record_type in RecordType::PROBE_ORDER {
        if lookup.query(domain, record_type).await {
            debug!("{domain} found via {record_type}");
            return true;
        }
    }
    false
}

/// Checks every domain concurrently and returns those with at least one record.
///
/// Each domain runs in its own `tokio` task. With a `limiter`, a permit is
/// acquired before a task is spawned, so at most `available_permits` domains are
/// in flight and the rest wait in input order; without one, all tasks start at
/// once.
///
/// Found domains are returned in input order, each exactly once. A task that
/// panics is logged and counts as "not found" for its own domain only.
/// `checked`, when given, is incremented as each task finishes.
pub async fn check_all<L>(
    lookup: Arc<L>,
    domains: Vec<String>,
    limiter: Option<Arc<Semaphore>>,
    checked: Option<Arc<AtomicUsize>>,
) -> Vec<String>
where
    L: RecordLookup + ?Sized + 'static,
{
    let (found_tx, mut found_rx) = mpsc::unbounded_channel::<(usize, String)>();
    let mut tasks = FuturesUnordered::new();

    for (index, domain) in domains.into_iter().enumerate() {
        let permit = match limiter.as_ref() {
            // Reap finished tasks while waiting so progress and panics surface promptly
            Some(semaphore) => loop {
                tokio::select! {
                    acquired = Arc::clone(semaphore).acquire_owned() => break acquired.map(Some),
                    Some(task_result) = tasks.next(), if !tasks.is_empty() => {
                        record_finished(task_result, checked.as_deref());
                    }
                }
            },
            None => Ok(None),
        };
        let permit = match permit {
            Ok(permit) => permit,
            // Unreachable while the caller keeps the limiter open; nothing here closes it
            Err(_) => {
                warn!("Semaphore closed, skipping domain: {domain}");
                continue;
            }
        };

        let lookup = Arc::clone(&lookup);
        let found_tx = found_tx.clone();
        tasks.push(tokio::spawn(async move {
            let _permit = permit;
            let found = check_domain(lookup.as_ref(), &domain).await;
            if found && found_tx.send((index, domain)).is_err() {
                warn!("Result channel closed before all domains were checked");
            }
        }));
    }

    // Only task-held senders remain, so the channel closes once every task is done
    drop(found_tx);

    while let Some(task_result) = tasks.next().await {
        record_finished(task_result, checked.as_deref());
    }

    let mut found = Vec::new();
    while let Some(entry) = found_rx.recv().await {
        found.push(entry);
    }
    found.sort_unstable_by_key(|(index, _)| *index);
    found.into_iter().map(|(_, domain)| domain).collect()
}

fn record_finished(task_result: Result<(), JoinError>, checked: Option<&AtomicUsize>) {
    if let Err(join_error) = task_result {
        warn!("Domain task panicked: {:?}", join_error);
    }
    if let Some(checked) = checked {
        checked.fetch_add(1, Ordering::SeqCst);
    }
}
