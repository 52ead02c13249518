// Copyright 2024 The Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! A minimal fixed-size worker pool for submitting boxed closures from
//! other crates (`net`'s socket service hands accepted connections here).

#![deny(missing_docs)]

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use status::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Worker {
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    fn new(id: usize, jobs: Arc<Mutex<Receiver<Job>>>) -> Self {
        let handle = thread::Builder::new()
            .name(std::format!("task-worker-{id}"))
            .spawn(move || loop {
                let job = { jobs.lock().expect("worker mutex poisoned").recv() };
                match job {
                    Ok(job) => job(),
                    Err(_) => break,
                }
            })
            .expect("failed to spawn worker thread");

        Self { handle: Some(handle) }
    }
}

/// Submits closures to a fixed number of worker threads, running them in
/// submission order per worker but with no ordering guarantee across
/// workers.
///
/// Dropping the manager stops accepting new work, signals every worker to
/// exit once its current job (if any) completes, and joins all of them.
pub struct TaskManager {
    sender: Option<Sender<Job>>,
    workers: Vec<Worker>,
}

impl TaskManager {
    /// Creates a manager backed by `worker_count` threads. `worker_count`
    /// of zero is treated as one, since a pool with no workers could never
    /// make progress.
    pub fn new(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (sender, receiver) = channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..worker_count).map(|id| Worker::new(id, Arc::clone(&receiver))).collect();

        Self { sender: Some(sender), workers }
    }

    /// Creates a manager with one worker per available CPU core, matching
    /// the original test task manager's sizing.
    pub fn with_available_parallelism() -> Self {
        let cores = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self::new(cores)
    }

    /// The number of worker threads in the pool.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Submits `job` to run on whichever worker picks it up next.
    ///
    /// Returns [`Error::FailedPrecondition`] if the manager has already
    /// been [`shutdown`](TaskManager::shutdown).
    pub fn submit(&self, job: impl FnOnce() + Send + 'static) -> Result<()> {
        self.sender
            .as_ref()
            .ok_or(Error::FailedPrecondition)?
            .send(Box::new(job))
            .map_err(|_| Error::FailedPrecondition)
    }

    /// Stops accepting new work and joins every worker thread once its
    /// current job, if any, completes. Idempotent; a manager that has
    /// already shut down (including via `Drop`) does nothing.
    pub fn shutdown(&mut self) {
        self.sender.take();

        for worker in &mut self.workers {
            if let Some(handle) = worker.handle.take() {
                handle.join().ok();
            }
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn submitted_jobs_all_run() {
        let manager = TaskManager::new(4);
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..20 {
            let counter = Arc::clone(&counter);
            manager.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }).unwrap();
        }

        drop(manager);
        assert_eq!(counter.load(Ordering::SeqCst), 20);
    }

    #[test]
    fn a_zero_worker_count_is_treated_as_one() {
        let manager = TaskManager::new(0);
        assert_eq!(manager.worker_count(), 1);
    }

    #[test]
    fn submitting_after_shutdown_fails() {
        let mut manager = TaskManager::new(1);
        manager.shutdown();
        assert!(matches!(manager.submit(|| {}), Err(Error::FailedPrecondition)));
    }
}
