use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use thiserror::Error;
use tracing::{debug, error};

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("thread pool is shut down")]
    Closed,
}

struct Worker {
    id: usize,
    thread: thread::JoinHandle<()>,
}

impl Worker {
    fn new(id: usize, receiver: Arc<Mutex<Receiver<Job>>>) -> Worker {
        let thread = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || {
                loop {
                    let message = match receiver.lock() {
                        Ok(rx) => rx.recv(),
                        Err(_) => {
                            error!(worker = id, "job queue lock poisoned, worker exiting");
                            break;
                        }
                    };
                    match message {
                        // a panicking job must not take the worker down with it
                        Ok(job) => {
                            if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                                error!(worker = id, "job panicked");
                            }
                        }
                        Err(_) => break,
                    }
                }
                debug!(worker = id, "worker stopped");
            })
            .expect("failed to spawn worker thread");

        Worker { id, thread }
    }
}

/// Fixed-size pool of worker threads fed from a single job queue.
///
/// Jobs queue up without limit when every worker is busy.
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: Option<Sender<Job>>,
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        drop(self.sender.take());

        for worker in self.workers.drain(..) {
            if worker.thread.join().is_err() {
                error!(worker = worker.id, "worker thread panicked");
            }
        }
    }
}

impl ThreadPool {
    pub fn new(size: usize) -> Self {
        assert!(size > 0);

        let (sender, receiver) = mpsc::channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = Vec::with_capacity(size);

        for id in 0..size {
            workers.push(Worker::new(id, Arc::clone(&receiver)));
        }

        ThreadPool { workers, sender: Some(sender) }
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn execute<F>(&self, f: F) -> Result<(), PoolError>
    where
        F: FnOnce() + Send + 'static,
    {
        let job = Box::new(f) as Job;
        self.sender
            .as_ref()
            .ok_or(PoolError::Closed)?
            .send(job)
            .map_err(|_| PoolError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn runs_every_job_before_drop_returns() {
        let counter = Arc::new(AtomicUsize::new(0));
        let pool = ThreadPool::new(4);
        assert_eq!(pool.size(), 4);

        for _ in 0..32 {
            let counter = Arc::clone(&counter);
            pool.execute(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        }
        drop(pool);

        assert_eq!(counter.load(Ordering::SeqCst), 32);
    }

    #[test]
    fn panicking_job_does_not_kill_worker() {
        let counter = Arc::new(AtomicUsize::new(0));
        let pool = ThreadPool::new(1);

        pool.execute(|| panic!("boom")).unwrap();
        let c = Arc::clone(&counter);
        pool.execute(move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        drop(pool);

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic]
    fn zero_sized_pool_is_rejected() {
        ThreadPool::new(0);
    }
}
