use crossbeam_channel::{bounded, select, tick, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A start/stop-able periodic task on its own thread.
///
/// The task runs once immediately and then once per `interval` until it asks
/// to stop by returning `false`, or until [`PeriodicTask::stop`] is called.
/// Ticks that fall due while the task is still running are coalesced.
pub struct PeriodicTask {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl PeriodicTask {
    pub fn start<F>(interval: Duration, mut task: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::spawn(move || {
            let ticker = tick(interval);
            let mut runs = 0u64;

            if !task() {
                return 1;
            }
            runs += 1;

            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => {
                        runs += 1;
                        if !task() {
                            break;
                        }
                    }
                }
            }

            runs
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread. Returns how many times the task
    /// ran.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    fn shutdown(&mut self) -> u64 {
        // Dropping the sender also wakes the select.
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.try_send(());
        }
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or(0),
            None => 0,
        }
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_runs_until_stopped() {
        let count = Arc::new(AtomicU64::new(0));
        let c = count.clone();
        let task = PeriodicTask::start(Duration::from_millis(5), move || {
            c.fetch_add(1, Ordering::SeqCst);
            true
        });

        thread::sleep(Duration::from_millis(60));
        let runs = task.stop();
        let seen = count.load(Ordering::SeqCst);

        assert!(seen >= 2, "ran {} times", seen);
        assert_eq!(runs, seen);

        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }

    #[test]
    fn test_task_can_stop_itself() {
        let count = Arc::new(AtomicU64::new(0));
        let c = count.clone();
        let task = PeriodicTask::start(Duration::from_millis(1), move || {
            c.fetch_add(1, Ordering::SeqCst) + 1 < 3
        });

        let start = std::time::Instant::now();
        while !task.is_finished() && start.elapsed() < Duration::from_secs(2) {
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(task.stop(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
