use std::sync::mpsc::{self, Receiver, Sender};

use log::trace;

/// Work handed to the tick thread from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    ConfigChanged { group: String, key: String },
    ResetItemCache,
}

/// Cloneable sender side; safe to move to the host's worker thread.
#[derive(Debug, Clone)]
pub struct SchedulerHandle {
    tx: Sender<Deferred>,
}

impl SchedulerHandle {
    pub fn config_changed(&self, group: impl Into<String>, key: impl Into<String>) {
        self.send(Deferred::ConfigChanged {
            group: group.into(),
            key: key.into(),
        });
    }

    pub fn reset_item_cache(&self) {
        self.send(Deferred::ResetItemCache);
    }

    pub fn send(&self, work: Deferred) {
        if self.tx.send(work).is_err() {
            trace!("scheduler gone, dropping deferred work");
        }
    }
}

/// Queue drained on the tick thread at the start of every tick.
#[derive(Debug)]
pub struct TickScheduler {
    tx: Sender<Deferred>,
    rx: Receiver<Deferred>,
}

impl TickScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            tx: self.tx.clone(),
        }
    }

    /// Next queued item, if any. Never blocks.
    pub fn next(&self) -> Option<Deferred> {
        self.rx.try_recv().ok()
    }

    /// Everything queued so far, in submission order.
    pub fn drain(&self) -> Vec<Deferred> {
        self.rx.try_iter().collect()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn drains_in_submission_order() {
        let scheduler = TickScheduler::new();
        let handle = scheduler.handle();
        handle.config_changed("menuentryswapper", "buy1");
        handle.reset_item_cache();
        assert_eq!(
            scheduler.drain(),
            vec![
                Deferred::ConfigChanged {
                    group: "menuentryswapper".into(),
                    key: "buy1".into(),
                },
                Deferred::ResetItemCache,
            ]
        );
        assert!(scheduler.drain().is_empty());
    }

    #[test]
    fn handles_work_from_other_threads() {
        let scheduler = TickScheduler::new();
        let handle = scheduler.handle();
        thread::spawn(move || handle.config_changed("shiftclick", "item_4151"))
            .join()
            .unwrap();
        assert!(matches!(scheduler.next(), Some(Deferred::ConfigChanged { .. })));
        assert_eq!(scheduler.next(), None);
    }
}
