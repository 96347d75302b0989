use std::cell::Cell;
use std::rc::Rc;

use web_sys::{AbortController, AbortSignal};

/// Ties in-flight content requests to the lifetime of one page mount.
///
/// Clones share the same flag. Once `release` runs the requests are aborted
/// and `is_live` turns false, so a response that still arrives is dropped
/// instead of being written into a page that is gone.
#[derive(Clone)]
pub struct MountGuard {
    live: Rc<Cell<bool>>,
    abort: Option<AbortController>,
}

impl MountGuard {
    pub fn new(abort: Option<AbortController>) -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
            abort,
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.abort.as_ref().map(AbortController::signal)
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn release(&self) {
        self.live.set(false);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_starts_live() {
        let guard = MountGuard::new(None);
        assert!(guard.is_live());
        assert!(guard.signal().is_none());
    }

    #[test]
    fn release_is_seen_by_every_clone() {
        let guard = MountGuard::new(None);
        let in_flight = guard.clone();
        guard.release();
        assert!(!guard.is_live());
        assert!(!in_flight.is_live());
    }

    #[test]
    fn separate_mounts_do_not_share_state() {
        let first = MountGuard::new(None);
        let second = MountGuard::new(None);
        first.release();
        assert!(second.is_live());
    }
}
