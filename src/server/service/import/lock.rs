use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Process wide guard allowing a single import run at a time.
#[derive(Clone, Debug, Default)]
pub struct ImportLock(Arc<AtomicBool>);

impl ImportLock {
    /// Take the lock, or `None` if a run already holds it.
    ///
    /// The lock is released when the returned guard is dropped.
    pub fn try_acquire(&self) -> Option<ImportGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ImportGuard(self.0.clone()))
    }
}

pub struct ImportGuard(Arc<AtomicBool>);

impl Drop for ImportGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
