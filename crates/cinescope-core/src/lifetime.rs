use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owned by a view for as long as it is on screen; dropping it closes every scope
pub struct ViewLifetime {
    active: Arc<AtomicBool>,
}

/// Cloneable handle used to gate late results on the owning view
#[derive(Clone)]
pub struct ViewScope {
    active: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn scope(&self) -> ViewScope {
        ViewScope {
            active: self.active.clone(),
        }
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewLifetime {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl ViewScope {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Run `work` to completion, then hand back its output only if the view
    /// is still alive. The work itself is never cancelled.
    pub async fn guard<F, T>(&self, work: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let output = work.await;
        if self.is_active() {
            Some(output)
        } else {
            tracing::debug!("Discarding result for a closed view");
            None
        }
    }
}
