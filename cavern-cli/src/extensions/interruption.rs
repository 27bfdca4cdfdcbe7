//! Interruption handler.

#[cfg(test)]
#[path = "../../tests/unit/extensions/interruption_test.rs"]
mod interruption_test;

use cavern_core::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Creates interruption quota: it is reached on ctrl-c or when max time (in milliseconds) is elapsed.
pub fn create_interruption_quota(max_time_ms: Option<u64>) -> Arc<dyn Quota + Send + Sync> {
    let inner = max_time_ms
        .map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as f64 / 1000.)));

    Arc::new(InterruptionQuota { inner, should_interrupt: get_interruption_flag() })
}

fn get_interruption_flag() -> Arc<AtomicBool> {
    static SHOULD_INTERRUPT: OnceLock<Arc<AtomicBool>> = OnceLock::new();

    SHOULD_INTERRUPT
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            // NOTE the host process might have its own handler installed already
            let _ = ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || should_interrupt.store(true, Ordering::Relaxed)
            });

            should_interrupt
        })
        .clone()
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
