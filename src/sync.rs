#[cfg(loom)]
pub(crate) use loom::sync::atomic::{AtomicBool, AtomicU32, AtomicU64};

#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64};

/// Hand control back to the model checker so spinning workers can't starve it
#[cfg(loom)]
pub(crate) fn relax() {
    loom::thread::yield_now();
}

/// No-op outside of loom, the busy loops must stay as tight as possible
#[cfg(not(loom))]
#[inline(always)]
pub(crate) fn relax() {}
