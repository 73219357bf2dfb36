//! Time and memory of a call to a procedure.
//!
//! Time is wall-clock time.
//! Memory is the peak count of bytes held by the calling thread during the call, above the count held at the start of the call.
//!
//! Bytes are counted by [TrackingAllocator], which wraps some other allocator and keeps a per-thread count of bytes allocated and freed.
//! As the procedures are single threaded, a per-thread count is the memory of a call, even when calls are made on many threads at once.
//!
//! The tracker is installed by the binary:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static GLOBAL: TrackingAllocator<std::alloc::System> = TrackingAllocator::new(std::alloc::System);
//! ```

use std::{
    alloc::{GlobalAlloc, Layout},
    cell::Cell,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

use crate::{
    procedures::{Engine, Verdict},
    structures::formula::Formula,
};

const MIB: f64 = 1024.0 * 1024.0;

thread_local! {
    /// Bytes allocated less bytes freed by the thread.
    /// Memory allocated on one thread and freed on another may make this negative.
    static CURRENT: Cell<isize> = const { Cell::new(0) };

    /// The greatest value of [CURRENT] since the last reset.
    static PEAK: Cell<isize> = const { Cell::new(0) };
}

static TRACKING: AtomicBool = AtomicBool::new(false);

/// An allocator which counts the bytes held by each thread.
#[derive(Debug, Default)]
pub struct TrackingAllocator<A> {
    inner: A,
}

impl<A> TrackingAllocator<A> {
    pub const fn new(inner: A) -> Self {
        TrackingAllocator { inner }
    }
}

fn note_alloc(size: usize) {
    if !TRACKING.load(Ordering::Relaxed) {
        TRACKING.store(true, Ordering::Relaxed);
    }
    // The counters are const initialised without a destructor, so access never allocates.
    // Though, access may fail during thread teardown, in which case the allocation is not counted.
    let _ = CURRENT.try_with(|current| {
        let now = current.get().wrapping_add(size as isize);
        current.set(now);
        let _ = PEAK.try_with(|peak| {
            if now > peak.get() {
                peak.set(now);
            }
        });
    });
}

fn note_dealloc(size: usize) {
    let _ = CURRENT.try_with(|current| current.set(current.get().wrapping_sub(size as isize)));
}

// Safety: Each method defers to the inner allocator with the same arguments, and only counts on success.
unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAllocator<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            note_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            note_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.inner.dealloc(ptr, layout);
        note_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            note_dealloc(layout.size());
            note_alloc(new_size);
        }
        new_ptr
    }
}

/// Whether some allocation has been counted by a [TrackingAllocator], and so whether peaks are meaningful.
pub fn is_tracking() -> bool {
    TRACKING.load(Ordering::Relaxed)
}

/// The bytes currently held by the thread, and the peak is reset to this count.
fn reset_peak() -> isize {
    let now = CURRENT.with(|current| current.get());
    PEAK.with(|peak| peak.set(now));
    now
}

fn peak() -> isize {
    PEAK.with(|peak| peak.get())
}

/// The verdict of a call to a procedure, together with time and memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub verdict: Verdict,

    /// Wall-clock time of the call.
    pub elapsed: Duration,

    /// Peak memory held during the call, in MiB.
    pub peak_mib: f64,
}

/// Decides the formula with the engine, measuring time and memory.
pub fn measure(engine: Engine, formula: &Formula) -> Measurement {
    let baseline = reset_peak();
    let start = Instant::now();

    let verdict = engine.decide(formula);

    let elapsed = start.elapsed();
    let peak_bytes = peak().saturating_sub(baseline).max(0);

    Measurement {
        verdict,
        elapsed,
        peak_mib: peak_bytes as f64 / MIB,
    }
}
