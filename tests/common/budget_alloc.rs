use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Global allocator that counts allocations made while armed.
pub struct BudgetAlloc {
    armed: AtomicBool,
    count: AtomicUsize,
    bytes: AtomicUsize,
}

/// Allocations observed during one [`BudgetAlloc::measure`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocReport {
    pub count: usize,
    pub bytes: usize,
}

impl BudgetAlloc {
    pub const fn new() -> Self {
        Self {
            armed: AtomicBool::new(false),
            count: AtomicUsize::new(0),
            bytes: AtomicUsize::new(0),
        }
    }

    /// Run `op` with counting armed and report what it allocated.
    pub fn measure<T>(&self, op: impl FnOnce() -> T) -> (T, AllocReport) {
        self.count.store(0, Ordering::SeqCst);
        self.bytes.store(0, Ordering::SeqCst);
        self.armed.store(true, Ordering::SeqCst);
        let out = op();
        self.armed.store(false, Ordering::SeqCst);
        let report = AllocReport {
            count: self.count.load(Ordering::SeqCst),
            bytes: self.bytes.load(Ordering::SeqCst),
        };
        (out, report)
    }

    fn note(&self, bytes: usize) {
        if self.armed.load(Ordering::SeqCst) {
            self.count.fetch_add(1, Ordering::SeqCst);
            self.bytes.fetch_add(bytes, Ordering::SeqCst);
        }
    }
}

unsafe impl GlobalAlloc for BudgetAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            self.note(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            self.note(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            self.note(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}
