use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

/// `System` allocator that keeps count of live bytes and live blocks.
///
/// Install it with `#[global_allocator]` to check that contacts and their
/// arrays are all given back when a list goes away.
pub struct Zalloc;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static LIVE_BLOCKS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Zalloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ret = System.alloc(layout);
        if !ret.is_null() {
            ALLOCATED.fetch_add(layout.size(), Relaxed);
            LIVE_BLOCKS.fetch_add(1, Relaxed);
        }
        ret
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        ALLOCATED.fetch_sub(layout.size(), Relaxed);
        LIVE_BLOCKS.fetch_sub(1, Relaxed);
    }
}

#[inline]
pub fn allocated_memory() -> usize {
    ALLOCATED.load(Relaxed)
}

#[inline]
pub fn live_allocations() -> usize {
    LIVE_BLOCKS.load(Relaxed)
}
