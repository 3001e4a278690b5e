use rootsig::CompileArgs;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Allocator which tracks the number of live bytes
struct CountingAllocator;

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        LIVE_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

const FAILING: &[&str] = &[
    "CBV(b0, space=0, space=1)",
    "RootFlags(0), RootFlags(0)",
    "DescriptorTable(CBV(b0), SRV(t0), UAV(u0), Sampler(b0))",
    "StaticSampler(s0, filter=FILTER_UNKNOWN)",
    "RootConstants(num32BitConstants=1, b0",
    "SRV(t0, flags=DATA_STATIC | 3)",
];

fn compile_all() {
    for source in FAILING {
        let result = rootsig::compile(CompileArgs::new("test.hlsl", source));
        assert!(result.is_err());
    }

    let source = "RootFlags(ALLOW_STREAM_OUTPUT), \
        DescriptorTable(SRV(t0, numDescriptors=unbounded)), StaticSampler(s0)";
    let result = rootsig::compile(CompileArgs::new("test.hlsl", source));
    assert!(result.is_ok());
}

// Only one test lives in this binary so other threads do not disturb the counter
#[test]
fn check_failed_parses_release_memory() {
    // Warm up so one-time allocations in dependencies happen before counting
    compile_all();

    let before = LIVE_BYTES.load(Ordering::Relaxed);
    for _ in 0..100 {
        compile_all();
    }
    let after = LIVE_BYTES.load(Ordering::Relaxed);

    assert_eq!(before, after, "failed parses left memory allocated");
}
