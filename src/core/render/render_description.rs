use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Settings shared by the parallel render loops.
///
/// `abort` may be set from any thread; render jobs poll it between samples.
#[derive(Debug, Clone, Default)]
pub struct RenderDescription {
    /// Worker threads, 0 uses every available core.
    pub thread_count: usize,
    pub abort: Arc<AtomicBool>,
}

impl RenderDescription {
    pub fn new(thread_count: usize) -> Self {
        RenderDescription {
            thread_count,
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }

    pub fn request_abort(&self) {
        self.abort.store(true, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractiveRenderDescription {
    pub render: RenderDescription,
    /// Set when the view changed; the next pass starts from an empty film.
    pub clear_accumulation_buffer: Arc<AtomicBool>,
}

impl InteractiveRenderDescription {
    pub fn new(thread_count: usize) -> Self {
        InteractiveRenderDescription {
            render: RenderDescription::new(thread_count),
            clear_accumulation_buffer: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn request_clear(&self) {
        self.clear_accumulation_buffer.store(true, Ordering::Release);
    }

    /// Consumes a pending clear request.
    pub fn take_clear_request(&self) -> bool {
        self.clear_accumulation_buffer.swap(false, Ordering::AcqRel)
    }
}
