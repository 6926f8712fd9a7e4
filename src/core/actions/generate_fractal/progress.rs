use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// Completion of the in-flight render as an integer percentage.
///
/// Workers report finished pixels; the percentage only ever grows during a
/// render and reads 100 once every pixel is done.
#[derive(Debug, Default)]
pub struct RenderProgress {
    completed: AtomicUsize,
    total: AtomicUsize,
    percent: AtomicU8,
}

impl RenderProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn completed_pixels(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Back to 0 with nothing to do.
    pub fn reset(&self) {
        self.start(0);
    }

    pub(crate) fn start(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
        self.percent.store(0, Ordering::Relaxed);
    }

    /// Pixels a worker should batch between reports: a hundredth of the
    /// render, at least one.
    pub(crate) fn step(&self) -> usize {
        (self.total.load(Ordering::Relaxed) / 100).max(1)
    }

    pub(crate) fn advance(&self, pixels: usize) {
        let done = self.completed.fetch_add(pixels, Ordering::Relaxed) + pixels;
        let total = self.total.load(Ordering::Relaxed);

        if total == 0 {
            return;
        }

        let percent = (done.min(total) * 100 / total) as u8;
        self.percent.fetch_max(percent, Ordering::Relaxed);
    }

    pub(crate) fn finish(&self) {
        self.percent.store(100, Ordering::Relaxed);
    }
}
