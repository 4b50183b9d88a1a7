/// Holds the latest resize until no new one has arrived for `delay_ms`
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    delay_ms: f64,
    pending: Option<PendingResize>,
}

#[derive(Clone, Copy, Debug)]
struct PendingResize {
    width: f64,
    due_at: f64,
}

impl ResizeDebouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, pending: None }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Replaces any pending resize and restarts the quiet period
    pub fn schedule(&mut self, width: f64, now: f64) {
        self.pending = Some(PendingResize { width, due_at: now + self.delay_ms });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending width, once its quiet period is over
    pub fn take_due(&mut self, now: f64) -> Option<f64> {
        match self.pending {
            Some(p) if now >= p.due_at => {
                self.pending = None;
                Some(p.width)
            }
            _ => None,
        }
    }
}
