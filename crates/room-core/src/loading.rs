/// Barrier for the loading overlay: it hides once the primary asset is ready
/// and the minimum display time has passed, whichever comes later.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingGate {
    started_ms: f64,
    min_ms: f64,
    primary_ready: bool,
    primary_failed: bool,
    hidden: bool,
    error: Option<String>,
}

impl LoadingGate {
    pub fn new(started_ms: f64, min_ms: f64) -> Self {
        Self {
            started_ms,
            min_ms,
            primary_ready: false,
            primary_failed: false,
            hidden: false,
            error: None,
        }
    }

    pub fn mark_primary_ready(&mut self) {
        self.primary_ready = true;
    }

    /// Record a load failure. A primary failure keeps the overlay up for good;
    /// secondary failures only change the message while it is still visible.
    /// Returns the message to show, if any.
    pub fn fail(&mut self, primary: bool, message: impl Into<String>) -> Option<&str> {
        if primary {
            self.primary_failed = true;
        }
        if self.hidden {
            return None;
        }
        self.error = Some(message.into());
        self.error.as_deref()
    }

    /// `true` exactly once: on the first poll where the overlay may hide.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.hidden || !self.primary_ready || self.primary_failed {
            return false;
        }
        if now_ms - self.started_ms < self.min_ms {
            return false;
        }
        self.hidden = true;
        true
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
