/// Distance from the document bottom, in CSS pixels, at which the feed asks
/// for more content.
pub const NEAR_BOTTOM_PX: f64 = 100.0;

/// True when the viewport bottom edge has crossed into the trigger band at
/// the end of the document.
pub fn near_bottom(scroll_top: f64, viewport_height: f64, document_height: f64) -> bool {
    near_bottom_with(scroll_top, viewport_height, document_height, NEAR_BOTTOM_PX)
}

pub fn near_bottom_with(
    scroll_top: f64,
    viewport_height: f64,
    document_height: f64,
    threshold_px: f64,
) -> bool {
    if !scroll_top.is_finite() || !viewport_height.is_finite() || !document_height.is_finite() {
        return false;
    }
    scroll_top + viewport_height > document_height - threshold_px
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
}

/// Single in-flight flag for the feed. At most one load-more request may be
/// outstanding; `try_begin` claims the guard and `settle` releases it once
/// the request completes, on either outcome.
#[derive(Clone, Copy, Debug)]
pub struct FeedGuard {
    phase: FeedPhase,
}

impl FeedGuard {
    pub fn new() -> Self {
        Self {
            phase: FeedPhase::Idle,
        }
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    /// Claims the guard for a new request. Returns false while a request is
    /// already outstanding.
    pub fn try_begin(&mut self) -> bool {
        if self.phase == FeedPhase::Loading {
            return false;
        }
        self.phase = FeedPhase::Loading;
        true
    }

    pub fn settle(&mut self) {
        self.phase = FeedPhase::Idle;
    }
}

impl Default for FeedGuard {
    fn default() -> Self {
        Self::new()
    }
}
