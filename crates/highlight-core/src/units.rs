// File: crates/highlight-core/src/units.rs
// Summary: Density-independent pixel conversion backed by a process-wide display density.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use tracing::warn;

static DENSITY: OnceCell<f32> = OnceCell::new();
static WARNED: AtomicBool = AtomicBool::new(false);

/// Set the display density (pixels per dp). Only the first valid call takes effect.
pub fn init(density: f32) -> bool {
    if !density.is_finite() || density <= 0.0 {
        warn!(density, "ignoring invalid display density");
        return false;
    }
    match DENSITY.set(density) {
        Ok(()) => true,
        Err(_) => {
            warn!(density, current = density_or_default(), "display density already initialized");
            false
        }
    }
}

/// Current density, if `init` has been called.
pub fn density() -> Option<f32> {
    DENSITY.get().copied()
}

fn density_or_default() -> f32 {
    match DENSITY.get() {
        Some(d) => *d,
        None => {
            if !WARNED.swap(true, Ordering::Relaxed) {
                warn!("units not initialized; dp values are used as pixels");
            }
            1.0
        }
    }
}

pub fn dp_to_px(dp: f32) -> f32 {
    dp * density_or_default()
}

pub fn px_to_dp(px: f32) -> f32 {
    px / density_or_default()
}
