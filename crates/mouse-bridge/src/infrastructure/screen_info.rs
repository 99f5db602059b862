//! Native screen size for the hook front-end.

use mouse_bridge_core::Resolution;
use tracing::{debug, warn};

use crate::domain::config::FALLBACK_SCREEN;

/// Returns the screen size used to map hook coordinates.
///
/// An explicit `override_size` wins.  Otherwise the primary display is
/// queried, falling back to 1920×1080 with a warning.
pub fn native_screen_resolution(override_size: Option<Resolution>) -> Resolution {
    resolve_screen(override_size, query_display)
}

/// Picks the override, the queried size, or the fallback, in that order.
pub fn resolve_screen<F>(override_size: Option<Resolution>, query: F) -> Resolution
where
    F: FnOnce() -> Result<Resolution, String>,
{
    if let Some(size) = override_size {
        debug!("using screen size override {size}");
        return size;
    }
    match query() {
        Ok(size) if size.width > 0 && size.height > 0 => size,
        Ok(size) => {
            warn!("display reported size {size}; assuming {FALLBACK_SCREEN}");
            FALLBACK_SCREEN
        }
        Err(e) => {
            warn!("could not query display size ({e}); assuming {FALLBACK_SCREEN}");
            FALLBACK_SCREEN
        }
    }
}

#[cfg(feature = "hook")]
fn query_display() -> Result<Resolution, String> {
    let (w, h) = rdev::display_size().map_err(|e| format!("{e:?}"))?;
    let width = u32::try_from(w).map_err(|e| e.to_string())?;
    let height = u32::try_from(h).map_err(|e| e.to_string())?;
    Ok(Resolution::new(width, height))
}

#[cfg(not(feature = "hook"))]
fn query_display() -> Result<Resolution, String> {
    Err("display query requires the `hook` feature".to_string())
}
