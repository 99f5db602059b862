//! Native resolution, logical grid, and the coordinate mapper.
//!
//! The peer draws on a fixed 320×240 screen ("logical grid").  The desktop
//! pointer lives in the native resolution of either the whole screen (hook
//! variant) or the bridge window (window variant).  [`CoordinateMapper`]
//! rescales one into the other:
//!
//! ```text
//! mapped = floor(v * T / max(1, D - 1))   clamped to [0, T - 1]
//! ```
//!
//! where `v` is the native coordinate, `D` the native dimension, and `T` the
//! logical dimension.  The `max(1, D - 1)` guard keeps degenerate surfaces
//! (`D <= 1`) from dividing by zero.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a `WIDTHxHEIGHT` resolution string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolutionParseError {
    /// The text was not of the form `WIDTHxHEIGHT`.
    #[error("expected WIDTHxHEIGHT (e.g. 1920x1080), got '{0}'")]
    Malformed(String),
    /// One of the dimensions was zero.
    #[error("resolution dimensions must be non-zero (got '{0}')")]
    ZeroDimension(String),
}

/// Pixel dimensions of the real screen or rendering window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a resolution from explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (w, h) = trimmed
            .split_once(['x', 'X'])
            .ok_or_else(|| ResolutionParseError::Malformed(s.to_string()))?;
        let width: u32 = w
            .trim()
            .parse()
            .map_err(|_| ResolutionParseError::Malformed(s.to_string()))?;
        let height: u32 = h
            .trim()
            .parse()
            .map_err(|_| ResolutionParseError::Malformed(s.to_string()))?;
        if width == 0 || height == 0 {
            return Err(ResolutionParseError::ZeroDimension(s.to_string()));
        }
        Ok(Self { width, height })
    }
}

/// The fixed coordinate space expected by the remote peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalGrid {
    width: u16,
    height: u16,
}

impl LogicalGrid {
    /// The 320×240 grid the peer firmware draws on.
    pub const PEER: LogicalGrid = LogicalGrid {
        width: 320,
        height: 240,
    };

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the native resolution of this grid scaled by an integer factor.
    ///
    /// Used to size the bridge window (320×240 at scale 2 is 640×480).
    pub fn scaled(&self, factor: u32) -> Resolution {
        Resolution {
            width: u32::from(self.width) * factor,
            height: u32::from(self.height) * factor,
        }
    }
}

impl Default for LogicalGrid {
    fn default() -> Self {
        Self::PEER
    }
}

/// Maps one native coordinate onto a logical axis.
///
/// Computes `floor(value * target / max(1, native - 1))` in 64-bit arithmetic
/// and clamps the result to `[0, target - 1]`.  Negative coordinates (monitors
/// placed left of or above the primary) clamp to `0`.  A `target` of zero
/// yields `0`.
pub fn map_axis(value: i32, native: u32, target: u16) -> u16 {
    if target == 0 {
        return 0;
    }
    let denom = i64::from(native.saturating_sub(1).max(1));
    let scaled = (i64::from(value) * i64::from(target)).div_euclid(denom);
    // The clamp bounds fit in u16, so the cast is lossless.
    scaled.clamp(0, i64::from(target) - 1) as u16
}

/// Rescales native pointer coordinates onto a [`LogicalGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    native: Resolution,
    grid: LogicalGrid,
}

impl CoordinateMapper {
    pub fn new(native: Resolution, grid: LogicalGrid) -> Self {
        Self { native, grid }
    }

    pub fn native(&self) -> Resolution {
        self.native
    }

    pub fn grid(&self) -> LogicalGrid {
        self.grid
    }

    /// Maps a native `(x, y)` position to logical grid coordinates.
    pub fn map(&self, x: i32, y: i32) -> (u16, u16) {
        (
            map_axis(x, self.native.width, self.grid.width),
            map_axis(y, self.native.height, self.grid.height),
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
