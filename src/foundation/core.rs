pub use kurbo::{Point, Rect, Vec2};

/// Point on the page's virtual clock, in milliseconds since the host started it.
///
/// Also used for durations; all time arithmetic saturates instead of wrapping.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Time zero.
    pub const ZERO: Self = Self(0);

    /// `self + rhs`, saturating at `u64::MAX`.
    pub fn saturating_add(self, rhs: Millis) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Elapsed time from `earlier` to `self`; zero when `earlier` is later.
    pub fn saturating_sub(self, earlier: Millis) -> Self {
        Self(self.0.saturating_sub(earlier.0))
    }

    /// Return `true` for a zero duration.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Stable index of an element registered with the reveal scheduler.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl ElementId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Join a static-assets root and a relative media file name with exactly one `/`.
pub fn join_asset_path(root: &str, file: &str) -> String {
    let root = root.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    format!("{root}/{file}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
