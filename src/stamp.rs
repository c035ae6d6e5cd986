//! Monotonic modification stamps.
//!
//! Every mutable field group (actor parameters, bounds, label text, title
//! text, a viewport's camera) records the [`Stamp`] of its last change, and
//! every build records the stamp it completed at. Staleness is decided by
//! comparing stamps, never wall-clock time.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide clock; 0 is reserved for [`Stamp::NEVER`].
static CLOCK: AtomicU64 = AtomicU64::new(1);

/// A point on the modification clock. Later stamps compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stamp(u64);

impl Stamp {
    /// Older than every stamp handed out by [`Stamp::next`].
    pub const NEVER: Stamp = Stamp(0);

    /// Take a fresh stamp, strictly greater than every stamp taken before it.
    pub fn next() -> Stamp {
        Stamp(CLOCK.fetch_add(1, Ordering::Relaxed))
    }

    /// Replace `self` with a fresh stamp.
    pub fn touch(&mut self) {
        *self = Stamp::next();
    }

    pub fn is_never(self) -> bool {
        self == Stamp::NEVER
    }

    /// True when this change has not been seen by a build completed at `built`.
    #[inline]
    pub fn newer_than(self, built: Stamp) -> bool {
        self >= built
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
