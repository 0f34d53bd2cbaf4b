//! Keeping the selected row inside a scrollable list viewport.
//!
//! Rows are laid out top to bottom, one unit tall each, at their index in the
//! location array. The viewport shows `height` rows starting at the scroll
//! offset.

use rustc_hash::FxHashMap;

use crate::model::{Location, LocationId};

/// Vertical extent of a box, in viewport units. `bottom` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top: i64,
    pub bottom: i64,
}

impl Bounds {
    pub fn new(top: i64, height: i64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    /// True if `child` pokes out above or below `self`.
    pub fn clips(&self, child: &Bounds) -> bool {
        child.top < self.top || child.bottom > self.bottom
    }
}

/// Row positions keyed by location id, rebuilt whenever the array changes.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    positions: FxHashMap<LocationId, usize>,
    len: usize,
}

impl RowIndex {
    pub fn build(locations: &[Location]) -> Self {
        let mut positions = FxHashMap::default();
        for (idx, location) in locations.iter().enumerate() {
            // Keep the first row when ids repeat; it is the one a reader sees first.
            positions.entry(location.id.clone()).or_insert(idx);
        }
        Self {
            positions,
            len: locations.len(),
        }
    }

    pub fn position(&self, id: &LocationId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Scroll offset of a list viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
}

impl ScrollState {
    /// Largest offset that still fills the viewport.
    pub fn max_offset(total: usize, height: usize) -> usize {
        total.saturating_sub(height)
    }

    /// Move the offset by `delta` rows, staying in range.
    pub fn scroll_by(&mut self, delta: isize, total: usize, height: usize) {
        let max = Self::max_offset(total, height);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    /// Clamp after the list or the viewport shrank.
    pub fn clamp(&mut self, total: usize, height: usize) {
        self.offset = self.offset.min(Self::max_offset(total, height));
    }

    /// Scroll the least amount needed to show row `position`.
    pub fn ensure_visible(&mut self, position: usize, height: usize) {
        if height == 0 {
            return;
        }
        if position < self.offset {
            self.offset = position;
        } else if position >= self.offset + height {
            self.offset = position + 1 - height;
        }
    }

    /// Bring row `position` into view if it is clipped.
    ///
    /// The row is placed `margin` rows below the viewport top, with the margin
    /// capped so the row itself stays inside the viewport. Returns `true` if
    /// the offset changed.
    pub fn reveal(&mut self, position: usize, total: usize, height: usize, margin: usize) -> bool {
        if height == 0 || position >= total {
            return false;
        }

        let container = Bounds::new(0, height as i64);
        let child = Bounds::new(position as i64 - self.offset as i64, 1);
        if !container.clips(&child) {
            return false;
        }

        let margin = margin.min(height - 1);
        let target = position
            .saturating_sub(margin)
            .min(Self::max_offset(total, height));
        let changed = target != self.offset;
        self.offset = target;
        changed
    }
}

/// Scroll the list so `selected` is visible.
///
/// No-op when nothing is selected or when the selection has no rendered row.
pub fn scroll_to_selected(
    selected: Option<&Location>,
    rows: &RowIndex,
    height: usize,
    state: &mut ScrollState,
    margin: usize,
) -> bool {
    let Some(location) = selected else {
        return false;
    };
    let Some(position) = rows.position(&location.id) else {
        return false;
    };
    state.reveal(position, rows.len(), height, margin)
}
