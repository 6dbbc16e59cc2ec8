//! Focus Region Tracker
//!
//! Which of the three regions owns the keyboard, plus the focused index of
//! each list region. List lengths are supplied by the caller on every call
//! since lists are re-rendered independently of this tracker.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusRegion {
    #[default]
    Search,
    Drives,
    Files,
}

impl FocusRegion {
    /// Forward region cycle: search → drives → files → search
    pub fn next(self) -> FocusRegion {
        match self {
            FocusRegion::Search => FocusRegion::Drives,
            FocusRegion::Drives => FocusRegion::Files,
            FocusRegion::Files => FocusRegion::Search,
        }
    }

    /// Exact reverse of [`FocusRegion::next`]
    pub fn prev(self) -> FocusRegion {
        match self {
            FocusRegion::Search => FocusRegion::Files,
            FocusRegion::Drives => FocusRegion::Search,
            FocusRegion::Files => FocusRegion::Drives,
        }
    }

    pub fn is_list(self) -> bool {
        !matches!(self, FocusRegion::Search)
    }
}

impl fmt::Display for FocusRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FocusRegion::Search => "search",
            FocusRegion::Drives => "drives",
            FocusRegion::Files => "files",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTracker {
    region: FocusRegion,
    drives_index: Option<usize>,
    files_index: Option<usize>,
}

fn clamp(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| index.min(len - 1))
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_region(&self) -> FocusRegion {
        self.region
    }

    pub fn set_region(&mut self, region: FocusRegion) {
        if self.region != region {
            tracing::trace!("focus {} -> {}", self.region, region);
        }
        self.region = region;
    }

    /// Focused index of a list region; always `None` for the search box
    pub fn current_index(&self, region: FocusRegion) -> Option<usize> {
        match region {
            FocusRegion::Search => None,
            FocusRegion::Drives => self.drives_index,
            FocusRegion::Files => self.files_index,
        }
    }

    fn slot(&mut self, region: FocusRegion) -> Option<&mut Option<usize>> {
        match region {
            FocusRegion::Search => None,
            FocusRegion::Drives => Some(&mut self.drives_index),
            FocusRegion::Files => Some(&mut self.files_index),
        }
    }

    /// Set the focused index, clamped into `[0, len - 1]` (unset when empty)
    pub fn set_focused_index(&mut self, region: FocusRegion, index: usize, len: usize) {
        if let Some(slot) = self.slot(region) {
            *slot = clamp(index, len);
        }
    }

    /// Move the focused index by `delta`, clamped, without wraparound.
    ///
    /// An unset index lands on the first item.
    pub fn move_index(&mut self, region: FocusRegion, delta: isize, len: usize) {
        if let Some(slot) = self.slot(region) {
            *slot = match *slot {
                Some(current) => clamp(current.saturating_add_signed(delta), len),
                None => clamp(0, len),
            };
        }
    }

    /// Re-clamp after a list changed length
    pub fn clamp_to(&mut self, region: FocusRegion, len: usize) {
        if let Some(slot) = self.slot(region) {
            *slot = clamp(slot.unwrap_or(0), len);
        }
    }

    /// Clear the focused index of a list region
    pub fn reset_index(&mut self, region: FocusRegion, len: usize) {
        self.set_focused_index(region, 0, len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let focus = FocusTracker::new();
        assert_eq!(focus.current_region(), FocusRegion::Search);
        assert_eq!(focus.current_index(FocusRegion::Drives), None);
        assert_eq!(focus.current_index(FocusRegion::Files), None);
    }

    #[test]
    fn test_region_cycle_is_a_strict_three_cycle() {
        let mut region = FocusRegion::Search;
        let mut seen = vec![region];
        for _ in 0..3 {
            region = region.next();
            seen.push(region);
        }
        assert_eq!(
            seen,
            vec![
                FocusRegion::Search,
                FocusRegion::Drives,
                FocusRegion::Files,
                FocusRegion::Search
            ]
        );
        for r in [FocusRegion::Search, FocusRegion::Drives, FocusRegion::Files] {
            assert_eq!(r.next().prev(), r);
            assert_ne!(r.next(), r.prev());
        }
    }

    #[test]
    fn test_set_index_clamps() {
        let mut focus = FocusTracker::new();
        focus.set_focused_index(FocusRegion::Files, 10, 3);
        assert_eq!(focus.current_index(FocusRegion::Files), Some(2));
        focus.set_focused_index(FocusRegion::Files, 1, 0);
        assert_eq!(focus.current_index(FocusRegion::Files), None);
    }

    #[test]
    fn test_move_index_no_wraparound() {
        let mut focus = FocusTracker::new();
        focus.set_focused_index(FocusRegion::Drives, 0, 3);
        focus.move_index(FocusRegion::Drives, -1, 3);
        assert_eq!(focus.current_index(FocusRegion::Drives), Some(0));

        focus.set_focused_index(FocusRegion::Drives, 2, 3);
        focus.move_index(FocusRegion::Drives, 1, 3);
        assert_eq!(focus.current_index(FocusRegion::Drives), Some(2));

        focus.move_index(FocusRegion::Drives, -1, 3);
        assert_eq!(focus.current_index(FocusRegion::Drives), Some(1));
    }

    #[test]
    fn test_move_from_unset_lands_on_first() {
        let mut focus = FocusTracker::new();
        focus.move_index(FocusRegion::Files, 1, 5);
        assert_eq!(focus.current_index(FocusRegion::Files), Some(0));
        focus.move_index(FocusRegion::Files, 1, 0);
        assert_eq!(focus.current_index(FocusRegion::Files), None);
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut focus = FocusTracker::new();
        focus.set_focused_index(FocusRegion::Files, 7, 10);
        focus.clamp_to(FocusRegion::Files, 4);
        assert_eq!(focus.current_index(FocusRegion::Files), Some(3));
        focus.clamp_to(FocusRegion::Files, 0);
        assert_eq!(focus.current_index(FocusRegion::Files), None);
    }

    #[test]
    fn test_search_region_has_no_index() {
        let mut focus = FocusTracker::new();
        focus.set_focused_index(FocusRegion::Search, 3, 5);
        assert_eq!(focus.current_index(FocusRegion::Search), None);
    }
}
