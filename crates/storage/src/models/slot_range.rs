use chrono::NaiveTime;

use crate::error::{Result, StorageError};

/// A half-open time interval `[start, end)` used for availability slots.
///
/// The constructor guarantees `start < end`, so every value of this type is a
/// non-empty, well-ordered range. Two ranges conflict exactly when
/// `start < other.end && end > other.start`; back-to-back slots such as
/// 09:00-10:00 and 10:00-11:00 do not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl SlotRange {
    /// Builds a range, rejecting empty or inverted intervals.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if end <= start {
            return Err(StorageError::InvalidTimeRange);
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Standard half-open interval overlap test.
    pub fn overlaps(&self, other: &SlotRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> SlotRange {
        SlotRange::new(t(start.0, start.1), t(end.0, end.1)).unwrap()
    }

    #[test]
    fn test_rejects_empty_range() {
        assert!(matches!(
            SlotRange::new(t(10, 0), t(10, 0)),
            Err(StorageError::InvalidTimeRange)
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(
            SlotRange::new(t(11, 0), t(9, 0)),
            Err(StorageError::InvalidTimeRange)
        ));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        // a < b < c < d: [a,b) and [c,d) never conflict
        let morning = range((9, 0), (10, 0));
        let afternoon = range((14, 0), (15, 0));
        assert!(!morning.overlaps(&afternoon));
        assert!(!afternoon.overlaps(&morning));
    }

    #[test]
    fn test_back_to_back_ranges_do_not_overlap() {
        // Half-open: sharing a boundary is fine
        let first = range((9, 0), (10, 0));
        let second = range((10, 0), (11, 0));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn test_crossing_ranges_overlap() {
        // a < b < c < d: [a,c) and [b,d) always conflict
        let earlier = range((9, 0), (11, 0));
        let later = range((10, 0), (12, 0));
        assert!(earlier.overlaps(&later));
        assert!(later.overlaps(&earlier));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = range((8, 0), (12, 0));
        let inner = range((9, 30), (10, 30));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = range((9, 0), (10, 0));
        let b = range((9, 0), (10, 0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_one_minute_overlap_conflicts() {
        let first = range((9, 0), (10, 1));
        let second = range((10, 0), (11, 0));
        assert!(first.overlaps(&second));
    }
}
