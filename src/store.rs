use crate::types::{Accuracy, SegmentType};
use crate::{FieldError, WallClock};

/// Error type for composing a date-time out of segment values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// At least one active segment has no value yet. Recoverable: ask again
    /// after more input.
    #[error("Incomplete date-time: {} unset", join_segments(.missing))]
    IncompleteSegments { missing: Vec<SegmentType> },

    /// Every active segment is set but the values do not form a real
    /// calendar date (e.g. February 31).
    #[error(transparent)]
    InvalidCalendarDate(#[from] FieldError),
}

fn join_segments(segments: &[SegmentType]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Holds the per-segment values of one editing session.
///
/// A dumb container: `set` does not validate, bounds checking belongs to the
/// editor driving it. The composite date-time is never stored; it is
/// recomputed from the segments by [`SegmentStore::to_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentStore {
    values: [Option<u16>; SegmentType::COUNT],
    accuracy: Accuracy,
}

impl SegmentStore {
    /// Creates an empty store. Segments outside `accuracy` start forced to
    /// zero; everything else is unset.
    pub fn new(accuracy: Accuracy) -> Self {
        let mut store = Self {
            values: [None; SegmentType::COUNT],
            accuracy,
        };
        store.normalize();
        store
    }

    /// Returns the value of `segment`, `None` while unset
    #[inline]
    pub const fn get(&self, segment: SegmentType) -> Option<u16> {
        self.values[segment.index()]
    }

    /// Unconditionally overwrites `segment` with `value`.
    /// The caller is responsible for having applied bounds checking.
    #[inline]
    pub fn set(&mut self, segment: SegmentType, value: u16) {
        self.values[segment.index()] = Some(value);
    }

    /// Returns `segment` to the unset state
    #[inline]
    pub fn clear(&mut self, segment: SegmentType) {
        self.values[segment.index()] = None;
    }

    /// Clears every segment, then re-applies the forced zeros for segments
    /// outside the configured accuracy
    pub fn reset(&mut self) {
        self.values = [None; SegmentType::COUNT];
        self.normalize();
    }

    /// The accuracy this session collects
    #[inline]
    pub const fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    /// Changes the accuracy and re-normalizes the forced-zero segments
    pub fn set_accuracy(&mut self, accuracy: Accuracy) {
        self.accuracy = accuracy;
        self.normalize();
    }

    /// Forces every segment outside the accuracy to zero, leaving active
    /// segments untouched. Idempotent.
    pub fn normalize(&mut self) {
        for segment in SegmentType::ALL {
            if !self.accuracy.includes(segment) {
                self.values[segment.index()] = Some(0);
            }
        }
    }

    /// Decomposes a concrete date-time into per-segment values, then
    /// normalizes for the configured accuracy
    pub fn seed(&mut self, value: &WallClock) {
        for segment in SegmentType::ALL {
            self.values[segment.index()] = Some(value.field(segment));
        }
        self.normalize();
    }

    /// Active segments that still have no value, in editing order
    pub fn missing(&self) -> Vec<SegmentType> {
        SegmentType::ALL
            .into_iter()
            .filter(|segment| self.accuracy.includes(*segment) && self.get(*segment).is_none())
            .collect()
    }

    /// True once every active segment has a value
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Projects the segments into a concrete date-time.
    ///
    /// Segments outside the accuracy always contribute zero. Calendar
    /// validity (day-in-month, leap years) is only checked here, never at
    /// segment level.
    ///
    /// # Errors
    /// `IncompleteSegments` while any active segment is unset;
    /// `InvalidCalendarDate` when the values do not form a real date.
    pub fn to_date(&self) -> Result<WallClock, ComposeError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ComposeError::IncompleteSegments { missing });
        }

        let value_of = |segment: SegmentType| {
            if self.accuracy.includes(segment) {
                self.get(segment).unwrap_or(0)
            } else {
                0
            }
        };

        Ok(WallClock::from_segments(
            value_of(SegmentType::Year),
            value_of(SegmentType::Month),
            value_of(SegmentType::Day),
            value_of(SegmentType::Hour),
            value_of(SegmentType::Minute),
            value_of(SegmentType::Second),
            value_of(SegmentType::Millisecond),
        )?)
    }
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new(Accuracy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::wall;

    fn fill_date_and_time(store: &mut SegmentStore) {
        store.set(SegmentType::Year, 2023);
        store.set(SegmentType::Month, 1);
        store.set(SegmentType::Day, 2);
        store.set(SegmentType::Hour, 8);
        store.set(SegmentType::Minute, 30);
    }

    #[test]
    fn test_new_store_is_incomplete() {
        let store = SegmentStore::new(Accuracy::Minute);
        assert!(!store.is_complete());
        assert_eq!(
            store.missing(),
            vec![
                SegmentType::Year,
                SegmentType::Month,
                SegmentType::Day,
                SegmentType::Hour,
                SegmentType::Minute,
            ]
        );
    }

    #[test]
    fn test_new_store_forces_inactive_to_zero() {
        let store = SegmentStore::new(Accuracy::Minute);
        assert_eq!(store.get(SegmentType::Second), Some(0));
        assert_eq!(store.get(SegmentType::Millisecond), Some(0));
        assert_eq!(store.get(SegmentType::Minute), None);
    }

    #[test]
    fn test_set_get_clear() {
        let mut store = SegmentStore::new(Accuracy::Millisecond);
        assert_eq!(store.get(SegmentType::Hour), None);

        store.set(SegmentType::Hour, 8);
        assert_eq!(store.get(SegmentType::Hour), Some(8));

        store.set(SegmentType::Hour, 9);
        assert_eq!(store.get(SegmentType::Hour), Some(9));

        store.clear(SegmentType::Hour);
        assert_eq!(store.get(SegmentType::Hour), None);
    }

    #[test]
    fn test_to_date_incomplete_lists_missing() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        store.set(SegmentType::Year, 2023);
        store.set(SegmentType::Month, 1);

        let result = store.to_date();
        assert_eq!(
            result,
            Err(ComposeError::IncompleteSegments {
                missing: vec![SegmentType::Day, SegmentType::Hour, SegmentType::Minute],
            })
        );
    }

    #[test]
    fn test_to_date_minute_accuracy_fills_zeros() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        fill_date_and_time(&mut store);

        let value = store.to_date().expect("all active segments are set");
        assert_eq!(value, wall(2023, 1, 2, 8, 30, 0, 0));
        assert_eq!(value.to_string(), "2023-01-02T08:30:00.000");
    }

    #[test]
    fn test_to_date_millisecond_accuracy_requires_all_segments() {
        let mut store = SegmentStore::new(Accuracy::Millisecond);
        fill_date_and_time(&mut store);

        assert_eq!(
            store.to_date(),
            Err(ComposeError::IncompleteSegments {
                missing: vec![SegmentType::Second, SegmentType::Millisecond],
            })
        );

        store.set(SegmentType::Second, 45);
        store.set(SegmentType::Millisecond, 123);
        assert_eq!(store.to_date(), Ok(wall(2023, 1, 2, 8, 30, 45, 123)));
    }

    #[test]
    fn test_to_date_invalid_calendar_date() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        store.set(SegmentType::Year, 2023);
        store.set(SegmentType::Month, 2);
        store.set(SegmentType::Day, 31);
        store.set(SegmentType::Hour, 0);
        store.set(SegmentType::Minute, 0);

        let result = store.to_date();
        assert!(matches!(
            result,
            Err(ComposeError::InvalidCalendarDate(FieldError::InvalidDay {
                year: 2023,
                month: 2,
                day: 31,
            }))
        ));
    }

    #[test]
    fn test_incomplete_and_invalid_are_distinct() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        store.set(SegmentType::Year, 2023);
        store.set(SegmentType::Month, 2);
        store.set(SegmentType::Day, 31);

        // Still missing hour and minute: incompleteness wins
        assert!(matches!(
            store.to_date(),
            Err(ComposeError::IncompleteSegments { .. })
        ));

        store.set(SegmentType::Hour, 0);
        store.set(SegmentType::Minute, 0);
        assert!(matches!(
            store.to_date(),
            Err(ComposeError::InvalidCalendarDate(_))
        ));
    }

    #[test]
    fn test_reset_clears_to_unset() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        fill_date_and_time(&mut store);
        assert!(store.is_complete());

        store.reset();
        assert!(!store.is_complete());
        assert_eq!(store.get(SegmentType::Year), None);
        assert!(matches!(
            store.to_date(),
            Err(ComposeError::IncompleteSegments { .. })
        ));
        // Forced zeros survive the reset
        assert_eq!(store.get(SegmentType::Second), Some(0));
    }

    #[test]
    fn test_seed_decomposes_and_normalizes() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        store.seed(&wall(2023, 6, 15, 9, 45, 30, 250));

        assert_eq!(store.get(SegmentType::Year), Some(2023));
        assert_eq!(store.get(SegmentType::Month), Some(6));
        assert_eq!(store.get(SegmentType::Day), Some(15));
        assert_eq!(store.get(SegmentType::Hour), Some(9));
        assert_eq!(store.get(SegmentType::Minute), Some(45));
        // Finer than the accuracy: truncated to zero
        assert_eq!(store.get(SegmentType::Second), Some(0));
        assert_eq!(store.get(SegmentType::Millisecond), Some(0));

        assert_eq!(store.to_date(), Ok(wall(2023, 6, 15, 9, 45, 0, 0)));
    }

    #[test]
    fn test_seed_full_accuracy_round_trips() {
        let mut store = SegmentStore::new(Accuracy::Millisecond);
        let value = wall(2023, 6, 15, 9, 45, 30, 250);
        store.seed(&value);
        assert_eq!(store.to_date(), Ok(value));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for accuracy in [Accuracy::Minute, Accuracy::Second, Accuracy::Millisecond] {
            let mut store = SegmentStore::new(accuracy);
            store.set(SegmentType::Year, 2023);
            store.set(SegmentType::Second, 45);
            store.set(SegmentType::Millisecond, 123);

            store.normalize();
            let once = store.clone();
            store.normalize();
            assert_eq!(store, once, "normalize must be idempotent at {accuracy}");
        }
    }

    #[test]
    fn test_normalize_overwrites_inactive_input() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        store.set(SegmentType::Second, 45);
        store.normalize();
        assert_eq!(store.get(SegmentType::Second), Some(0));
    }

    #[test]
    fn test_inactive_segments_never_reach_the_composite() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        fill_date_and_time(&mut store);
        // Bypass normalize: even a raw out-of-accuracy write must not leak
        store.set(SegmentType::Second, 45);

        let value = store.to_date().expect("active segments are set");
        assert_eq!(value.second(), 0);
    }

    #[test]
    fn test_set_accuracy_narrowing_forces_zeros() {
        let mut store = SegmentStore::new(Accuracy::Millisecond);
        fill_date_and_time(&mut store);
        store.set(SegmentType::Second, 45);
        store.set(SegmentType::Millisecond, 123);

        store.set_accuracy(Accuracy::Minute);
        assert_eq!(store.get(SegmentType::Second), Some(0));
        assert_eq!(store.get(SegmentType::Millisecond), Some(0));
        assert_eq!(store.to_date(), Ok(wall(2023, 1, 2, 8, 30, 0, 0)));
    }

    #[test]
    fn test_set_accuracy_widening_keeps_zeros() {
        let mut store = SegmentStore::new(Accuracy::Minute);
        fill_date_and_time(&mut store);
        assert!(store.is_complete());

        store.set_accuracy(Accuracy::Millisecond);
        // The forced zeros become real values; the session stays complete
        assert!(store.is_complete());
        assert_eq!(store.to_date(), Ok(wall(2023, 1, 2, 8, 30, 0, 0)));
    }

    #[test]
    fn test_default_store() {
        let store = SegmentStore::default();
        assert_eq!(store.accuracy(), Accuracy::Minute);
        assert!(!store.is_complete());
    }
}
