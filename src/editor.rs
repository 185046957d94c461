use crate::store::{ComposeError, SegmentStore};
use crate::types::{Accuracy, SegmentType};
use crate::WallClock;
use serde::{Deserialize, Serialize};

/// Construction-time configuration for one editing session.
/// Passed explicitly; the editor holds no ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Finest unit the session collects
    pub accuracy: Accuracy,
    /// Move focus to the next active segment when a segment auto-commits
    pub auto_advance: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::default(),
            auto_advance: true,
        }
    }
}

/// Error type for keystroke application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Input byte is not a decimal digit. State is untouched.
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// The targeted segment is forced to zero at the current accuracy and
    /// cannot be edited.
    #[error("Segment {0} is not editable at the current accuracy")]
    InactiveSegment(SegmentType),
}

/// What one accepted keystroke did. Returned from every successful
/// [`SegmentEditor::apply_digit`] call; this is the change signal an
/// embedding component reacts to by recomputing the composite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOutcome {
    /// The segment is still accumulating digits
    Accumulating { segment: SegmentType, value: u16 },
    /// The segment committed, possibly moving focus onward
    Committed {
        segment: SegmentType,
        value: u16,
        advanced_to: Option<SegmentType>,
    },
}

/// Editing progress of a single segment between commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditState {
    Empty,
    /// `digits` counts keystrokes, not numeric width, so leading zeros
    /// count toward the segment's display width
    Partial { value: u16, digits: usize },
    Committed(u16),
}

/// Translates digit keystrokes into segment values.
///
/// Owns the session's [`SegmentStore`] and the per-segment editing state.
/// One keystroke is processed at a time; every accepted digit writes the
/// pending value through to the store, so the composite projection is
/// always current.
///
/// Rollover between segments is never performed: a numeric Day of 31 is
/// accepted for any month, and calendar validity surfaces only from
/// [`SegmentEditor::to_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentEditor {
    store: SegmentStore,
    states: [EditState; SegmentType::COUNT],
    focus: SegmentType,
    auto_advance: bool,
}

impl SegmentEditor {
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Self {
            store: SegmentStore::new(config.accuracy),
            states: [EditState::Empty; SegmentType::COUNT],
            focus: SegmentType::Year,
            auto_advance: config.auto_advance,
        };
        editor.sync_forced_zeros();
        editor
    }

    /// The segment keystrokes currently target
    #[inline]
    pub const fn focus(&self) -> SegmentType {
        self.focus
    }

    /// Moves focus, committing any pending digits of the segment left behind
    pub fn set_focus(&mut self, segment: SegmentType) {
        if segment != self.focus {
            self.commit(self.focus);
            self.focus = segment;
        }
    }

    /// Read access to the underlying segment values
    #[inline]
    pub const fn store(&self) -> &SegmentStore {
        &self.store
    }

    /// Returns the stored value of `segment`, `None` while unset
    #[inline]
    pub const fn value(&self, segment: SegmentType) -> Option<u16> {
        self.store.get(segment)
    }

    #[inline]
    pub const fn accuracy(&self) -> Accuracy {
        self.store.accuracy()
    }

    /// Changes the accuracy mid-session. Segments dropping out of the
    /// accuracy become committed zeros; segments coming back in keep the
    /// zero they were forced to.
    pub fn set_accuracy(&mut self, accuracy: Accuracy) {
        self.store.set_accuracy(accuracy);
        self.sync_forced_zeros();
        if !accuracy.includes(self.focus) {
            // Finest segment that is always collected
            self.focus = SegmentType::Minute;
        }
    }

    /// Applies one keystroke to the focused segment
    pub fn type_digit(&mut self, digit: u8) -> Result<DigitOutcome, EditError> {
        self.apply_digit(self.focus, digit)
    }

    /// Applies one decimal digit to `segment`.
    ///
    /// Targeting a segment other than the focused one first commits the
    /// focused segment's pending digits, then moves focus.
    ///
    /// Accumulation rules:
    /// - a digit on an empty or committed segment starts a fresh partial;
    /// - appending a digit that would exceed the segment maximum discards
    ///   the accumulation and restarts from the new digit;
    /// - reaching the segment's digit width, or a value no further digit
    ///   could extend, commits immediately and (when configured) advances
    ///   focus to the next active segment.
    ///
    /// # Errors
    /// `InvalidDigit` for input outside 0-9, `InactiveSegment` when the
    /// accuracy forces the segment to zero. Neither mutates state.
    pub fn apply_digit(
        &mut self,
        segment: SegmentType,
        digit: u8,
    ) -> Result<DigitOutcome, EditError> {
        if digit > 9 {
            return Err(EditError::InvalidDigit(digit));
        }
        if !self.store.accuracy().includes(segment) {
            return Err(EditError::InactiveSegment(segment));
        }
        self.set_focus(segment);

        let bounds = segment.bounds();
        let digit = u16::from(digit);

        let (value, digits, appended) = match self.states[segment.index()] {
            EditState::Empty | EditState::Committed(_) => (digit.min(bounds.max), 1, false),
            EditState::Partial { value, digits } => {
                let candidate = value * 10 + digit;
                if candidate > bounds.max {
                    // Overflow: discard the accumulation, restart from this digit
                    (digit.min(bounds.max), 1, false)
                } else {
                    (candidate, digits + 1, true)
                }
            }
        };

        // An appended digit that fills the width, or leaves a value no
        // further digit could extend, is final. A fresh first digit never
        // commits, so an overflowed segment can keep restarting.
        if appended && (digits >= segment.max_digits() || value * 10 > bounds.max) {
            let committed = bounds.clamp(value);
            self.states[segment.index()] = EditState::Committed(committed);
            self.store.set(segment, committed);

            let advanced_to = if self.auto_advance {
                self.next_active(segment)
            } else {
                None
            };
            if let Some(next) = advanced_to {
                self.focus = next;
            }
            return Ok(DigitOutcome::Committed {
                segment,
                value: committed,
                advanced_to,
            });
        }

        self.states[segment.index()] = EditState::Partial { value, digits };
        self.store.set(segment, bounds.clamp(value));
        Ok(DigitOutcome::Accumulating { segment, value })
    }

    /// Finalizes any pending digits of `segment`, clamping into bounds.
    /// An empty segment stays unset; a committed one is left alone.
    pub fn commit(&mut self, segment: SegmentType) {
        if let EditState::Partial { value, .. } = self.states[segment.index()] {
            let committed = segment.bounds().clamp(value);
            self.states[segment.index()] = EditState::Committed(committed);
            self.store.set(segment, committed);
        }
    }

    /// Commits the focused segment, as on navigation away from the input
    pub fn blur(&mut self) {
        self.commit(self.focus);
    }

    /// Clears every segment back to unset and returns focus to Year
    pub fn reset(&mut self) {
        self.store.reset();
        self.states = [EditState::Empty; SegmentType::COUNT];
        self.focus = SegmentType::Year;
        self.sync_forced_zeros();
    }

    /// Seeds the session from an externally provided value; every segment
    /// becomes committed and focus returns to Year
    pub fn load(&mut self, value: &WallClock) {
        self.store.seed(value);
        for segment in SegmentType::ALL {
            let seeded = self.store.get(segment).unwrap_or(0);
            self.states[segment.index()] = EditState::Committed(seeded);
        }
        self.focus = SegmentType::Year;
    }

    /// Rendered form of `segment`: digits zero-padded to the segment's
    /// width, the placeholder while unset, and a padded zero when the
    /// accuracy forces the segment
    pub fn display(&self, segment: SegmentType) -> String {
        if !self.store.accuracy().includes(segment) {
            return segment.pad(0);
        }
        match self.states[segment.index()] {
            EditState::Empty => segment.placeholder(),
            EditState::Partial { value, .. } | EditState::Committed(value) => segment.pad(value),
        }
    }

    /// True once every active segment has a value
    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    /// Projects the current segments into a concrete date-time.
    ///
    /// # Errors
    /// See [`SegmentStore::to_date`].
    pub fn to_date(&self) -> Result<WallClock, ComposeError> {
        self.store.to_date()
    }

    /// Next editable segment after `segment`, skipping forced-zero ones
    fn next_active(&self, segment: SegmentType) -> Option<SegmentType> {
        let mut cursor = segment.next();
        while let Some(candidate) = cursor {
            if self.store.accuracy().includes(candidate) {
                return Some(candidate);
            }
            cursor = candidate.next();
        }
        None
    }

    /// Marks every forced-zero segment as committed so its display and
    /// state agree with the store
    fn sync_forced_zeros(&mut self) {
        for segment in SegmentType::ALL {
            if !self.store.accuracy().includes(segment) {
                self.states[segment.index()] = EditState::Committed(0);
            }
        }
    }
}

impl Default for SegmentEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
