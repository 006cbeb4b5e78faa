/*
Step Patterns
=============

A pattern is an ordered list of steps, each step a bit mask over timbres:
bit i set means timbre i triggers on that step. Patterns are built at setup
time and immutable afterwards; the sequencer only ever reads them.

The `drum_pattern!` macro lays a pattern out as a grid, one row per timbre,
which reads like a drum machine's front panel:

    let rock = drum_pattern! {
        [x . . . x . . .],   // timbre 0 (kick)
        [. . x . . . x .],   // timbre 1 (snare)
        [x x x x x x x x],   // timbre 2 (hat)
    };
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit mask of timbres triggering on one step.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMask(pub u32);

impl StepMask {
    pub const EMPTY: StepMask = StepMask(0);

    /// Does this step trigger the given timbre?
    #[inline]
    pub fn contains(self, timbre: usize) -> bool {
        timbre < 32 && self.0 & (1 << timbre) != 0
    }

    /// Timbres 32 and up do not fit the mask and are ignored, matching
    /// `contains`.
    #[inline]
    pub fn with(self, timbre: usize) -> Self {
        if timbre < 32 {
            StepMask(self.0 | (1 << timbre))
        } else {
            self
        }
    }
}

/// An immutable event sequence, selected by index from a `PatternBank`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Pattern {
    steps: Vec<StepMask>,
}

impl Pattern {
    pub fn new(steps: Vec<StepMask>) -> Self {
        Self { steps }
    }

    /// Build from raw masks, least-significant bit = timbre 0.
    pub fn from_masks(masks: &[u32]) -> Self {
        Self {
            steps: masks.iter().map(|&m| StepMask(m)).collect(),
        }
    }

    /// Build from one row of hits per timbre. Every row must have the same
    /// number of steps.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let len = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut steps = vec![StepMask::EMPTY; len];

        for (timbre, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                len,
                "all rows of a pattern must have the same step count"
            );
            for (step, &hit) in row.iter().enumerate() {
                if hit {
                    steps[step] = steps[step].with(timbre);
                }
            }
        }

        Self { steps }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn step(&self, index: usize) -> StepMask {
        self.steps[index]
    }
}

/// The set of selectable patterns, keyed by pattern index.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct PatternBank {
    patterns: Vec<Pattern>,
}

impl PatternBank {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }
}

/// Build a `Pattern` from a grid of `x` (hit) and `.` (rest) cells, one row
/// per timbre. Setup-time only; the result never reallocates.
#[macro_export]
macro_rules! drum_pattern {
    ($([$($cell:tt)*]),+ $(,)?) => {
        $crate::sequencing::Pattern::from_rows(&[
            $(vec![$($crate::drum_pattern!(@cell $cell)),*]),+
        ])
    };

    (@cell x) => { true };
    (@cell X) => { true };
    (@cell .) => { false };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_contains_set_timbres() {
        let mask = StepMask(0b0000_0101);
        assert!(mask.contains(0));
        assert!(!mask.contains(1));
        assert!(mask.contains(2));
        assert!(!mask.contains(31));
        assert!(!mask.contains(64)); // Out of range, never panics
    }

    #[test]
    fn with_ignores_timbres_past_the_mask_width() {
        let mask = StepMask::EMPTY.with(31).with(32).with(64);
        assert!(mask.contains(31));
        assert_eq!(mask, StepMask(1 << 31));
    }

    #[test]
    fn from_masks_preserves_order_and_length() {
        let p = Pattern::from_masks(&[0b01, 0b10, 0b11]);
        assert_eq!(p.len(), 3);
        assert!(p.step(0).contains(0));
        assert!(p.step(1).contains(1));
        assert!(p.step(2).contains(0) && p.step(2).contains(1));
    }

    #[test]
    fn from_rows_transposes_to_masks() {
        let p = Pattern::from_rows(&[
            vec![true, false, false, false],
            vec![false, false, true, false],
        ]);

        assert_eq!(p.len(), 4);
        assert_eq!(p.step(0), StepMask(0b01));
        assert_eq!(p.step(1), StepMask::EMPTY);
        assert_eq!(p.step(2), StepMask(0b10));
    }

    #[test]
    #[should_panic(expected = "same step count")]
    fn ragged_rows_panic_at_setup() {
        let _ = Pattern::from_rows(&[vec![true, false], vec![true]]);
    }

    #[test]
    fn drum_pattern_macro_builds_grid() {
        let p = drum_pattern! {
            [x . . . x . . .],
            [. . x . . . x .],
            [x x x x x x x x],
        };

        assert_eq!(p.len(), 8);
        assert_eq!(p.step(0), StepMask(0b101));
        assert_eq!(p.step(2), StepMask(0b110));
        assert_eq!(p.step(5), StepMask(0b100));
    }

    #[test]
    fn bank_selects_by_index() {
        let bank = PatternBank::new(vec![
            Pattern::from_masks(&[0b1]),
            Pattern::from_masks(&[0b10, 0b01]),
        ]);

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(1).unwrap().len(), 2);
        assert!(bank.get(5).is_none());
    }
}
