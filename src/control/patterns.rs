//! Discrete steering-pattern classifier.
//!
//! A fixed table maps exact 5-bit sensor patterns to hard steering commands
//! for the shapes the continuous corrector handles poorly: sharp turns,
//! T-junctions, line loss, and full-line crossings.  The entries are years
//! of empirically observed readouts from track tuning, not derivations from
//! the position estimate — where the two disagree, the table is
//! authoritative for direction.
//!
//! The raw readout log is kept verbatim (duplicates included) and compiled
//! into a keyed table at startup: consistent duplicates collapse,
//! contradictory ones abort boot.  A long if-else chain would silently
//! shadow a contradicting branch instead.

use core::fmt;

use super::LineSnapshot;

/// A discrete steering command that overrides the PD direction for a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Forward,
    Left,
    Right,
}

impl fmt::Display for Steer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Two table entries disagree about the same sensor pattern.
///
/// Raised at construction, never at runtime — a contradictory table is a
/// build/configuration defect and must abort boot rather than let first
/// match win and mask the later entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConflict {
    pub key: u8,
    pub first: Steer,
    pub second: Steer,
}

impl fmt::Display for PatternConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern {:#07b} mapped to both {} and {}",
            self.key, self.first, self.second
        )
    }
}

/// Raw empirical readout log, `(pattern, command)`, pattern bits ordered
/// far-left to far-right.  Transcribed from track-tuning sessions; the
/// `0b00011` entry was recorded twice and collapses during construction.
/// `0b01010` and `0b01111` never showed up on track and stay unmapped, so
/// the PD correction alone steers them.
const EMPIRICAL_ENTRIES: &[(u8, Steer)] = &[
    (0b00000, Steer::Forward), // line lost — hold course
    (0b11111, Steer::Forward), // full crossing
    (0b11011, Steer::Forward), // crossing with center gap
    (0b10001, Steer::Right),
    (0b00111, Steer::Left),
    (0b00011, Steer::Left),
    (0b00011, Steer::Left),
    (0b00001, Steer::Left),
    (0b10111, Steer::Left),
    (0b11110, Steer::Right),
    (0b11100, Steer::Right),
    (0b11000, Steer::Right),
    (0b10000, Steer::Right),
    (0b00010, Steer::Left),
    (0b00100, Steer::Right),
    (0b10100, Steer::Left),
    (0b01000, Steer::Right),
    (0b10011, Steer::Right),
    (0b11001, Steer::Right),
    (0b00101, Steer::Left),
    (0b00110, Steer::Left),
    (0b01001, Steer::Right),
    (0b01011, Steer::Left),
    (0b01100, Steer::Right),
    (0b01101, Steer::Right),
    (0b01110, Steer::Right),
    (0b10010, Steer::Right),
    (0b10101, Steer::Right),
    (0b10110, Steer::Right),
    (0b11010, Steer::Right),
    (0b11101, Steer::Right),
];

/// Keyed lookup table over all 32 possible sensor patterns.
#[derive(Debug)]
pub struct PatternTable {
    commands: [Option<Steer>; 32],
}

impl PatternTable {
    /// Compile an entry list into a keyed table.
    ///
    /// Duplicate entries with the same command collapse; entries that
    /// contradict an earlier one fail with [`PatternConflict`].
    pub fn from_entries(entries: &[(u8, Steer)]) -> Result<Self, PatternConflict> {
        let mut commands = [None; 32];
        for &(key, steer) in entries {
            debug_assert!(key < 32, "pattern key must be 5 bits");
            match commands[usize::from(key & 0b11111)] {
                None => commands[usize::from(key & 0b11111)] = Some(steer),
                Some(existing) if existing == steer => {}
                Some(existing) => {
                    return Err(PatternConflict {
                        key,
                        first: existing,
                        second: steer,
                    });
                }
            }
        }
        Ok(Self { commands })
    }

    /// The track-tuned production table.
    pub fn empirical() -> Result<Self, PatternConflict> {
        Self::from_entries(EMPIRICAL_ENTRIES)
    }

    /// Exact-match lookup.  `None` means no override: the PD correction's
    /// sign governs direction this cycle.
    pub fn classify(&self, snapshot: &LineSnapshot) -> Option<Steer> {
        self.commands[usize::from(snapshot.key())]
    }

    /// Number of mapped patterns.
    pub fn len(&self) -> usize {
        self.commands.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empirical_table_builds_and_collapses_duplicate() {
        let table = PatternTable::empirical().unwrap();
        // 31 raw entries, one verbatim duplicate
        assert_eq!(table.len(), 30);
    }

    #[test]
    fn ambiguous_readings_default_to_forward() {
        let table = PatternTable::empirical().unwrap();
        assert_eq!(table.classify(&LineSnapshot::from_key(0b00000)), Some(Steer::Forward));
        assert_eq!(table.classify(&LineSnapshot::from_key(0b11111)), Some(Steer::Forward));
        assert_eq!(table.classify(&LineSnapshot::from_key(0b11011)), Some(Steer::Forward));
    }

    #[test]
    fn far_left_only_commands_right() {
        let table = PatternTable::empirical().unwrap();
        assert_eq!(table.classify(&LineSnapshot::from_key(0b10000)), Some(Steer::Right));
    }

    #[test]
    fn right_weighted_patterns_command_left() {
        let table = PatternTable::empirical().unwrap();
        for key in [0b00111, 0b00011, 0b00001, 0b00010] {
            assert_eq!(
                table.classify(&LineSnapshot::from_key(key)),
                Some(Steer::Left),
                "key {key:#07b}"
            );
        }
    }

    #[test]
    fn unmapped_patterns_yield_no_override() {
        let table = PatternTable::empirical().unwrap();
        assert_eq!(table.classify(&LineSnapshot::from_key(0b01010)), None);
        assert_eq!(table.classify(&LineSnapshot::from_key(0b01111)), None);
    }

    #[test]
    fn contradictory_entries_rejected() {
        let err = PatternTable::from_entries(&[
            (0b00100, Steer::Left),
            (0b00100, Steer::Right),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PatternConflict {
                key: 0b00100,
                first: Steer::Left,
                second: Steer::Right,
            }
        );
    }

    #[test]
    fn consistent_duplicates_accepted() {
        let table = PatternTable::from_entries(&[
            (0b00100, Steer::Left),
            (0b00100, Steer::Left),
        ])
        .unwrap();
        assert_eq!(table.len(), 1);
    }
}
