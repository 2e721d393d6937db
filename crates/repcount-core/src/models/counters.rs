// ABOUTME: Repetition counter values and the all-exercise snapshot
// ABOUTME: Tagged scalar-or-sided counter shape with JSON as integer or {left, right}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::exercise::ExerciseKind;

/// Repetition count for one exercise
///
/// Serialized as a bare integer for scalar counters and as
/// `{"left": n, "right": m}` for sided ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CounterValue {
    /// Single counter
    Scalar(u32),
    /// Independent per-side counters
    Sided {
        /// Left side repetitions
        left: u32,
        /// Right side repetitions
        right: u32,
    },
}

impl CounterValue {
    /// Zeroed counter with the shape `kind` uses
    #[must_use]
    pub const fn zero_for(kind: ExerciseKind) -> Self {
        if kind.is_sided() {
            Self::Sided { left: 0, right: 0 }
        } else {
            Self::Scalar(0)
        }
    }

    /// Reported total; sided counters report their sum
    #[must_use]
    pub const fn total(self) -> u32 {
        match self {
            Self::Scalar(count) => count,
            Self::Sided { left, right } => left.saturating_add(right),
        }
    }

    /// Same shape with every count set to zero
    #[must_use]
    pub const fn zeroed(self) -> Self {
        match self {
            Self::Scalar(_) => Self::Scalar(0),
            Self::Sided { .. } => Self::Sided { left: 0, right: 0 },
        }
    }

    /// Whether every count is zero
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.total() == 0
    }
}

/// Counters of every exercise at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterSnapshot(BTreeMap<ExerciseKind, CounterValue>);

impl CounterSnapshot {
    /// Counter for one exercise
    #[must_use]
    pub fn get(&self, kind: ExerciseKind) -> Option<CounterValue> {
        self.0.get(&kind).copied()
    }

    /// Reported total for one exercise, zero if absent
    #[must_use]
    pub fn total(&self, kind: ExerciseKind) -> u32 {
        self.get(kind).map_or(0, CounterValue::total)
    }

    /// Whether every counter is zero
    #[must_use]
    pub fn all_zero(&self) -> bool {
        self.0.values().all(|value| value.is_zero())
    }

    /// Entries in exercise order
    pub fn iter(&self) -> impl Iterator<Item = (ExerciseKind, CounterValue)> + '_ {
        self.0.iter().map(|(&kind, &value)| (kind, value))
    }

    /// Number of exercises in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(ExerciseKind, CounterValue)> for CounterSnapshot {
    fn from_iter<I: IntoIterator<Item = (ExerciseKind, CounterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sided_total_is_sum() {
        let value = CounterValue::Sided { left: 3, right: 4 };
        assert_eq!(value.total(), 7);
        assert_eq!(value.zeroed(), CounterValue::Sided { left: 0, right: 0 });
    }

    #[test]
    fn test_zero_for_shape() {
        assert_eq!(
            CounterValue::zero_for(ExerciseKind::Lunges),
            CounterValue::Sided { left: 0, right: 0 }
        );
        assert_eq!(
            CounterValue::zero_for(ExerciseKind::Squats),
            CounterValue::Scalar(0)
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot: CounterSnapshot = [
            (ExerciseKind::Squats, CounterValue::Scalar(2)),
            (ExerciseKind::Lunges, CounterValue::Sided { left: 1, right: 0 }),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["squats"], 2);
        assert_eq!(json["lunges"]["left"], 1);
        assert_eq!(json["lunges"]["right"], 0);

        let parsed: CounterSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
