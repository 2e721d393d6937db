// ABOUTME: Closed enumeration of countable exercises and the external alias table
// ABOUTME: Resolves any spelling of an exercise name to one canonical kind or to unknown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exercises the engine knows how to count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExerciseKind {
    /// Right elbow raised above the right shoulder
    #[serde(rename = "arm_raises")]
    ArmRaise,
    /// Arms overhead with legs apart, then closed
    #[serde(rename = "jumping_jacks")]
    JumpingJacks,
    /// Right knee bent below 100 degrees, then straightened
    #[serde(rename = "squats")]
    Squats,
    /// Hands brought down to the feet from the front
    #[serde(rename = "toe_touch_front")]
    ToeTouchFront,
    /// Alternating lunges, counted per leg
    #[serde(rename = "lunges")]
    Lunges,
    /// Hand to opposite foot
    #[serde(rename = "toe_touches_sides")]
    ToeTouchesSides,
    /// Both wrists raised above the head, then lowered
    #[serde(rename = "arm_stretches")]
    ArmStretches,
    /// Elbows to knees while standing
    #[serde(rename = "cross_standing_crunches")]
    CrossStandingCrunch,
    /// One elbow to the same-side knee while standing
    #[serde(rename = "side_standing_crunches")]
    SideStandingCrunch,
}

/// External spellings accepted for each kind
///
/// Every entry maps to exactly one kind; the canonical key is always listed.
const ALIASES: [(&str, ExerciseKind); 14] = [
    ("arm_raises", ExerciseKind::ArmRaise),
    ("arms_raise", ExerciseKind::ArmRaise),
    ("jumping_jacks", ExerciseKind::JumpingJacks),
    ("squats", ExerciseKind::Squats),
    ("toe_touch_front", ExerciseKind::ToeTouchFront),
    ("lunges", ExerciseKind::Lunges),
    ("toe_touch_intersected", ExerciseKind::ToeTouchesSides),
    ("toe_touches_sides", ExerciseKind::ToeTouchesSides),
    ("arms_stretching", ExerciseKind::ArmStretches),
    ("arm_stretches", ExerciseKind::ArmStretches),
    ("standing_crunch_cross", ExerciseKind::CrossStandingCrunch),
    ("cross_standing_crunches", ExerciseKind::CrossStandingCrunch),
    ("standing_crunch_side", ExerciseKind::SideStandingCrunch),
    ("side_standing_crunches", ExerciseKind::SideStandingCrunch),
];

impl ExerciseKind {
    /// Number of kinds
    pub const COUNT: usize = 9;

    /// Every kind, in table order
    pub const ALL: [Self; Self::COUNT] = [
        Self::ArmRaise,
        Self::JumpingJacks,
        Self::Squats,
        Self::ToeTouchFront,
        Self::Lunges,
        Self::ToeTouchesSides,
        Self::ArmStretches,
        Self::CrossStandingCrunch,
        Self::SideStandingCrunch,
    ];

    /// Slot of this kind in fixed-size tables
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical key, as used in counter snapshots
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ArmRaise => "arm_raises",
            Self::JumpingJacks => "jumping_jacks",
            Self::Squats => "squats",
            Self::ToeTouchFront => "toe_touch_front",
            Self::Lunges => "lunges",
            Self::ToeTouchesSides => "toe_touches_sides",
            Self::ArmStretches => "arm_stretches",
            Self::CrossStandingCrunch => "cross_standing_crunches",
            Self::SideStandingCrunch => "side_standing_crunches",
        }
    }

    /// Whether this kind keeps separate left/right counters
    #[must_use]
    pub const fn is_sided(self) -> bool {
        matches!(self, Self::Lunges)
    }

    /// Resolve an external exercise name
    ///
    /// Matching ignores ASCII case and surrounding whitespace. `None` is the
    /// unknown classification; it is not an error.
    #[must_use]
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|&(_, kind)| kind)
    }

    /// All accepted external names, canonical keys included
    pub fn aliases() -> impl Iterator<Item = &'static str> {
        ALIASES.iter().map(|&(alias, _)| alias)
    }

    /// External names that resolve to this kind
    pub fn aliases_of(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |&&(_, kind)| kind == self)
            .map(|&(alias, _)| alias)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_resolves_to_exactly_one_kind() {
        for alias in ExerciseKind::aliases() {
            let owners = ExerciseKind::ALL
                .iter()
                .filter(|kind| kind.aliases_of().any(|a| a == alias))
                .count();
            assert_eq!(owners, 1, "alias {alias} must belong to one kind");
            assert!(ExerciseKind::resolve(alias).is_some());
        }
    }

    #[test]
    fn test_canonical_key_is_an_alias() {
        for kind in ExerciseKind::ALL {
            assert_eq!(ExerciseKind::resolve(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_alternate_spellings() {
        assert_eq!(
            ExerciseKind::resolve("arms_raise"),
            Some(ExerciseKind::ArmRaise)
        );
        assert_eq!(
            ExerciseKind::resolve("toe_touch_intersected"),
            Some(ExerciseKind::ToeTouchesSides)
        );
        assert_eq!(
            ExerciseKind::resolve("standing_crunch_side"),
            Some(ExerciseKind::SideStandingCrunch)
        );
        assert_eq!(
            ExerciseKind::resolve("  Squats "),
            Some(ExerciseKind::Squats)
        );
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(ExerciseKind::resolve("burpees"), None);
        assert_eq!(ExerciseKind::resolve(""), None);
    }

    #[test]
    fn test_serde_uses_canonical_key() {
        for kind in ExerciseKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }

    #[test]
    fn test_table_order_matches_index() {
        for (slot, kind) in ExerciseKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), slot);
        }
    }
}
