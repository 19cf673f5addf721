// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration badge shown next to each result.

use std::fmt;

/// How hard the repair loop had to work, from `min(iterations - 1, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTier {
    FirstPass,
    Repaired,
    Struggled,
    Exhausted,
}

impl BadgeTier {
    pub fn color(self) -> &'static str {
        match self {
            BadgeTier::FirstPass => "#6366f1",
            BadgeTier::Repaired => "#10b981",
            BadgeTier::Struggled => "#f59e0b",
            BadgeTier::Exhausted => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBadge {
    pub iterations: u32,
}

impl IterationBadge {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn tier(&self) -> BadgeTier {
        match self.iterations.saturating_sub(1).min(3) {
            0 => BadgeTier::FirstPass,
            1 => BadgeTier::Repaired,
            2 => BadgeTier::Struggled,
            _ => BadgeTier::Exhausted,
        }
    }
}

impl fmt::Display for IterationBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.iterations == 1 {
            write!(f, "1 pass")
        } else {
            write!(f, "{} iterations", self.iterations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(IterationBadge::new(1).to_string(), "1 pass");
        assert_eq!(IterationBadge::new(2).to_string(), "2 iterations");
        assert_eq!(IterationBadge::new(7).to_string(), "7 iterations");
    }

    #[test]
    fn tiers_saturate() {
        assert_eq!(IterationBadge::new(1).tier(), BadgeTier::FirstPass);
        assert_eq!(IterationBadge::new(2).tier(), BadgeTier::Repaired);
        assert_eq!(IterationBadge::new(3).tier(), BadgeTier::Struggled);
        assert_eq!(IterationBadge::new(4).tier(), BadgeTier::Exhausted);
        assert_eq!(IterationBadge::new(40).tier(), BadgeTier::Exhausted);
        assert_eq!(IterationBadge::new(4).tier().color(), "#ef4444");
    }
}
