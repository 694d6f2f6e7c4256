use std::fmt;
use std::str::FromStr;

use crate::board::GameState;
use crate::engine::utils::tree_complexity;

/// How many turns (one placement plus one hand-over each) a search may
/// look ahead before falling back to the cutoff heuristic.
///
/// `Unbounded` orders above every `Limited` depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
    Limited(u16),
    Unbounded,
}

impl Depth {
    #[inline(always)]
    pub fn reached(&self, depth: u16) -> bool {
        match self {
            Depth::Limited(bound) => depth >= *bound,
            Depth::Unbounded => false,
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Depth::Limited(d) => write!(f, "{}", d),
            Depth::Unbounded => write!(f, "inf"),
        }
    }
}

// 6!^2: finish the game once six cells or fewer are left
pub const DEFAULT_BUDGET: u128 = 518_400;

/// Chooses the search depth from the size of what is left to search.
/// Evaluated once per decision, never inside the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DepthPolicy {
    /// Always search to the same depth. `Limited(0)` is searched as
    /// `Limited(1)`, like every other policy.
    FixedDepth(Depth),
    /// Search to the end when `tree_complexity` fits under the threshold,
    /// otherwise look one turn ahead.
    FixedComplexity(u128),
    /// Spend the budget on as many turns as it buys; see [`find_depth`].
    VariableComplexity(u128),
}

impl Default for DepthPolicy {
    fn default() -> Self {
        DepthPolicy::VariableComplexity(DEFAULT_BUDGET)
    }
}

impl DepthPolicy {
    /// Depth bound for a search starting at `pos`. Never below one turn,
    /// so the root always yields a move.
    pub fn depth_for(&self, pos: &GameState) -> Depth {
        let empty = pos.empty_cells();
        let depth = match *self {
            DepthPolicy::FixedDepth(depth) => depth,
            DepthPolicy::FixedComplexity(threshold) => {
                if tree_complexity(empty) <= threshold {
                    Depth::Unbounded
                } else {
                    Depth::Limited(1)
                }
            }
            DepthPolicy::VariableComplexity(budget) => find_depth(empty, budget),
        };
        depth.max(Depth::Limited(1))
    }
}

/// Largest k such that remaining² · (remaining-1)² · … over k factors stays
/// within `budget`. A budget that covers every remaining turn is
/// `Unbounded`, which keeps the result non-decreasing as the board fills.
pub fn find_depth(remaining: u32, budget: u128) -> Depth {
    let mut product: u128 = 1;
    let mut k: u16 = 0;
    for i in (1..=remaining as u128).rev() {
        product = product.saturating_mul(i * i);
        if product > budget {
            return Depth::Limited(k);
        }
        k += 1;
    }
    Depth::Unbounded
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePolicyError {
    #[error("unknown depth policy '{0}' (expected depth:N, unbounded, complexity:N or budget:N)")]
    Unknown(String),
    #[error("could not parse '{0}' as a number")]
    Number(String),
}

impl FromStr for DepthPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "unbounded" {
            return Ok(DepthPolicy::FixedDepth(Depth::Unbounded));
        }
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| ParsePolicyError::Unknown(s.to_string()))?;
        let number = |v: &str| -> Result<u128, ParsePolicyError> {
            v.trim()
                .parse::<u128>()
                .map_err(|_| ParsePolicyError::Number(v.to_string()))
        };
        match kind {
            "depth" => {
                let d = number(value)?;
                let d = u16::try_from(d).map_err(|_| ParsePolicyError::Number(value.to_string()))?;
                Ok(DepthPolicy::FixedDepth(Depth::Limited(d)))
            }
            "complexity" => Ok(DepthPolicy::FixedComplexity(number(value)?)),
            "budget" => Ok(DepthPolicy::VariableComplexity(number(value)?)),
            _ => Err(ParsePolicyError::Unknown(s.to_string())),
        }
    }
}
