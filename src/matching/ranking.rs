use serde::{Deserialize, Serialize};

use super::domain::{MatchTier, Member};
use super::scoring::{classify_match, match_score};

/// A candidate scored against one target member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub member: Member,
    pub score: f64,
    pub tier: MatchTier,
}

/// Scores every candidate against the target and returns them sorted by
/// descending score. The target never matches itself; candidates sharing its
/// id are dropped. Equal scores keep their relative input order (the sort is
/// stable, no secondary key).
pub fn rank_matches_for_member(target: &Member, candidates: &[Member]) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = candidates
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| {
            let score = match_score(target, candidate);
            ScoredCandidate {
                member: candidate.clone(),
                score,
                tier: classify_match(score),
            }
        })
        .collect();

    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
    ranked
}

/// Cutoffs governing how many recommendations are surfaced per member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Maximum number of matches to return.
    pub match_limit: usize,
    /// Below this roster size no recommendations are made at all.
    pub minimum_pool: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            match_limit: 3,
            minimum_pool: 5,
        }
    }
}

/// Recommendations for one member plus the roster statistics callers surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub matches: Vec<ScoredCandidate>,
    pub pool_size: usize,
}

/// Applies the ranker under a [`MatchPolicy`]. `roster` is the full member
/// pool, target included; the pool-size floor counts the target, matching the
/// onboarding flow that held recommendations back until enough members had
/// joined.
pub fn recommend_for_member(
    target: &Member,
    roster: &[Member],
    policy: MatchPolicy,
) -> Recommendations {
    let pool_size = roster.len();

    if pool_size < policy.minimum_pool {
        return Recommendations {
            matches: Vec::new(),
            pool_size,
        };
    }

    let mut matches = rank_matches_for_member(target, roster);
    matches.truncate(policy.match_limit);

    Recommendations { matches, pool_size }
}
