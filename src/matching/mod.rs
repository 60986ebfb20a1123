//! Pairwise compatibility scoring and match ranking for onboarded members.

pub mod directory;
pub mod domain;
mod overlap;
pub mod ranking;
pub mod roster;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use directory::{DirectoryEntry, DirectoryImportError, MemberDirectory};
pub use domain::{
    AccountabilityLevel, FaithSeason, MatchPreference, MatchTier, Member, MemberId, Pod, Stage,
    TimeSlot,
};
pub use overlap::jaccard;
pub use ranking::{
    rank_matches_for_member, recommend_for_member, MatchPolicy, Recommendations, ScoredCandidate,
};
pub use roster::{RosterImportError, RosterImporter};
pub use scoring::{
    classify_match, match_score, score_breakdown, MatchBreakdown, MatchFactor, ScoreComponent,
};
