mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{MatchTier, Member};

#[cfg(test)]
pub(crate) use rules::{
    accountability_closeness_for_tests, availability_fit, faith_fit, habits_accountability_fit,
    personality_fit, pods_overlap, social_chemistry_fit, sports_overlap_for_tests, stage_fit,
    tech_career_fit,
};

/// The eight rubric dimensions contributing to a pairwise score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    StageFit,
    PodsOverlap,
    TechCareer,
    Faith,
    HabitsAccountability,
    Availability,
    Personality,
    SocialChemistry,
}

impl MatchFactor {
    /// Points the factor contributes at a perfect sub-score.
    pub const fn weight(self) -> f64 {
        match self {
            MatchFactor::StageFit => 20.0,
            MatchFactor::PodsOverlap => 15.0,
            MatchFactor::TechCareer => 15.0,
            MatchFactor::Faith => 15.0,
            MatchFactor::HabitsAccountability => 15.0,
            MatchFactor::Availability => 10.0,
            MatchFactor::Personality => 5.0,
            MatchFactor::SocialChemistry => 5.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchFactor::StageFit => "stage & mentorship fit",
            MatchFactor::PodsOverlap => "pods overlap",
            MatchFactor::TechCareer => "tech interests & career goals",
            MatchFactor::Faith => "faith season & support needs",
            MatchFactor::HabitsAccountability => "habits & accountability",
            MatchFactor::Availability => "availability & time zone",
            MatchFactor::Personality => "personality & community fit",
            MatchFactor::SocialChemistry => "social chemistry",
        }
    }
}

const FACTORS: [MatchFactor; 8] = [
    MatchFactor::StageFit,
    MatchFactor::PodsOverlap,
    MatchFactor::TechCareer,
    MatchFactor::Faith,
    MatchFactor::HabitsAccountability,
    MatchFactor::Availability,
    MatchFactor::Personality,
    MatchFactor::SocialChemistry,
];

fn factor_subscore(factor: MatchFactor, a: &Member, b: &Member) -> f64 {
    match factor {
        MatchFactor::StageFit => rules::stage_fit(a, b),
        MatchFactor::PodsOverlap => rules::pods_overlap(a, b),
        MatchFactor::TechCareer => rules::tech_career_fit(a, b),
        MatchFactor::Faith => rules::faith_fit(a, b),
        MatchFactor::HabitsAccountability => rules::habits_accountability_fit(a, b),
        MatchFactor::Availability => rules::availability_fit(a, b),
        MatchFactor::Personality => rules::personality_fit(a, b),
        MatchFactor::SocialChemistry => rules::social_chemistry_fit(a, b),
    }
}

/// One weighted contribution to a pairwise score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    /// Normalized sub-score in [0, 1] before weighting.
    pub subscore: f64,
    /// Weighted points this factor contributed to the total.
    pub points: f64,
}

/// Full audit trail for one pairwise comparison. The component points sum to
/// the total before clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub total: f64,
    pub tier: MatchTier,
    pub components: Vec<ScoreComponent>,
}

/// Aggregate compatibility score for a pair of members, clamped to [0, 100].
pub fn match_score(a: &Member, b: &Member) -> f64 {
    let total: f64 = FACTORS
        .iter()
        .map(|factor| factor.weight() * factor_subscore(*factor, a, b))
        .sum();

    total.clamp(0.0, 100.0)
}

/// Buckets a score into a display tier. Boundaries are inclusive on the
/// lower end and evaluated top-down.
pub fn classify_match(score: f64) -> MatchTier {
    if score >= 80.0 {
        MatchTier::Strong
    } else if score >= 65.0 {
        MatchTier::Good
    } else if score >= 50.0 {
        MatchTier::Soft
    } else {
        MatchTier::Weak
    }
}

/// Scores a pair while retaining each factor's contribution.
pub fn score_breakdown(a: &Member, b: &Member) -> MatchBreakdown {
    let mut components = Vec::with_capacity(FACTORS.len());
    let mut total = 0.0;

    for factor in FACTORS {
        let subscore = factor_subscore(factor, a, b);
        let points = factor.weight() * subscore;
        total += points;
        components.push(ScoreComponent {
            factor,
            subscore,
            points,
        });
    }

    let total = total.clamp(0.0, 100.0);

    MatchBreakdown {
        total,
        tier: classify_match(total),
        components,
    }
}
