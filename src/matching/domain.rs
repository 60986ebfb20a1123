use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for onboarded members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub String);

/// Life stage reported during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    College,
    NewGrad,
    Transfer,
    GapYear,
    Other,
}

impl Stage {
    /// Parses an onboarding tag; unrecognized values fall back to `Other`.
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "college" => Self::College,
            "new_grad" => Self::NewGrad,
            "transfer" => Self::Transfer,
            "gap_year" => Self::GapYear,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Stage::College => "college",
            Stage::NewGrad => "new_grad",
            Stage::Transfer => "transfer",
            Stage::GapYear => "gap_year",
            Stage::Other => "other",
        }
    }
}

/// Ordered spiritual-maturity proxy collected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaithSeason {
    Exploring,
    RecentlyCommitted,
    GrowingConsistent,
    MatureMentoring,
}

impl FaithSeason {
    /// Parses an onboarding tag; unrecognized values fall back to the
    /// mid-scale `RecentlyCommitted`.
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "exploring" => Self::Exploring,
            "growing_consistent" => Self::GrowingConsistent,
            "mature_mentoring" => Self::MatureMentoring,
            _ => Self::RecentlyCommitted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FaithSeason::Exploring => "exploring",
            FaithSeason::RecentlyCommitted => "recently_committed",
            FaithSeason::GrowingConsistent => "growing_consistent",
            FaithSeason::MatureMentoring => "mature_mentoring",
        }
    }
}

/// Desired relationship role for the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPreference {
    Peer,
    Mentor,
    Mentee,
    NoPreference,
}

impl MatchPreference {
    /// Parses an onboarding tag; unrecognized values fall back to
    /// `NoPreference`.
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "peer" => Self::Peer,
            "mentor" => Self::Mentor,
            "mentee" => Self::Mentee,
            _ => Self::NoPreference,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchPreference::Peer => "peer",
            MatchPreference::Mentor => "mentor",
            MatchPreference::Mentee => "mentee",
            MatchPreference::NoPreference => "no_preference",
        }
    }
}

/// Desired check-in cadence with an accountability partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountabilityLevel {
    Light,
    Weekly,
    Daily,
    Group,
    Unsure,
}

impl AccountabilityLevel {
    /// Parses an onboarding tag; unrecognized values fall back to `Unsure`,
    /// which scores at the middle of the cadence scale.
    pub fn from_tag(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "weekly" => Self::Weekly,
            "daily" => Self::Daily,
            "group" => Self::Group,
            _ => Self::Unsure,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AccountabilityLevel::Light => "light",
            AccountabilityLevel::Weekly => "weekly",
            AccountabilityLevel::Daily => "daily",
            AccountabilityLevel::Group => "group",
            AccountabilityLevel::Unsure => "unsure",
        }
    }
}

/// Optional affinity group a member may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pod {
    Deploy,
    Debug,
    PrReview,
    SystemsIntegrity,
}

impl Pod {
    /// Parses an onboarding tag; unrecognized pods are dropped by intake.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deploy" => Some(Self::Deploy),
            "debug" => Some(Self::Debug),
            "pr_review" => Some(Self::PrReview),
            "systems_integrity" => Some(Self::SystemsIntegrity),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Pod::Deploy => "deploy",
            Pod::Debug => "debug",
            Pod::PrReview => "pr_review",
            Pod::SystemsIntegrity => "systems_integrity",
        }
    }
}

/// Recurring weekly window a member can meet in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    WeekdayMornings,
    WeekdayEvenings,
    WeekendMornings,
    WeekendEvenings,
    Flexible,
    AsyncOnly,
}

impl TimeSlot {
    /// Parses an onboarding tag; unrecognized slots are dropped by intake.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekday_mornings" => Some(Self::WeekdayMornings),
            "weekday_evenings" => Some(Self::WeekdayEvenings),
            "weekend_mornings" => Some(Self::WeekendMornings),
            "weekend_evenings" => Some(Self::WeekendEvenings),
            "flexible" => Some(Self::Flexible),
            "async_only" => Some(Self::AsyncOnly),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimeSlot::WeekdayMornings => "weekday_mornings",
            TimeSlot::WeekdayEvenings => "weekday_evenings",
            TimeSlot::WeekendMornings => "weekend_mornings",
            TimeSlot::WeekendEvenings => "weekend_evenings",
            TimeSlot::Flexible => "flexible",
            TimeSlot::AsyncOnly => "async_only",
        }
    }
}

/// Coarse compatibility bucket derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Good,
    Soft,
    Weak,
}

impl MatchTier {
    pub const fn label(self) -> &'static str {
        match self {
            MatchTier::Strong => "strong",
            MatchTier::Good => "good",
            MatchTier::Soft => "soft",
            MatchTier::Weak => "weak",
        }
    }
}

/// A single onboarded profile. Read-only input to the matching engine; tag
/// lists carry no duplicates and `timezone_offset_hours` stays in [-12, 14],
/// both enforced by roster intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,

    pub stage: Stage,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub linkedin_url: String,

    pub faith_season: FaithSeason,
    #[serde(default)]
    pub spiritual_support_needs: Vec<String>,

    #[serde(default)]
    pub tech_interests: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,

    #[serde(default)]
    pub community_environment: Vec<String>,
    #[serde(default)]
    pub personality_words: Vec<String>,

    #[serde(default)]
    pub habits: Vec<String>,
    pub accountability_level: AccountabilityLevel,

    #[serde(default)]
    pub pods: Vec<Pod>,

    pub timezone_offset_hours: i32,
    #[serde(default)]
    pub availability_slots: Vec<TimeSlot>,

    pub match_preference: MatchPreference,

    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub sports_they_watch: Vec<String>,

    #[serde(default)]
    pub joined_at: Option<NaiveDate>,
}

impl Member {
    pub fn display_name(&self) -> String {
        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            self.id.0.clone()
        } else {
            trimmed.to_string()
        }
    }
}
