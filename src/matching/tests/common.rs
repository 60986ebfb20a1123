use crate::matching::domain::{
    AccountabilityLevel, FaithSeason, MatchPreference, Member, MemberId, Pod, Stage, TimeSlot,
};

pub(super) fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Baseline profile the scoring tests mutate. Two untouched copies (with
/// distinct ids) are identical in every scored field and saturate the faith
/// support synergy, so a peer/peer pair scores exactly 100.
pub(super) fn member(id: &str) -> Member {
    Member {
        id: MemberId(id.to_string()),
        first_name: String::new(),
        last_name: String::new(),
        stage: Stage::College,
        major: "Computer Science".to_string(),
        institution: "State U".to_string(),
        linkedin_url: String::new(),
        faith_season: FaithSeason::GrowingConsistent,
        spiritual_support_needs: tags(&["mentorship", "accountability", "prayer_partners"]),
        tech_interests: tags(&["rust", "backend"]),
        career_goals: tags(&["swe_faang"]),
        community_environment: tags(&["small_groups"]),
        personality_words: tags(&["curious", "driven"]),
        habits: tags(&["morning_prayer", "gym"]),
        accountability_level: AccountabilityLevel::Weekly,
        pods: vec![Pod::Debug, Pod::PrReview],
        timezone_offset_hours: -6,
        availability_slots: vec![TimeSlot::WeekdayEvenings, TimeSlot::Flexible],
        match_preference: MatchPreference::Peer,
        hobbies: tags(&["climbing", "board_games"]),
        sports_they_watch: tags(&["NFL"]),
        joined_at: None,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
