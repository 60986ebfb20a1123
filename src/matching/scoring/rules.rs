use std::collections::HashSet;

use super::super::domain::{AccountabilityLevel, FaithSeason, MatchPreference, Member, Stage};
use super::super::overlap::jaccard;

const NEED_MENTORSHIP: &str = "mentorship";
const NEED_ACCOUNTABILITY: &str = "accountability";
const NEED_PRAYER_PARTNERS: &str = "prayer_partners";
const NEED_BIBLE_STUDY_PARTNERS: &str = "bible_study_partners";

fn stage_rank(stage: Stage) -> u8 {
    match stage {
        Stage::College | Stage::Transfer | Stage::GapYear => 1,
        Stage::NewGrad | Stage::Other => 2,
    }
}

/// Stage and mentorship fit. An ordered rule list where the first matching
/// rule wins; the mentor/mentee rules are direction-sensitive and must stay
/// split by which side is seeking the mentor.
pub(crate) fn stage_fit(a: &Member, b: &Member) -> f64 {
    let rank_a = stage_rank(a.stage);
    let rank_b = stage_rank(b.stage);
    let same_stage = rank_a == rank_b;

    let a_wants_peer = matches!(
        a.match_preference,
        MatchPreference::Peer | MatchPreference::NoPreference
    );
    let b_wants_peer = matches!(
        b.match_preference,
        MatchPreference::Peer | MatchPreference::NoPreference
    );
    let a_wants_mentor = a.match_preference == MatchPreference::Mentor;
    let a_wants_mentee = a.match_preference == MatchPreference::Mentee;
    let b_wants_mentor = b.match_preference == MatchPreference::Mentor;
    let b_wants_mentee = b.match_preference == MatchPreference::Mentee;

    // Perfect peer match
    if a_wants_peer && b_wants_peer && same_stage {
        return 1.0;
    }

    // A wants a mentor, B wants a mentee
    if a_wants_mentor && b_wants_mentee {
        return if rank_b <= rank_a { 1.0 } else { 0.7 };
    }

    // B wants a mentor, A wants a mentee
    if b_wants_mentor && a_wants_mentee {
        return if rank_a <= rank_b { 1.0 } else { 0.7 };
    }

    // One flexible, the other with a mentor/mentee preference
    if (a_wants_peer && (b_wants_mentor || b_wants_mentee))
        || (b_wants_peer && (a_wants_mentor || a_wants_mentee))
    {
        return 0.7;
    }

    0.2
}

pub(crate) fn pods_overlap(a: &Member, b: &Member) -> f64 {
    jaccard(&a.pods, &b.pods)
}

pub(crate) fn tech_career_fit(a: &Member, b: &Member) -> f64 {
    let tech_overlap = jaccard(&a.tech_interests, &b.tech_interests);
    let goals_overlap = jaccard(&a.career_goals, &b.career_goals);

    let mut points = 10.0 * tech_overlap + 5.0 * goals_overlap;

    let major_a = a.major.to_lowercase();
    let major_b = b.major.to_lowercase();
    if !major_a.is_empty() && major_a == major_b {
        points += 1.0; // small bonus
    }

    points.min(15.0) / 15.0
}

fn faith_level(season: FaithSeason) -> u8 {
    match season {
        FaithSeason::Exploring => 1,
        FaithSeason::RecentlyCommitted => 2,
        FaithSeason::GrowingConsistent => 3,
        FaithSeason::MatureMentoring => 4,
    }
}

fn season_alignment(a: &Member, b: &Member) -> f64 {
    let distance = faith_level(a.faith_season).abs_diff(faith_level(b.faith_season));

    match distance {
        0 => 1.0,
        1 => 0.7,
        2 => 0.4,
        _ => 0.2,
    }
}

fn is_mature(member: &Member) -> bool {
    matches!(
        member.faith_season,
        FaithSeason::GrowingConsistent | FaithSeason::MatureMentoring
    )
}

fn has_need(member: &Member, need: &str) -> bool {
    member
        .spiritual_support_needs
        .iter()
        .any(|tag| tag == need)
}

fn support_synergy(a: &Member, b: &Member) -> f64 {
    let mut raw = 0.0;

    if has_need(a, NEED_MENTORSHIP) && is_mature(b) {
        raw += 0.3;
    }
    if has_need(b, NEED_MENTORSHIP) && is_mature(a) {
        raw += 0.3;
    }

    for need in [
        NEED_ACCOUNTABILITY,
        NEED_PRAYER_PARTNERS,
        NEED_BIBLE_STUDY_PARTNERS,
    ] {
        if has_need(a, need) && has_need(b, need) {
            raw += 0.3;
        }
    }

    (raw / 0.9).min(1.0)
}

pub(crate) fn faith_fit(a: &Member, b: &Member) -> f64 {
    let season_points = 9.0 * season_alignment(a, b);
    let support_points = 6.0 * support_synergy(a, b);
    (season_points + support_points) / 15.0
}

fn accountability_level(level: AccountabilityLevel) -> u8 {
    match level {
        AccountabilityLevel::Light => 1,
        AccountabilityLevel::Weekly | AccountabilityLevel::Group | AccountabilityLevel::Unsure => 2,
        AccountabilityLevel::Daily => 3,
    }
}

fn accountability_closeness(a: &Member, b: &Member) -> f64 {
    let diff = accountability_level(a.accountability_level)
        .abs_diff(accountability_level(b.accountability_level));

    match diff {
        0 => 1.0,
        1 => 0.7,
        _ => 0.3,
    }
}

pub(crate) fn habits_accountability_fit(a: &Member, b: &Member) -> f64 {
    let habit_points = 10.0 * jaccard(&a.habits, &b.habits);
    let cadence_points = 5.0 * accountability_closeness(a, b);
    (habit_points + cadence_points) / 15.0
}

fn timezone_closeness(a: &Member, b: &Member) -> f64 {
    let diff = (a.timezone_offset_hours - b.timezone_offset_hours).abs();

    if diff == 0 {
        1.0
    } else if diff <= 2 {
        0.7
    } else if diff <= 5 {
        0.4
    } else {
        0.2
    }
}

pub(crate) fn availability_fit(a: &Member, b: &Member) -> f64 {
    let timezone_points = 4.0 * timezone_closeness(a, b);
    let slot_points = 6.0 * jaccard(&a.availability_slots, &b.availability_slots);
    (timezone_points + slot_points) / 10.0
}

fn personality_words_overlap(a: &Member, b: &Member) -> f64 {
    let set_a: HashSet<String> = a
        .personality_words
        .iter()
        .map(|word| word.to_lowercase().trim().to_string())
        .collect();
    let set_b: HashSet<String> = b
        .personality_words
        .iter()
        .map(|word| word.to_lowercase().trim().to_string())
        .collect();

    match set_a.intersection(&set_b).count() {
        0 => 0.0,
        1 => 0.5,
        _ => 1.0,
    }
}

pub(crate) fn personality_fit(a: &Member, b: &Member) -> f64 {
    let environment_points = 3.5 * jaccard(&a.community_environment, &b.community_environment);
    let word_points = 1.5 * personality_words_overlap(a, b);
    (environment_points + word_points) / 5.0
}

fn sports_overlap(a: &Member, b: &Member) -> f64 {
    let a_none = a.sports_they_watch.is_empty();
    let b_none = b.sports_they_watch.is_empty();

    if a_none && b_none {
        return 0.0;
    }
    if a_none || b_none {
        return 0.2;
    }

    let overlap = jaccard(&a.sports_they_watch, &b.sports_they_watch);

    if overlap >= 1.0 {
        1.0
    } else if overlap >= 0.5 {
        0.7
    } else if overlap > 0.0 {
        0.4
    } else {
        0.3
    }
}

pub(crate) fn social_chemistry_fit(a: &Member, b: &Member) -> f64 {
    let hobby_points = 6.0 * jaccard(&a.hobbies, &b.hobbies);
    let sports_points = 4.0 * sports_overlap(a, b);
    (hobby_points + sports_points) / 10.0
}

#[cfg(test)]
pub(crate) fn sports_overlap_for_tests(a: &Member, b: &Member) -> f64 {
    sports_overlap(a, b)
}

#[cfg(test)]
pub(crate) fn accountability_closeness_for_tests(a: &Member, b: &Member) -> f64 {
    accountability_closeness(a, b)
}
