use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{
    AccountabilityLevel, FaithSeason, MatchPreference, Member, MemberId, Pod, Stage, TimeSlot,
};
use super::normalizer::{clamp_offset, split_tags, split_words, timezone_offset_hours};

pub(crate) fn parse_members<R: Read>(reader: R) -> Result<Vec<Member>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut members = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        if let Some(member) = row.into_member() {
            members.push(member);
        }
    }

    Ok(members)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Member ID", default)]
    member_id: String,
    #[serde(rename = "First Name", default)]
    first_name: String,
    #[serde(rename = "Last Name", default)]
    last_name: String,
    #[serde(rename = "Stage", default)]
    stage: String,
    #[serde(rename = "Major", default)]
    major: String,
    #[serde(rename = "Institution", default)]
    institution: String,
    #[serde(rename = "LinkedIn", default)]
    linkedin_url: String,
    #[serde(rename = "Faith Season", default)]
    faith_season: String,
    #[serde(rename = "Spiritual Support Needs", default)]
    spiritual_support_needs: String,
    #[serde(rename = "Tech Interests", default)]
    tech_interests: String,
    #[serde(rename = "Career Goals", default)]
    career_goals: String,
    #[serde(rename = "Community Environment", default)]
    community_environment: String,
    #[serde(rename = "Personality Words", default)]
    personality_words: String,
    #[serde(rename = "Habits", default)]
    habits: String,
    #[serde(rename = "Accountability Level", default)]
    accountability_level: String,
    #[serde(rename = "Pods", default)]
    pods: String,
    #[serde(rename = "Timezone", default)]
    timezone: String,
    #[serde(
        rename = "Timezone Offset Hours",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    timezone_offset: Option<String>,
    #[serde(rename = "Availability Slots", default)]
    availability_slots: String,
    #[serde(rename = "Match Preference", default)]
    match_preference: String,
    #[serde(rename = "Hobbies", default)]
    hobbies: String,
    #[serde(rename = "Sports", default)]
    sports_they_watch: String,
    #[serde(rename = "Joined At", default, deserialize_with = "empty_string_as_none")]
    joined_at: Option<String>,
}

impl RosterRow {
    /// Rows without a member id cannot participate in matching and are
    /// skipped rather than rejected.
    fn into_member(self) -> Option<Member> {
        let id = self.member_id.trim();
        if id.is_empty() {
            return None;
        }

        // An explicit offset column wins over the timezone name.
        let offset = self
            .timezone_offset
            .as_deref()
            .and_then(|value| value.trim().parse::<i32>().ok())
            .unwrap_or_else(|| timezone_offset_hours(&self.timezone));

        Some(Member {
            id: MemberId(id.to_string()),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            stage: Stage::from_tag(&self.stage),
            major: self.major.trim().to_string(),
            institution: self.institution.trim().to_string(),
            linkedin_url: self.linkedin_url.trim().to_string(),
            faith_season: FaithSeason::from_tag(&self.faith_season),
            spiritual_support_needs: split_tags(&self.spiritual_support_needs),
            tech_interests: split_tags(&self.tech_interests),
            career_goals: split_tags(&self.career_goals),
            community_environment: split_tags(&self.community_environment),
            personality_words: split_words(&self.personality_words),
            habits: split_tags(&self.habits),
            accountability_level: AccountabilityLevel::from_tag(&self.accountability_level),
            pods: split_enum_tags(&self.pods, Pod::from_tag),
            timezone_offset_hours: clamp_offset(offset),
            availability_slots: split_enum_tags(&self.availability_slots, TimeSlot::from_tag),
            match_preference: MatchPreference::from_tag(&self.match_preference),
            hobbies: split_tags(&self.hobbies),
            sports_they_watch: split_tags(&self.sports_they_watch),
            joined_at: self.joined_at.as_deref().and_then(parse_date),
        })
    }
}

fn split_enum_tags<T: PartialEq>(raw: &str, parse: fn(&str) -> Option<T>) -> Vec<T> {
    let mut values = Vec::new();
    for tag in split_tags(raw) {
        if let Some(value) = parse(&tag) {
            if !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
