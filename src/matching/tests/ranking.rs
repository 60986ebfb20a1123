use super::common::{assert_close, member, tags};
use crate::matching::domain::{FaithSeason, MatchPreference, MatchTier};
use crate::matching::ranking::{
    rank_matches_for_member, recommend_for_member, MatchPolicy, ScoredCandidate,
};
use crate::matching::scoring::match_score;

#[test]
fn ranking_never_includes_the_target() {
    let target = member("m-1");
    let pool = vec![member("m-1"), member("m-2"), member("m-3")];

    let ranked = rank_matches_for_member(&target, &pool);

    assert_eq!(ranked.len(), 2);
    assert!(ranked
        .iter()
        .all(|candidate| candidate.member.id != target.id));
}

#[test]
fn ranking_sorts_by_descending_score() {
    let target = member("m-1");

    // progressively degrade candidates so their scores separate
    let strong = member("m-2");
    let mut good = member("m-3");
    good.faith_season = FaithSeason::Exploring;
    good.habits = tags(&["journaling"]);
    let mut weak = member("m-4");
    weak.match_preference = MatchPreference::Mentor;
    weak.faith_season = FaithSeason::Exploring;
    weak.habits = Vec::new();
    weak.hobbies = Vec::new();
    weak.tech_interests = Vec::new();
    weak.pods = Vec::new();

    let pool = vec![weak.clone(), strong.clone(), good.clone()];
    let ranked = rank_matches_for_member(&target, &pool);

    assert_eq!(ranked[0].member.id, strong.id);
    assert_eq!(ranked[1].member.id, good.id);
    assert_eq!(ranked[2].member.id, weak.id);
    assert!(ranked[0].score >= ranked[1].score);
    assert!(ranked[1].score >= ranked[2].score);
}

#[test]
fn equal_scores_keep_their_input_order() {
    let target = member("m-1");

    // identical candidates under different ids score identically
    let mut first = member("m-2");
    first.first_name = "First".to_string();
    let mut second = member("m-3");
    second.first_name = "Second".to_string();

    let pool = vec![first.clone(), second.clone()];
    let ranked = rank_matches_for_member(&target, &pool);

    assert_close(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].member.first_name, "First");
    assert_eq!(ranked[1].member.first_name, "Second");
}

#[test]
fn scored_candidates_carry_score_and_tier() {
    let target = member("m-1");
    let candidate = member("m-2");

    let ranked = rank_matches_for_member(&target, &[candidate.clone()]);

    let ScoredCandidate { member, score, tier } = &ranked[0];
    assert_eq!(member.id, candidate.id);
    assert_close(*score, match_score(&target, &candidate));
    assert_eq!(*tier, MatchTier::Strong);
}

#[test]
fn recommendations_hold_back_small_pools() {
    let target = member("m-1");
    let pool = vec![
        member("m-1"),
        member("m-2"),
        member("m-3"),
        member("m-4"),
    ];

    let recommendations = recommend_for_member(&target, &pool, MatchPolicy::default());

    assert!(recommendations.matches.is_empty());
    assert_eq!(recommendations.pool_size, 4);
}

#[test]
fn recommendations_cap_at_the_match_limit() {
    let target = member("m-1");
    let pool: Vec<_> = (1..=6).map(|n| member(&format!("m-{n}"))).collect();

    let recommendations = recommend_for_member(&target, &pool, MatchPolicy::default());

    assert_eq!(recommendations.pool_size, 6);
    assert_eq!(recommendations.matches.len(), 3);
    assert!(recommendations
        .matches
        .iter()
        .all(|candidate| candidate.member.id != target.id));
}

#[test]
fn the_pool_floor_counts_the_target() {
    let target = member("m-1");
    // five members total including the target clears the default floor
    let pool: Vec<_> = (1..=5).map(|n| member(&format!("m-{n}"))).collect();

    let recommendations = recommend_for_member(&target, &pool, MatchPolicy::default());

    assert_eq!(recommendations.pool_size, 5);
    assert_eq!(recommendations.matches.len(), 3);
}

#[test]
fn a_custom_policy_overrides_both_cutoffs() {
    let target = member("m-1");
    let pool: Vec<_> = (1..=3).map(|n| member(&format!("m-{n}"))).collect();
    let policy = MatchPolicy {
        match_limit: 1,
        minimum_pool: 2,
    };

    let recommendations = recommend_for_member(&target, &pool, policy);

    assert_eq!(recommendations.matches.len(), 1);
}
