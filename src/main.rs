use clap::{Args, Parser, Subcommand};
use disciple_match::config::AppConfig;
use disciple_match::error::AppError;
use disciple_match::matching::{
    recommend_for_member, score_breakdown, MatchBreakdown, Member, MemberDirectory,
    Recommendations, RosterImporter,
};
use disciple_match::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Accountability Match Engine",
    about = "Score and rank accountability-partner matches from a roster export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the best accountability matches for one member
    Rank(RankArgs),
    /// Score a single pair of members with the full factor breakdown
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Roster CSV export with one row per onboarded member
    #[arg(long)]
    roster: PathBuf,
    /// Member id to rank matches for
    #[arg(long)]
    member_id: String,
    /// Override the configured number of matches to surface
    #[arg(long)]
    limit: Option<usize>,
    /// Optional workspace directory CSV used to print chat profile links
    #[arg(long)]
    directory: Option<PathBuf>,
    /// Emit the ranking as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Roster CSV export with one row per onboarded member
    #[arg(long)]
    roster: PathBuf,
    /// First member id
    #[arg(long)]
    member_a: String,
    /// Second member id
    #[arg(long)]
    member_b: String,
    /// Emit the breakdown as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Rank(args) => run_rank(args, &config),
        Command::Score(args) => run_score(args),
    }
}

fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.roster)?;
    info!(pool = roster.len(), "roster loaded");

    let target = find_member(&roster, &args.member_id)?;

    let mut policy = config.matching.policy();
    if let Some(limit) = args.limit {
        policy.match_limit = limit;
    }

    let recommendations = recommend_for_member(target, &roster, policy);
    info!(
        matches = recommendations.matches.len(),
        pool = recommendations.pool_size,
        "ranking complete"
    );

    let directory = match args.directory {
        Some(path) => Some(MemberDirectory::from_path(path)?),
        None => None,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        render_recommendations(target, &recommendations, directory.as_ref());
    }

    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let roster = RosterImporter::from_path(&args.roster)?;
    let a = find_member(&roster, &args.member_a)?;
    let b = find_member(&roster, &args.member_b)?;

    let breakdown = score_breakdown(a, b);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        render_breakdown(a, b, &breakdown);
    }

    Ok(())
}

fn find_member<'a>(roster: &'a [Member], member_id: &str) -> Result<&'a Member, AppError> {
    roster
        .iter()
        .find(|member| member.id.0 == member_id)
        .ok_or_else(|| AppError::UnknownMember {
            member_id: member_id.to_string(),
        })
}

fn render_recommendations(
    target: &Member,
    recommendations: &Recommendations,
    directory: Option<&MemberDirectory>,
) {
    println!(
        "Accountability matches for {} ({})",
        target.display_name(),
        target.id.0
    );
    println!("Roster size: {}", recommendations.pool_size);

    if recommendations.matches.is_empty() {
        println!("No matches yet - not enough members in the pool.");
        return;
    }

    for (position, candidate) in recommendations.matches.iter().enumerate() {
        let member = &candidate.member;
        println!(
            "{}. {} ({}) - {:.1} [{}]",
            position + 1,
            member.display_name(),
            member.id.0,
            candidate.score,
            candidate.tier.label()
        );

        let profile = directory
            .and_then(|directory| directory.profile_url(&member.first_name, &member.last_name));
        if let Some(url) = profile {
            println!("   profile: {url}");
        }
    }
}

fn render_breakdown(a: &Member, b: &Member, breakdown: &MatchBreakdown) {
    println!(
        "Pairwise score for {} and {}",
        a.display_name(),
        b.display_name()
    );

    for component in &breakdown.components {
        println!(
            "- {}: {:.2} x {:.1} = {:.2}",
            component.factor.label(),
            component.subscore,
            component.factor.weight(),
            component.points
        );
    }

    println!(
        "Total: {:.1} [{}]",
        breakdown.total,
        breakdown.tier.label()
    );
}
