//! # Command Line Interface
//!
//! Renders the season reports as text tables or JSON.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use player_registry::PositionBucket;
use std::path::PathBuf;
use weekly_loader::WeeklySource;

use crate::engine::StatsEngine;
use crate::models::{PositionCountReport, PositionPointsReport, StarterWeeksReport};

/// Season position reports over weekly MFL exports
#[derive(Parser, Debug)]
#[command(name = "league-stats")]
#[command(about = "Season position reports over weekly MyFantasyLeague exports")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "LEAGUE_STATS_CONFIG", default_value = "league-stats.toml")]
    pub config: PathBuf,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rank players by how often they finished as a weekly starter
    StarterWeeks {
        /// Position code (QB, RB, WR, TE, PK, DB, LB, DL)
        position: String,
    },
    /// Count rostered players per position at the roster week
    PositionCount,
    /// Sum starter points per position over the season
    Points,
    /// Show one player from the directory
    Player {
        /// MFL player ID
        id: u32,
    },
}

/// CLI handler
pub struct CliHandler<S> {
    engine: StatsEngine<S>,
    json: bool,
}

impl<S: WeeklySource> CliHandler<S> {
    pub fn new(engine: StatsEngine<S>, json: bool) -> Self {
        Self { engine, json }
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        println!("{}", self.render(command)?);
        Ok(())
    }

    /// Run a command and render its output
    pub fn render(&self, command: Commands) -> Result<String> {
        match command {
            Commands::StarterWeeks { position } => {
                let bucket = parse_position(&position)?;
                let report = self.engine.starter_weeks(bucket);
                self.output(&report, render_starter_weeks)
            }
            Commands::PositionCount => {
                let report = self.engine.position_count();
                self.output(&report, render_position_count)
            }
            Commands::Points => {
                let report = self.engine.position_points();
                self.output(&report, render_position_points)
            }
            Commands::Player { id } => {
                let player = self.engine.player(id)?;
                if self.json {
                    return Ok(serde_json::to_string_pretty(player)?);
                }
                Ok(format!(
                    "{} ({}) {} -> {} [{}]",
                    player.display_name(),
                    player.id,
                    player.position,
                    player.bucket().label(),
                    player.team.as_deref().unwrap_or("FA")
                ))
            }
        }
    }

    fn output<T: serde::Serialize>(&self, report: &T, render: fn(&T) -> String) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(render(report))
        }
    }
}

fn parse_position(code: &str) -> Result<PositionBucket> {
    let bucket = PositionBucket::from_code(code);
    if bucket.starter_limit().is_none() {
        bail!("unknown position '{code}', expected one of QB, RB, WR, TE, PK, DB, LB, DL");
    }
    Ok(bucket)
}

pub fn render_starter_weeks(report: &StarterWeeksReport) -> String {
    let mut lines = vec![
        format!("{} starter weeks ({} weeks loaded)", report.position.label(), report.weeks_loaded),
        "=".repeat(60),
        format!("{:>4} {:<28} {:>5} {:>6} {:>6} {:>6}", "Rank", "Player", "Grade", "Top12", "Top24", "Top36"),
    ];

    for (i, b) in report.breakdowns.iter().enumerate() {
        lines.push(format!(
            "{:>4} {:<28} {:>5} {:>6} {:>6} {:>6}",
            i + 1,
            b.name,
            b.grade.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string()),
            b.top12_finishes,
            b.top24_finishes,
            b.top36_finishes
        ));
    }

    if report.breakdowns.is_empty() {
        lines.push("No data found".to_string());
    }
    if !report.unknown_players.is_empty() {
        lines.push(format!("Unknown players: {:?}", report.unknown_players));
    }

    lines.join("\n")
}

pub fn render_position_count(report: &PositionCountReport) -> String {
    let mut lines = vec![
        format!(
            "Rostered players, week {} ({} teams, {} leagues)",
            report.week, report.teams_in_play, report.league_count
        ),
        "=".repeat(60),
        format!("{:<20} {:>8} {:>10} {:>12}", "Position", "Count", "Per team", "Per league"),
    ];

    for (bucket, count) in &report.counts {
        lines.push(format!(
            "{:<20} {:>8} {:>10.2} {:>12.2}",
            bucket.label(),
            count,
            report.per_team(*bucket),
            report.per_league(*bucket)
        ));
    }

    if !report.unknown_players.is_empty() {
        lines.push(format!(
            "Unknown players ({} entries): {:?}",
            report.unresolved_entries, report.unknown_players
        ));
    }

    lines.join("\n")
}

pub fn render_position_points(report: &PositionPointsReport) -> String {
    let mut lines = vec![
        format!("Starter points, weeks {}-{}", report.first_week, report.last_week),
        "=".repeat(60),
        format!("{:<20} {:>12} {:>8}", "Position", "Points", "Share"),
    ];

    for (bucket, points) in &report.totals {
        lines.push(format!(
            "{:<20} {:>12.2} {:>7.1}%",
            bucket.label(),
            points,
            report.share(*bucket)
        ));
    }

    if !report.unknown_players.is_empty() {
        lines.push(format!("Unknown starters: {:?}", report.unknown_players));
    }

    lines.join("\n")
}
