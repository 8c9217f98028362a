//! Priority Triangle - command line runner
//!
//! Ranks the alternatives of a delimited table under cost, quality and
//! schedule priorities.
//!
//! Priorities start from an even split. A `--point` on the unit triangle
//! selects them the way a click would; `--cost`, `--quality` and
//! `--schedule` then edit single fields, each rebalancing the other two.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;

use priority_triangle::adapters::{DelimitedTableParser, FileTableSource, TracingEventPublisher};
use priority_triangle::application::{RankAlternativesCommand, RankAlternativesHandler};
use priority_triangle::config::{AppConfig, TriangleConfig};
use priority_triangle::domain::analysis::{RankingPipeline, RankingReport};
use priority_triangle::domain::foundation::{DomainError, ErrorCode};
use priority_triangle::domain::geometry::{Point2D, Triangle};
use priority_triangle::domain::weights::{Channel, ClickOutcome, PrioritySession};
use priority_triangle::telemetry;

/// Height of the equilateral triangle with unit base.
const UNIT_TRIANGLE_HEIGHT: f64 = 0.866_025_403_784_438_6;

#[derive(Parser)]
#[command(name = "priority-triangle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank alternatives under cost, quality and schedule priorities", long_about = None)]
struct Cli {
    /// Delimited table with ZCost, ZQuality, ZSchedule and their s_ columns
    #[arg(long, env = "PRIORITY_TRIANGLE_CSV")]
    csv: PathBuf,

    /// Point on the unit triangle as X,Y (base from (0,0) to (1,0))
    #[arg(long, value_delimiter = ',', num_args = 1, allow_negative_numbers = true)]
    point: Option<Vec<f64>>,

    /// Cost priority in percent
    #[arg(long)]
    cost: Option<f64>,

    /// Quality priority in percent
    #[arg(long)]
    quality: Option<f64>,

    /// Schedule priority in percent
    #[arg(long)]
    schedule: Option<f64>,

    /// Cell delimiter, overriding configuration and detection
    #[arg(long)]
    delimiter: Option<char>,

    /// Configuration file read before environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{}", text),
                    Err(err) => {
                        eprintln!("Failed to serialize report: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = %err.code, "{}", err.message);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, DomainError> {
    AppConfig::load_validated(cli.config.as_deref())
        .map_err(|e| DomainError::new(ErrorCode::ConfigurationError, e.to_string()))
}

fn run(cli: &Cli, config: &AppConfig) -> Result<RankingReport, DomainError> {
    let edits = [
        (Channel::Cost, cli.cost),
        (Channel::Quality, cli.quality),
        (Channel::Schedule, cli.schedule),
    ];
    let session = select_priorities(cli.point.as_deref(), edits, &config.triangle)?;
    eprintln!("{}\n", session.confirmation_summary());
    let weights = session.confirm()?;

    let delimiter = match cli.delimiter {
        Some(c) => Some(c),
        None => config
            .table
            .delimiter()
            .map_err(|e| DomainError::new(ErrorCode::ConfigurationError, e.to_string()))?,
    };
    let parser = match delimiter {
        Some(c) => DelimitedTableParser::with_delimiter(c),
        None => DelimitedTableParser::new(),
    };

    let handler = RankAlternativesHandler::new(
        Arc::new(FileTableSource::new(&cli.csv).with_parser(parser)),
        Arc::new(TracingEventPublisher::new()),
        RankingPipeline::new(config.table.resolver(), config.scoring.to_policy()),
    );

    let result = handler.handle(RankAlternativesCommand { weights })?;
    Ok(result.report)
}

/// Replays the command line on a session over the unit triangle.
///
/// The point acts as a click; the edits are then applied in the given order,
/// each rebalancing the other two channels.
fn select_priorities(
    point: Option<&[f64]>,
    edits: [(Channel, Option<f64>); 3],
    config: &TriangleConfig,
) -> Result<PrioritySession, DomainError> {
    let triangle = Triangle::new(
        Point2D::new(0.5, UNIT_TRIANGLE_HEIGHT),
        Point2D::new(0.0, 0.0),
        Point2D::new(1.0, 0.0),
    )?;
    let vertex_order = config
        .vertex_order()
        .map_err(|e| DomainError::new(ErrorCode::ConfigurationError, e.to_string()))?;
    let mut session =
        PrioritySession::new(triangle, vertex_order)?.with_inside_tolerance(config.inside_tolerance);

    if let Some(point) = point {
        let [x, y] = point else {
            return Err(DomainError::validation("point", "Expected X,Y"));
        };
        if let ClickOutcome::Cleared = session.click(Point2D::new(*x, *y))? {
            return Err(DomainError::new(
                ErrorCode::NoPriorities,
                "Point lies outside the priority triangle",
            ));
        }
    }

    for (channel, value) in edits {
        if let Some(value) = value {
            session.edit(channel, value);
        }
    }

    Ok(session)
}

fn print_report(report: &RankingReport) {
    if report.is_empty() {
        println!("No alternatives to rank.");
        return;
    }

    println!(
        "{:>4}  {:<24} {:>8} {:>10} {:>12}  {}",
        "Rank", "Alternative", "Score", "Ranking", "Uncertainty", "Tier"
    );
    for alt in &report.alternatives {
        println!(
            "{:>4}  {:<24} {:>8.2} {:>10.4} {:>12.4}  {}",
            alt.rank,
            alt.name.as_deref().unwrap_or(&alt.id),
            alt.display_score,
            alt.ranking_score,
            alt.uncertainty,
            alt.tier_label
        );
    }

    println!();
    for tier in &report.tiers {
        let marker = if report.podium.contains(&tier.number) { "*" } else { " " };
        println!("{} {:<14} {}", marker, tier.label, tier.members.join(", "));
    }

    if !report.tree.is_empty() {
        println!();
        for major in &report.tree.majors {
            println!("{}", major.numeral);
            for minor in &major.minors {
                println!("  {}", minor.minor);
                for leaf in &minor.leaves {
                    println!(
                        "    {}  {:<20} {:>8.2}  tier {}",
                        leaf.coordinate, leaf.id, leaf.display_score, leaf.tier
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_edits() -> [(Channel, Option<f64>); 3] {
        [
            (Channel::Cost, None),
            (Channel::Quality, None),
            (Channel::Schedule, None),
        ]
    }

    #[test]
    fn no_input_gives_even_split() {
        let session = select_priorities(None, no_edits(), &TriangleConfig::default()).unwrap();
        let weights = session.confirm().unwrap();
        for w in weights.as_array() {
            assert!((w - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn point_needs_two_coordinates() {
        let err = select_priorities(Some(&[0.5]), no_edits(), &TriangleConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"point".to_string()));

        let err =
            select_priorities(Some(&[0.5, 0.2, 0.1]), no_edits(), &TriangleConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn point_outside_triangle_is_no_priorities() {
        let err = select_priorities(Some(&[2.0, 2.0]), no_edits(), &TriangleConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoPriorities);
    }

    #[test]
    fn point_on_vertex_selects_its_channel() {
        // default order puts schedule on top
        let session = select_priorities(
            Some(&[0.5, UNIT_TRIANGLE_HEIGHT]),
            no_edits(),
            &TriangleConfig::default(),
        )
        .unwrap();
        assert!((session.split().schedule().value() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn edits_apply_cost_then_quality_then_schedule() {
        let edits = [
            (Channel::Cost, Some(50.0)),
            (Channel::Quality, Some(40.0)),
            (Channel::Schedule, Some(30.0)),
        ];
        let split = select_priorities(None, edits, &TriangleConfig::default())
            .unwrap()
            .split();

        // 50/25/25, then 40/40/20, then 35/35/30; schedule first would end at 50/29.5/20.5
        assert!((split.cost().value() - 35.0).abs() < 1e-9);
        assert!((split.quality().value() - 35.0).abs() < 1e-9);
        assert_eq!(split.schedule().value(), 30.0);
    }

    #[test]
    fn edits_follow_a_click() {
        let edits = [
            (Channel::Cost, None),
            (Channel::Quality, Some(50.0)),
            (Channel::Schedule, None),
        ];
        // left vertex is cost under the default order
        let split = select_priorities(Some(&[0.0, 0.0]), edits, &TriangleConfig::default())
            .unwrap()
            .split();

        assert!((split.cost().value() - 50.0).abs() < 1e-6);
        assert_eq!(split.quality().value(), 50.0);
        assert!(split.schedule().value().abs() < 1e-6);
    }

    #[test]
    fn bad_vertex_order_is_a_configuration_error() {
        let config = TriangleConfig {
            vertex_order: "cost,cost,quality".to_string(),
            ..Default::default()
        };
        let err = select_priorities(None, no_edits(), &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigurationError);
    }
}
