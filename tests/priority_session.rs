//! Integration tests for choosing priorities on the triangle and ranking
//! with the confirmed weights.

use priority_triangle::adapters::DelimitedTableParser;
use priority_triangle::config::TriangleConfig;
use priority_triangle::domain::analysis::RankingPipeline;
use priority_triangle::domain::geometry::{Point2D, Triangle, VertexOrder};
use priority_triangle::domain::weights::{Channel, ClickOutcome, PrioritySession, WeightError};

const TABLE: &str = "\
id,ZCost,ZQuality,ZSchedule,s_ZCost,s_ZQuality,s_ZSchedule
cheap,-2,0,1,0.1,0.1,0.1
fast,1,0,-2,0.1,0.1,0.1
solid,1,2,1,0.1,0.1,0.1
";

fn triangle() -> Triangle {
    Triangle::new(
        Point2D::new(100.0, 0.0),
        Point2D::new(0.0, 200.0),
        Point2D::new(200.0, 200.0),
    )
    .unwrap()
}

fn top_ranked(session: &PrioritySession) -> String {
    let weights = session.confirm().unwrap();
    let table = DelimitedTableParser::new().parse(TABLE);
    let report = RankingPipeline::default().run(&table, &weights).unwrap();
    report.best().unwrap().id.clone()
}

#[test]
fn each_vertex_favours_its_channel() {
    // default order: schedule on top, cost left, quality right
    let cases = [
        (Point2D::new(0.0, 200.0), "cheap"),
        (Point2D::new(100.0, 0.0), "fast"),
        (Point2D::new(200.0, 200.0), "solid"),
    ];

    for (point, expected) in cases {
        let mut session = PrioritySession::new(triangle(), VertexOrder::default()).unwrap();
        assert!(matches!(session.click(point).unwrap(), ClickOutcome::Selected { .. }));
        assert_eq!(top_ranked(&session), expected);
    }
}

#[test]
fn configured_vertex_order_moves_channels() {
    let config = TriangleConfig {
        vertex_order: "cost,quality,schedule".to_string(),
        ..Default::default()
    };
    let mut session = PrioritySession::new(triangle(), config.vertex_order().unwrap())
        .unwrap()
        .with_inside_tolerance(config.inside_tolerance);

    session.click(Point2D::new(100.0, 0.0)).unwrap();
    assert!((session.split().cost().value() - 100.0).abs() < 1e-9);
    assert_eq!(top_ranked(&session), "cheap");
}

#[test]
fn outside_click_must_be_corrected_before_ranking() {
    let mut session = PrioritySession::new(triangle(), VertexOrder::default()).unwrap();

    assert_eq!(session.click(Point2D::new(500.0, 500.0)).unwrap(), ClickOutcome::Cleared);
    assert_eq!(session.confirm(), Err(WeightError::NoPriorities));

    session.edit(Channel::Quality, 100.0);
    assert_eq!(top_ranked(&session), "solid");
}

#[test]
fn typed_edits_keep_split_at_one_hundred() {
    let mut session = PrioritySession::new(triangle(), VertexOrder::default()).unwrap();
    session.click(Point2D::new(90.0, 120.0)).unwrap();

    for (channel, value) in [(Channel::Cost, 70.0), (Channel::Schedule, 10.0), (Channel::Quality, 33.3)] {
        let split = session.edit(channel, value);
        assert!((split.total() - 100.0).abs() < 1e-3);
        assert!((split.get(channel).value() - value).abs() < 1e-9);
    }

    let weights = session.confirm().unwrap();
    assert!((weights.as_array().iter().sum::<f64>() - 1.0).abs() < 1e-9);
}
