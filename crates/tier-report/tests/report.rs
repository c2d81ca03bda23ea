//! Report tests over a small pipeline run.

use polars::prelude::*;
use tier_ingest::SourceTables;
use tier_model::Tier;
use tier_report::{ReportError, build_report, legendary_by_tier, tier_distribution};
use tier_transform::{PipelineOutput, run_pipeline};

fn creature_table(rows: &[(&str, &str, i64, &str)]) -> DataFrame {
    let text = |name: &str, values: Vec<&str>| Series::new(name.into(), values).into_column();
    let stat = |name: &str| {
        Series::new(
            name.into(),
            rows.iter().map(|row| row.2).collect::<Vec<i64>>(),
        )
        .into_column()
    };
    DataFrame::new(vec![
        text("Name", rows.iter().map(|row| row.0).collect()),
        text("Types", vec!["['Normal']"; rows.len()]),
        text("Abilities", vec!["['Pressure']"; rows.len()]),
        text("Tier", rows.iter().map(|row| row.1).collect()),
        stat("HP"),
        stat("Attack"),
        stat("Defense"),
        stat("Special Attack"),
        stat("Special Defense"),
        stat("Speed"),
        text("Next Evolution(s)", vec!["[]"; rows.len()]),
        text("Moves", rows.iter().map(|row| row.3).collect()),
    ])
    .unwrap()
}

fn attribute_table(rows: &[(&str, i64)]) -> DataFrame {
    DataFrame::new(vec![
        Series::new("name".into(), rows.iter().map(|row| row.0).collect::<Vec<_>>()).into_column(),
        Series::new(
            "is_legendary".into(),
            rows.iter().map(|row| row.1).collect::<Vec<_>>(),
        )
        .into_column(),
    ])
    .unwrap()
}

/// Every stat equals the given value, so `bst` is six times it.
fn sample_output() -> PipelineOutput {
    let creatures = creature_table(&[
        ("Mewtwo", "OUBL", 110, "['Psystrike', 'Recover']"),
        ("Lugia", "Uber", 100, "['Aeroblast']"),
        ("Garchomp", "OU", 100, "['Earthquake', 'Outrage', 'Swords Dance']"),
        ("Snorlax", "UUBL", 80, "['Rest']"),
        ("Ditto", "PU", 48, "['Transform']"),
        ("Pichu", "LC", 30, "['Thunder Shock']"),
        ("Unown", "PU", 40, "['Hidden Power']"),
    ]);
    let attributes = attribute_table(&[
        ("Mewtwo", 1),
        ("Lugia", 1),
        ("Garchomp", 0),
        ("Snorlax", 0),
        ("Ditto", 0),
        ("Pichu", 0),
    ]);
    run_pipeline(SourceTables {
        creatures,
        moves: DataFrame::new(vec![
            Series::new("name".into(), vec!["Pound", "Tackle"]).into_column(),
        ])
        .unwrap(),
        attributes,
    })
    .unwrap()
}

#[test]
fn report_counts_every_section() {
    let output = sample_output();
    let report = build_report(&output, 3).unwrap();

    assert_eq!(report.creature_rows, 6);
    assert_eq!(report.joined_rows, 5);
    assert_eq!(report.move_reference_rows, 2);
    assert_eq!(report.tier_distribution.len(), 6);
    assert_eq!(report.preview.len(), 3);
    assert_eq!(report.preview[0].name, "Mewtwo");
    assert_eq!(report.preview[0].tier, Tier::Uber);
    assert_eq!(report.preview[0].bst, 660);
    assert_eq!(report.preview[0].tier_rank, 0);
    assert!(report.preview[0].is_legendary);
}

#[test]
fn distribution_lists_empty_tiers() {
    let output = sample_output();
    let shares = tier_distribution(&output.creatures).unwrap();

    let counts: Vec<(Tier, usize)> = shares.iter().map(|share| (share.tier, share.count)).collect();
    assert_eq!(
        counts,
        vec![
            (Tier::Uber, 2),
            (Tier::OU, 2),
            (Tier::UU, 0),
            (Tier::RU, 0),
            (Tier::NU, 0),
            (Tier::PU, 2),
        ]
    );
    let total: f64 = shares.iter().map(|share| share.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn bst_and_moves_group_by_tier() {
    let report = build_report(&sample_output(), 0).unwrap();

    let uber = report.bst_by_tier[0].stats.as_ref().unwrap();
    assert_eq!(report.bst_by_tier[0].tier, Tier::Uber);
    assert_eq!(uber.count, 2);
    assert!((uber.mean - 630.0).abs() < 1e-9);
    assert!((uber.max - 660.0).abs() < 1e-9);
    assert!(report.bst_by_tier[2].stats.is_none());

    let ou_moves = report.moves_by_tier[1].stats.as_ref().unwrap();
    assert!((ou_moves.mean - 2.0).abs() < 1e-9);
    assert!((ou_moves.max - 3.0).abs() < 1e-9);
    assert!(report.preview.is_empty());
}

#[test]
fn legendary_breakdowns() {
    let output = sample_output();
    let report = build_report(&output, 10).unwrap();

    let legendary = &report.bst_by_legendary[1];
    assert!(legendary.is_legendary);
    let stats = legendary.stats.as_ref().unwrap();
    assert_eq!(stats.count, 2);
    assert!((stats.mean - 630.0).abs() < 1e-9);
    assert_eq!(report.bst_by_legendary[0].stats.as_ref().unwrap().count, 3);

    let counts = legendary_by_tier(&output.joined).unwrap();
    assert_eq!(counts[0].count, 2);
    assert!(counts[1..].iter().all(|count| count.count == 0));
}

#[test]
fn unreadable_legendary_flag_is_reported() {
    let mut output = sample_output();
    let height = output.joined.height();
    output
        .joined
        .with_column(Series::new("is_legendary".into(), vec!["maybe"; height]))
        .unwrap();

    let err = build_report(&output, 1).unwrap_err();
    match err {
        ReportError::InvalidValue { column, row, value } => {
            assert_eq!(column, "is_legendary");
            assert_eq!(row, 0);
            assert_eq!(value, "maybe");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn report_serializes_tiers_by_label() {
    let report = build_report(&sample_output(), 1).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tier_distribution"][0]["tier"], "Uber");
    assert_eq!(json["preview"][0]["name"], "Mewtwo");
    insta::assert_snapshot!(
        json["legendary_by_tier"].to_string(),
        @r#"[{"count":2,"tier":"Uber"},{"count":0,"tier":"OU"},{"count":0,"tier":"UU"},{"count":0,"tier":"RU"},{"count":0,"tier":"NU"},{"count":0,"tier":"PU"}]"#
    );
}
