// ═══════════════════════════════════════════════════════════════════
// Assembler Tests — merge rules, ordering, dedup, idempotence,
// sparse-input tolerance
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use currency_monitor_core::models::rate::RatePoint;
use currency_monitor_core::models::settings::Baseline;
use currency_monitor_core::services::assembler::assemble;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn point(s: &str, rate: f64) -> RatePoint {
    RatePoint {
        date: date(s),
        rate,
    }
}

fn baseline() -> Baseline {
    Baseline {
        sale_date: date("2024-01-01"),
        usd_amount: 1000.0,
        sale_date_rate: 0.90,
        commission: 2.0,
    }
}

#[test]
fn assembles_baseline_history_and_today_in_order() {
    // Worked example: one historical day between sale date and today.
    let historical = vec![point("2024-01-02", 0.91)];
    let today = point("2024-01-03", 0.93);

    let series = assemble(&baseline(), &historical, &today);

    let dates: Vec<String> = series.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    assert_eq!(series[0].rate, 0.90);
    assert_eq!(series[1].rate, 0.91);
    assert_eq!(series[2].rate, 0.93);
}

#[test]
fn deltas_match_calculator_for_each_rate() {
    let b = baseline();
    let historical = vec![point("2024-01-02", 0.91)];
    let today = point("2024-01-03", 0.93);

    let series = assemble(&b, &historical, &today);
    for p in &series {
        assert!((p.delta - b.delta(p.rate)).abs() < 1e-9);
    }
}

#[test]
fn historical_entry_wins_over_baseline_seed() {
    // The API already covered the sale date → the API value is
    // authoritative, not the recorded baseline rate.
    let historical = vec![point("2024-01-01", 0.905), point("2024-01-02", 0.91)];
    let today = point("2024-01-03", 0.93);

    let series = assemble(&baseline(), &historical, &today);
    assert_eq!(series[0].date, date("2024-01-01"));
    assert_eq!(series[0].rate, 0.905);
}

#[test]
fn historical_entry_wins_over_todays_live_rate() {
    // The range already includes today → the live point is not inserted.
    let historical = vec![point("2024-01-02", 0.91), point("2024-01-03", 0.925)];
    let today = point("2024-01-03", 0.93);

    let series = assemble(&baseline(), &historical, &today);
    assert_eq!(series.len(), 3);
    assert_eq!(series[2].rate, 0.925);
}

#[test]
fn tolerates_sparse_history() {
    // Weekend gap: no observations for Jan 6-7. Output is one point per
    // distinct date actually present, not one per calendar day.
    let historical = vec![
        point("2024-01-02", 0.91),
        point("2024-01-05", 0.915),
        point("2024-01-08", 0.92),
    ];
    let today = point("2024-01-09", 0.93);

    let series = assemble(&baseline(), &historical, &today);
    let dates: Vec<String> = series.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(
        dates,
        vec![
            "2024-01-01",
            "2024-01-02",
            "2024-01-05",
            "2024-01-08",
            "2024-01-09"
        ]
    );
}

#[test]
fn output_is_sorted_and_duplicate_free() {
    // Unsorted input with a duplicate date — last write wins, output
    // stays strictly ascending.
    let historical = vec![
        point("2024-01-05", 0.915),
        point("2024-01-02", 0.91),
        point("2024-01-02", 0.912),
    ];
    let today = point("2024-01-06", 0.93);

    let series = assemble(&baseline(), &historical, &today);
    for pair in series.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    assert_eq!(series[1].rate, 0.912);
}

#[test]
fn is_idempotent() {
    let historical = vec![point("2024-01-02", 0.91), point("2024-01-05", 0.915)];
    let today = point("2024-01-06", 0.93);
    let b = baseline();

    let first = assemble(&b, &historical, &today);
    let second = assemble(&b, &historical, &today);
    assert_eq!(first, second);
}

#[test]
fn sale_date_equal_to_today_yields_single_point() {
    let b = Baseline {
        sale_date: date("2024-01-03"),
        usd_amount: 1000.0,
        sale_date_rate: 0.90,
        commission: 2.0,
    };
    let today = point("2024-01-03", 0.93);

    let series = assemble(&b, &[], &today);
    assert_eq!(series.len(), 1);
    // Baseline seeds the date, today's live rate does not overwrite it.
    assert_eq!(series[0].rate, 0.90);
}

#[test]
fn empty_history_yields_baseline_and_today() {
    let today = point("2024-01-03", 0.93);
    let series = assemble(&baseline(), &[], &today);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, date("2024-01-01"));
    assert_eq!(series[1].date, date("2024-01-03"));
}
