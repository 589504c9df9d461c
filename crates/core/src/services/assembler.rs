use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::rate::{DeltaPoint, RatePoint};
use crate::models::settings::Baseline;

/// Merge the historical rate series with the recorded baseline point and
/// the current-day point into one date-sorted sequence of delta points
/// covering [sale_date, today].
///
/// Merge rules:
/// 1. The mapping is seeded with `{sale_date: sale_date_rate}`.
/// 2. Historical entries overlay the seed — if the API already returned a
///    rate for the sale date, the API value is authoritative.
/// 3. Today is inserted only if the historical range did not already
///    cover it.
///
/// The historical input is sparse (no observations on weekends or
/// holidays) and is consumed as-is, one output point per distinct date.
/// Deterministic: identical inputs yield an identical sequence.
#[must_use]
pub fn assemble(
    baseline: &Baseline,
    historical: &[RatePoint],
    today: &RatePoint,
) -> Vec<DeltaPoint> {
    let mut rates: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    rates.insert(baseline.sale_date, baseline.sale_date_rate);

    for point in historical {
        rates.insert(point.date, point.rate);
    }

    rates.entry(today.date).or_insert(today.rate);

    // BTreeMap iterates in ascending NaiveDate order, which for ISO dates
    // equals chronological order.
    rates
        .into_iter()
        .map(|(date, rate)| DeltaPoint {
            date,
            rate,
            delta: baseline.delta(rate),
        })
        .collect()
}
