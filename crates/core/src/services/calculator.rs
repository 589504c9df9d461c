//! Pure delta/breakeven arithmetic.
//!
//! Every function here assumes pre-validated inputs: `usd_amount > 0`,
//! `sale_date_rate > 0`, `commission ∈ [0, 100)`. The validation boundary
//! (settings input and settings load) enforces those ranges before any
//! value reaches this module, so no function here can divide by zero.

use crate::models::rate::RatePoint;
use crate::models::settings::Baseline;
use crate::models::snapshot::{Advice, LiveFigures};

/// Fraction of converted value retained after fees: `1 - commission/100`.
#[must_use]
pub fn commission_multiplier(commission_percent: f64) -> f64 {
    1.0 - commission_percent / 100.0
}

/// EUR value of the principal at the baseline rate, with no commission
/// applied. This is the reference point for all deltas, not a realizable
/// conversion.
#[must_use]
pub fn base_price(usd_amount: f64, sale_date_rate: f64) -> f64 {
    usd_amount * sale_date_rate
}

/// EUR gain/loss of converting at `candidate_rate` net of commission,
/// versus the commission-free baseline.
///
/// Positive means converting now yields more EUR than the baseline
/// reference. Because the reference is commission-free, the delta at
/// `candidate_rate == sale_date_rate` is strictly negative whenever
/// commission > 0: it is exactly the cost of the fee.
#[must_use]
pub fn delta(
    usd_amount: f64,
    sale_date_rate: f64,
    commission_percent: f64,
    candidate_rate: f64,
) -> f64 {
    usd_amount * candidate_rate * commission_multiplier(commission_percent)
        - base_price(usd_amount, sale_date_rate)
}

/// The rate at which converting today with commission yields exactly
/// `base_price`, i.e. zero delta. Defined for `commission < 100`, which
/// the validation boundary guarantees.
#[must_use]
pub fn breakeven_rate(sale_date_rate: f64, commission_percent: f64) -> f64 {
    sale_date_rate / commission_multiplier(commission_percent)
}

impl Baseline {
    /// Commission-free EUR value of the principal on the sale date.
    #[must_use]
    pub fn base_price(&self) -> f64 {
        base_price(self.usd_amount, self.sale_date_rate)
    }

    /// Delta of converting on the sale day itself — the commission cost.
    #[must_use]
    pub fn sale_day_delta(&self) -> f64 {
        self.delta(self.sale_date_rate)
    }

    /// Delta of converting at `candidate_rate`, net of commission.
    #[must_use]
    pub fn delta(&self, candidate_rate: f64) -> f64 {
        delta(
            self.usd_amount,
            self.sale_date_rate,
            self.commission,
            candidate_rate,
        )
    }

    /// Delta at `candidate_rate` as a percentage of the base price.
    #[must_use]
    pub fn delta_percentage(&self, candidate_rate: f64) -> f64 {
        self.delta(candidate_rate) / self.base_price() * 100.0
    }

    /// The rate at which a net-of-commission conversion breaks even
    /// against the commission-free baseline.
    #[must_use]
    pub fn breakeven_rate(&self) -> f64 {
        breakeven_rate(self.sale_date_rate, self.commission)
    }

    /// Headline figures for the presentation layer, given the live rate.
    #[must_use]
    pub fn live_figures(&self, current: &RatePoint) -> LiveFigures {
        let today_delta = self.delta(current.rate);
        LiveFigures {
            base_price: self.base_price(),
            sale_day_delta: self.sale_day_delta(),
            commission_percent: self.commission,
            today_delta,
            delta_percentage: self.delta_percentage(current.rate),
            breakeven_rate: self.breakeven_rate(),
            advice: if today_delta >= 0.0 {
                Advice::Convert
            } else {
                Advice::Hold
            },
        }
    }
}
