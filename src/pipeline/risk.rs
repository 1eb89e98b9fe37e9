//! Risk annotation. Metadata only — never reorders or drops candidates.

use rust_decimal::Decimal;

use crate::config::RiskConfig;
use crate::model::{CandidateOption, HardConstraints, RiskLevel, SessionState};

pub fn annotate(
    candidate: &mut CandidateOption,
    state: &SessionState,
    duration_hours: f64,
    hard_constraints: &HardConstraints,
    cfg: &RiskConfig,
) {
    let edge = candidate.fastest_edge().clone();
    let total_cost = edge.cost + candidate.poi.ticket_price;
    let remaining_after = state.remaining_budget - total_cost;
    let hours_after = state.elapsed_hours + edge.time_hours + candidate.poi.avg_visit_hours;
    let remaining_hours_after = duration_hours - hours_after;

    let return_violated = hard_constraints
        .return_by_hour
        .map(|deadline| hours_after + cfg.return_buffer_time_h > deadline)
        .unwrap_or(false);

    let critical = return_violated
        || remaining_after < Decimal::new(cfg.budget_critical_threshold as i64, 0)
        || remaining_hours_after < cfg.time_critical_threshold_h;

    let warning = !critical
        && (remaining_after < Decimal::new(cfg.budget_warning_threshold as i64, 0)
            || remaining_hours_after < cfg.time_warning_threshold_h);

    candidate.risk_level = if critical {
        RiskLevel::Critical
    } else if warning {
        RiskLevel::Warning
    } else {
        RiskLevel::Info
    };
}
