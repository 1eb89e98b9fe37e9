use crate::config::PipelineConfig;
use crate::model::{Poi, SessionState};
use crate::time_utils::hour_of_day;

/// Drop POIs violating hard spatial/temporal/contextual constraints. Never
/// produces a `DegradationNote` — every check here is a hard gate, not a
/// stage that can fall back.
pub fn filter_feasible(
    pool: Vec<Poi>,
    state: &SessionState,
    duration_hours: f64,
    start_hour: u32,
    cfg: &PipelineConfig,
) -> Vec<Poi> {
    let hour = hour_of_day(start_hour, state.elapsed_hours);
    pool.into_iter()
        .filter(|p| !state.visited_ids.contains(&p.id))
        .filter(|p| state.current_poi.haversine_km(p) <= cfg.max_distance_km)
        .filter(|p| !cfg.enable_temporal_filter || p.category.open_at_hour(hour))
        .filter(|p| {
            duration_hours - state.elapsed_hours >= p.avg_visit_hours + cfg.min_remaining_buffer_hours
        })
        .collect()
}
