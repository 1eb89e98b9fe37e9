use rust_decimal::prelude::*;

use crate::config::{TransportConfig, TransportModeConfig};
use crate::model::{Poi, TransportEdge, TransportMode};

/// Enumerate feasible transport edges between two POIs. A candidate with no
/// feasible edges at all is dropped by the caller.
pub fn enumerate_edges(from: &Poi, to: &Poi, cfg: &TransportConfig) -> Vec<TransportEdge> {
    let straight_km = from.haversine_km(to);
    let mut edges = Vec::new();

    if let Some(edge) = edge_for(TransportMode::Walk, straight_km, &cfg.walk) {
        edges.push(edge);
    }
    if let Some(edge) = edge_for(TransportMode::Taxi, straight_km, &cfg.taxi) {
        edges.push(edge);
    }
    if let Some(edge) = edge_for(TransportMode::Bus, straight_km, &cfg.bus) {
        edges.push(edge);
    }
    if let Some(edge) = edge_for(TransportMode::Subway, straight_km, &cfg.subway) {
        edges.push(edge);
    }
    edges
}

fn edge_for(mode: TransportMode, straight_km: f64, mc: &TransportModeConfig) -> Option<TransportEdge> {
    // Walk is only ever recommended under its own distance cap; the others
    // have both a floor and a ceiling on direct distance.
    let in_range = if mc.min_distance_km == 0.0 {
        straight_km < mc.max_distance_km
    } else {
        straight_km >= mc.min_distance_km && straight_km < mc.max_distance_km
    };
    if !in_range {
        return None;
    }

    let distance_km = straight_km * mc.distance_factor;
    let time_hours = distance_km / mc.speed_kmh + mc.wait_time_h;
    let cost = match mode {
        TransportMode::Subway => mc.base_fare + (distance_km / 10.0),
        _ => mc.base_fare + mc.price_per_km * distance_km,
    };
    let cost = if mode == TransportMode::Subway {
        cost.min(8.0)
    } else {
        cost
    };

    Some(TransportEdge {
        mode,
        distance_km,
        time_hours,
        cost: Decimal::from_f64(cost).unwrap_or_default().round_dp(2),
    })
}
