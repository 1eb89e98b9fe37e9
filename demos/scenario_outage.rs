//! Demonstrates the fallback-closure guarantee (S5): with the Reasoning and
//! Explanation services disabled, the pipeline still returns a complete,
//! deterministic, rule-only ranked shortlist.

use std::sync::Arc;

use rust_decimal::Decimal;
use tripweave::config::Config;
use tripweave::model::{Category, HardConstraints, Poi};
use tripweave::pipeline::Pipeline;
use tripweave::services::{DisabledExplanationService, DisabledMapService, DisabledReasoningService};
use tripweave::session::Coordinator;
use tripweave::store::{InMemoryPoiStore, InMemorySessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut store = InMemoryPoiStore::new();
    for i in 0..5 {
        store.insert(
            "Xiamen",
            Poi {
                id: format!("poi-{i}"),
                name: format!("Landmark {i}"),
                lat: 24.45 + i as f64 * 0.01,
                lon: 118.08 + i as f64 * 0.01,
                category: Category::Attraction,
                address: String::new(),
                avg_visit_hours: 1.5,
                ticket_price: Decimal::new(30, 0),
                nominal_rating: 4.3 + i as f64 * 0.05,
                review_count: 3000,
            },
        );
    }

    let pipeline = Pipeline {
        poi_store: Arc::new(store),
        map_service: Arc::new(DisabledMapService),
        reasoning: Arc::new(DisabledReasoningService),
        explanation: Arc::new(DisabledExplanationService),
        config: Config::default(),
    };
    let coordinator = Coordinator {
        sessions: InMemorySessionStore::new(),
        pipeline,
        ttl_hours: 24,
    };

    let start = Poi {
        id: "start".into(),
        name: "Gulangyu Ferry Terminal".into(),
        lat: 24.44,
        lon: 118.07,
        category: Category::TransportHub,
        address: String::new(),
        avg_visit_hours: 0.0,
        ticket_price: Decimal::ZERO,
        nominal_rating: 4.0,
        review_count: 0,
    };

    let session = coordinator
        .initialize(
            "demo-user".to_string(),
            "喜欢自然",
            start,
            "Xiamen".into(),
            48.0,
            Decimal::new(3000, 0),
            HardConstraints {
                return_by_hour: None,
                return_poi_id: None,
            },
        )
        .await?;

    let outcome = coordinator.next_options(session.session_id).await?;
    println!("Reasoning/Explanation services disabled — rule-only ranking:");
    for option in &outcome.options {
        println!("  #{} {} — final {:.3}", option.rank, option.poi.name, option.final_score);
    }
    Ok(())
}
