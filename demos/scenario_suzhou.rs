//! Runs the S1 happy-path scenario from the decision core's test suite
//! end-to-end against the in-memory POI store, with every external service
//! disabled, so the pipeline's behavior is observable without a network.

use std::sync::Arc;

use rust_decimal::Decimal;
use tripweave::config::Config;
use tripweave::model::{Category, HardConstraints, Poi};
use tripweave::pipeline::Pipeline;
use tripweave::services::{DisabledExplanationService, DisabledMapService, DisabledReasoningService};
use tripweave::session::Coordinator;
use tripweave::store::{InMemoryPoiStore, InMemorySessionStore};

fn poi(id: &str, name: &str, lat: f64, lon: f64, category: Category, rating: f64, reviews: u64, ticket: i64) -> Poi {
    Poi {
        id: id.into(),
        name: name.into(),
        lat,
        lon,
        category,
        address: format!("{name} Address"),
        avg_visit_hours: 2.0,
        ticket_price: Decimal::new(ticket, 0),
        nominal_rating: rating,
        review_count: reviews,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut store = InMemoryPoiStore::new();
    store.insert(
        "Suzhou",
        poi("garden", "拙政园", 31.3015, 120.6280, Category::Attraction, 4.7, 23000, 70),
    );
    store.insert(
        "Suzhou",
        poi("museum", "苏州博物馆", 31.3170, 120.6260, Category::Attraction, 4.6, 15000, 0),
    );
    store.insert(
        "Suzhou",
        poi("huqiu", "虎丘", 31.3330, 120.5800, Category::Attraction, 4.4, 9000, 60),
    );

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

    let start = poi("station", "Suzhou Station", 31.3012, 120.5242, Category::TransportHub, 4.0, 0, 0);

    let session = coordinator
        .initialize(
            "demo-user".to_string(),
            "休闲慢节奏喜欢园林",
            start,
            "Suzhou".into(),
            72.0,
            Decimal::new(5000, 0),
            HardConstraints {
                return_by_hour: None,
                return_poi_id: None,
            },
        )
        .await?;

    let outcome = coordinator.next_options(session.session_id).await?;
    println!("Top options for a first step in Suzhou:");
    for option in &outcome.options {
        println!(
            "  #{} {} — final {:.3} (base {:.3}), risk {:?}",
            option.rank, option.poi.name, option.final_score, option.base_score, option.risk_level
        );
        if let Some(text) = &option.explanation {
            println!("      {text}");
        }
    }
    Ok(())
}
