use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rust_decimal::Decimal;
use tripweave::config::Config;
use tripweave::model::{Category, HardConstraints, Poi};
use tripweave::pipeline::Pipeline;
use tripweave::services::{DisabledExplanationService, DisabledMapService, DisabledReasoningService};
use tripweave::store::{InMemoryPoiStore, InMemorySessionStore};
use tripweave::session::Coordinator;

#[derive(Parser, Debug)]
#[command(name = "tripweave", about = "Travel-itinerary decision core")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Destination city to plan within.
    #[arg(long, default_value = "Suzhou")]
    city: String,

    /// Free-text description of preferences.
    #[arg(long, default_value = "")]
    preferences: String,

    /// Trip duration in hours.
    #[arg(long, default_value_t = 72.0)]
    duration_hours: f64,

    /// Starting budget.
    #[arg(long, default_value_t = 5000)]
    budget: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let mut poi_store = InMemoryPoiStore::new();
    poi_store.insert(
        cli.city.clone(),
        Poi {
            id: "demo-poi".into(),
            name: "Demo Garden".into(),
            lat: 31.301,
            lon: 120.621,
            category: Category::Attraction,
            address: String::new(),
            avg_visit_hours: 2.0,
            ticket_price: Decimal::new(70, 0),
            nominal_rating: 4.6,
            review_count: 5000,
        },
    );

    let pipeline = Pipeline {
        poi_store: Arc::new(poi_store),
        map_service: Arc::new(DisabledMapService),
        reasoning: Arc::new(DisabledReasoningService),
        explanation: Arc::new(DisabledExplanationService),
        config,
    };
    let coordinator = Coordinator {
        sessions: InMemorySessionStore::new(),
        pipeline,
        ttl_hours: 24,
    };

    let start_poi = Poi {
        id: "start".into(),
        name: "Arrival Point".into(),
        lat: 31.300,
        lon: 120.620,
        category: Category::TransportHub,
        address: String::new(),
        avg_visit_hours: 0.0,
        ticket_price: Decimal::ZERO,
        nominal_rating: 4.0,
        review_count: 0,
    };

    let session = coordinator
        .initialize(
            "cli-user".to_string(),
            &cli.preferences,
            start_poi,
            cli.city,
            cli.duration_hours,
            Decimal::new(cli.budget, 0),
            HardConstraints {
                return_by_hour: None,
                return_poi_id: None,
            },
        )
        .await?;

    let outcome = coordinator.next_options(session.session_id).await?;
    for option in &outcome.options {
        println!(
            "#{} {} (score {:.3}, risk {:?}) — {}",
            option.rank,
            option.poi.name,
            option.final_score,
            option.risk_level,
            option.explanation.as_deref().unwrap_or("")
        );
    }
    if outcome.options.is_empty() {
        println!("no options: {:?}", outcome.empty_reason);
    }

    Ok(())
}
