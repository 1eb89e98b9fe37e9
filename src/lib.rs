//! Decision core for a stateful, multi-step travel-itinerary recommender.
//!
//! The core repeatedly turns a session's state into a ranked, explained
//! shortlist of next destinations: a base spatio-temporal field (distance,
//! feasibility, quality, preference match) perturbed by a concurrently
//! reasoned "experience-coherence" field. See [`pipeline`] for the full
//! stage-by-stage flow and [`session::Coordinator`] for the session
//! lifecycle that drives it.

pub mod concurrency;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod regions;
pub mod services;
pub mod session;
pub mod store;
pub mod time_utils;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use session::Coordinator;
