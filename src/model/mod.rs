//! Core domain types shared across every pipeline stage.

pub mod candidate;
pub mod poi;
pub mod profile;
pub mod quality;
pub mod session;
pub mod tensions;
pub mod transport;
pub mod verification;

pub use candidate::{CandidateOption, RiskLevel};
pub use poi::{Category, Poi};
pub use profile::{BudgetTier, UserProfile};
pub use quality::QualityScore;
pub use session::{HardConstraints, HistoryEntry, Session, SessionState};
pub use tensions::{CausalSource, Tensions, WAxisDetails};
pub use transport::{TransportEdge, TransportMode};
pub use verification::{DataSourceRating, Verification};

pub use crate::error::{DegradationNote, DegradationReason};
