//! External collaborators the decision core consumes behind narrow traits.
//! Production backends (map vendor, LLM providers) are optional; the
//! pipeline is fully functional with every service disabled.

pub mod explanation;
pub mod map;
pub mod reasoning;

pub use explanation::{DisabledExplanationService, ExplanationService, RigExplanationService};
pub use map::{DisabledMapService, HttpMapService, MapService};
pub use reasoning::{DisabledReasoningService, ReasoningService, RigReasoningService};
