pub mod poi_store;
pub mod session_store;

pub use poi_store::{InMemoryPoiStore, PoiStore};
pub use session_store::{InMemorySessionStore, SessionStore};
