pub mod gate;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

pub use gate::{gate, GateDecision, RoutePolicy};
pub use models::{Account, Session};
pub use session::{clear_session, load_session, save_session, SessionStore};
