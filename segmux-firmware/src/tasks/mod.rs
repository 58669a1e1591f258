//! Embassy async tasks
//!
//! Both tasks run on the high-priority interrupt executor. They only set
//! flags or push into the bit queue of the shared state.

pub mod edge;
pub mod tick;

pub use edge::edge_task;
pub use tick::refresh_task;
