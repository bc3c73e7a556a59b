//! The order-history view model: presentation state, derived display values and a
//! plain-text renderer.

pub mod display;
pub mod render;
pub mod state;

pub use display::*;
pub use render::render_page;
pub use state::*;
