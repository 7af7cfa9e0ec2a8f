pub mod session;
pub mod state;

pub use session::*;
pub use state::*;
