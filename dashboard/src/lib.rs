//! The dashboard page: a view-model over the signed-in user's events, the
//! controller that drives it, and its HTML rendering.

pub mod controller;
pub mod port;
pub mod state;
pub mod toast;
pub mod view;

pub use controller::DashboardController;
pub use state::{Action, DashboardState, EventPartition, Registering, SessionStatus};
