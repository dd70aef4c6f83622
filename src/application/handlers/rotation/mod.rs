//! Rotation handlers - the one-at-a-time browsing flow for each role.

mod session;
mod view;

pub use session::RotationSession;
pub use view::{RotationChange, RotationView};
