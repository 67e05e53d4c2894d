// Utility functions
// Helpers shared by the clone widget

pub mod clipboard;
pub mod copy_feedback;
pub mod session_state;

pub use session_state::SessionState;
