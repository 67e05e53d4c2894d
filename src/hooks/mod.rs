pub mod use_clone_session;

pub use use_clone_session::use_clone_session;
