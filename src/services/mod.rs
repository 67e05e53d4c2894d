pub mod clone_api;
