// Persistent configuration
// Values read from LocalStorage and the build environment

pub mod config_store;
