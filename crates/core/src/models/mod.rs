pub mod rate;
pub mod settings;
pub mod snapshot;
