pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod price;
pub mod record;
pub mod sources;
pub mod vocab;
