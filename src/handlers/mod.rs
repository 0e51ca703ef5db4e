// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod attractions;
pub mod frontend;
pub mod health;

pub use attractions::config as attractions_config;
pub use frontend::config as frontend_config;
pub use frontend::not_found;
pub use health::config as health_config;
