// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod attraction;
pub mod bounds;

pub use attraction::*;
pub use bounds::*;
