//! Trait definitions

mod resource_handler;
mod tracker;

pub use resource_handler::ResourceHandler;
pub use tracker::Tracker;
