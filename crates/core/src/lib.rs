// Core types and layout engine for the Flowdeck workflow dashboard

pub mod layout;
pub mod status;
pub mod types;

pub use types::*;
