pub mod args;
pub mod cues;
pub mod outline;
pub mod qa;
pub mod script;
pub mod slides;
