//! Interaction core for the timeline event editor: coordinate
//! transforms, viewport autoscroll, control-point hit testing, selection
//! drags, and inline list-field editing. Rendering and transport live in
//! the host application; this crate only reads song state and reports
//! requested changes back through commits.

pub mod config;
pub mod editor;
pub mod field;
pub mod quantizer;
pub mod song;
pub mod transform;
