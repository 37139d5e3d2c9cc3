//! Read-only views of the owning song's data.

/// One editable event in the owning song. The editor only reads these;
/// mutation requests go back to the owner as an `EventUpdate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub id: u32,
    pub tick: f64,
    pub value: f64,
}

/// Snapshot of the transport state. The editor re-evaluates its scroll
/// rule whenever one of these fields changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Playback {
    pub is_playing: bool,
    pub position: f64,
}

/// Requested mutation of one event, produced by control-point drags.
/// The owner decides whether and how to apply it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventUpdate {
    pub id: u32,
    pub tick: f64,
    pub value: f64,
}
