//! Viewport, selection, and pointer interaction state for the event graph.

use macroquad::math::{Rect, Vec2};
use ordered_float::OrderedFloat;

use crate::config::Config;
use crate::quantizer::Quantizer;
use crate::song::{Event, EventUpdate, Playback};
use crate::transform::CoordTransform;

/// Horizontal scale at 1x zoom, in pixels per tick.
pub const PIXELS_PER_TICK: f32 = 0.1;

/// Default value mapped to the top edge of the canvas.
pub const DEFAULT_MAX_VALUE: f64 = 127.0;

const DEFAULT_SCROLL_ZONE_RATIO: f32 = 0.7;
const DEFAULT_POINT_RADIUS: f32 = 4.0;
const MIN_SCALE_X: f32 = 0.05;

/// Pointer tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseMode {
    #[default]
    Pencil,
    Selection,
}

/// Active tick range. Ends are in drag order, not sorted; use `bounds`
/// for normalized screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub start_tick: f64,
    pub end_tick: f64,
}

impl Selection {
    /// Screen rectangle of the selection under the given transform,
    /// spanning the full canvas height.
    pub fn bounds(&self, transform: &CoordTransform) -> Rect {
        let from = self.start_tick.min(self.end_tick);
        let to = self.start_tick.max(self.end_tick);
        let x = transform.get_x(from);
        Rect::new(x, 0.0, transform.get_x(to) - x, transform.canvas_height)
    }
}

/// Draggable hit area for one event. Derived on every read; never
/// persisted across transform changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub id: u32,
    pub rect: Rect,
}

/// Square hit area of the given radius centered on a point.
fn point_rect(center: Vec2, radius: f32) -> Rect {
    Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
}

/// Pointer drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Drag {
    None,
    /// Extending the selection from its anchor tick.
    Select,
    /// Moving the control point of one event.
    Move(u32),
}

/// Interaction state for the event graph view. Pointer coordinates are
/// in content space: canvas-local x plus `scroll_left`.
pub struct GraphEditor {
    pub scroll_left: f32,
    pub scale_x: f32,
    pub auto_scroll: bool,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Value mapped to the top edge of the canvas.
    pub max_value: f64,
    pub quantize: u16,
    pub quantize_enabled: bool,
    pub mouse_mode: MouseMode,
    pub selection: Option<Selection>,
    scroll_zone_ratio: f32,
    point_radius: f32,
    drag: Drag,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self {
            scroll_left: 0.0,
            scale_x: 1.0,
            auto_scroll: true,
            canvas_width: 0.0,
            canvas_height: 0.0,
            max_value: DEFAULT_MAX_VALUE,
            quantize: 4,
            quantize_enabled: true,
            mouse_mode: MouseMode::default(),
            selection: None,
            scroll_zone_ratio: DEFAULT_SCROLL_ZONE_RATIO,
            point_radius: DEFAULT_POINT_RADIUS,
            drag: Drag::None,
        }
    }
}

impl GraphEditor {
    pub fn new(config: &Config) -> Self {
        let default = Self::default();
        Self {
            auto_scroll: config.auto_scroll.unwrap_or(default.auto_scroll),
            quantize: config.quantize.unwrap_or(default.quantize),
            quantize_enabled: config.quantize_enabled
                .unwrap_or(default.quantize_enabled),
            scroll_zone_ratio: config.scroll_zone_ratio
                .unwrap_or(default.scroll_zone_ratio),
            point_radius: config.point_radius.unwrap_or(default.point_radius),
            ..default
        }
    }

    /// Current coordinate transform. Rebuilt on every read so derived
    /// state can never lag behind a zoom or resize.
    pub fn transform(&self) -> CoordTransform {
        CoordTransform::new(PIXELS_PER_TICK * self.scale_x,
            self.canvas_height, self.max_value)
    }

    pub fn quantizer(&self) -> Quantizer {
        Quantizer::new(self.quantize, self.quantize_enabled)
    }

    pub fn set_scroll_left(&mut self, x: f32) {
        self.scroll_left = x;
    }

    pub fn set_scale_x(&mut self, scale: f32) {
        self.scale_x = scale.max(MIN_SCALE_X);
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Returns the x coordinate of the playhead.
    pub fn cursor_x(&self, playback: &Playback) -> f32 {
        self.transform().get_x(playback.position)
    }

    /// Position of the playhead relative to the left edge of the screen.
    pub fn playhead_screen_offset(&self, playback: &Playback) -> f32 {
        self.cursor_x(playback) - self.scroll_left
    }

    /// Whether the user needs to scroll to comfortably view the playhead.
    pub fn playhead_in_scroll_zone(&self, offset: f32) -> bool {
        offset < 0.0 || offset > self.canvas_width * self.scroll_zone_ratio
    }

    /// Keeps the scroll position tracking the playhead. Level-triggered:
    /// call whenever the playback state, zoom, scroll position, or
    /// auto-scroll flag changes.
    pub fn update_scroll(&mut self, playback: &Playback) {
        let offset = self.playhead_screen_offset(playback);
        if playback.is_playing && self.auto_scroll
            && self.playhead_in_scroll_zone(offset) {
            self.scroll_left = self.cursor_x(playback);
        }
    }

    /// Width of the scrollable area: enough to show every event through
    /// `end_of_song`, and never less than the currently visible window.
    pub fn content_width(&self, end_of_song: f64) -> f32 {
        let transform = self.transform();
        let start_tick = transform.get_tick(self.scroll_left);
        let width_tick = transform.get_tick(self.canvas_width);
        transform.get_x(end_of_song.max(start_tick + width_tick))
    }

    /// Hit areas for each event, in event-list order. Events mapped past
    /// the right edge of the visible window are skipped.
    pub fn control_points(&self, events: &[Event]) -> Vec<ControlPoint> {
        let transform = self.transform();
        let max_x = self.scroll_left + self.canvas_width;
        events.iter().filter_map(|e| {
            let x = transform.get_x(e.tick);
            if x > max_x {
                return None;
            }
            let center = Vec2::new(x, transform.get_y(e.value));
            Some(ControlPoint {
                id: e.id,
                rect: point_rect(center, self.point_radius),
            })
        }).collect()
    }

    /// Returns the id of the first control point in list order whose box
    /// contains `point`, if any.
    pub fn hit_test(&self, events: &[Event], point: Vec2) -> Option<u32> {
        self.control_points(events).iter()
            .find(|p| p.rect.contains(point))
            .map(|p| p.id)
    }

    /// Screen rectangle of the active selection, or None if there is no
    /// selection.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection.as_ref().map(|s| s.bounds(&self.transform()))
    }

    /// Ids of the events inside the active selection's tick range.
    pub fn selected_event_ids(&self, events: &[Event]) -> Vec<u32> {
        match &self.selection {
            Some(s) => {
                let from = s.start_tick.min(s.end_tick);
                let to = s.start_tick.max(s.end_tick);
                events.iter()
                    .filter(|e| e.tick >= from && e.tick <= to)
                    .map(|e| e.id)
                    .collect()
            }
            None => Vec::new(),
        }
    }

    /// Tick of the closest event after `tick`, if any.
    pub fn next_event_tick(&self, events: &[Event], tick: f64) -> Option<f64> {
        Self::nearest_event_tick(events, tick, |t| t > tick)
    }

    /// Tick of the closest event before `tick`, if any.
    pub fn prev_event_tick(&self, events: &[Event], tick: f64) -> Option<f64> {
        Self::nearest_event_tick(events, tick, |t| t < tick)
    }

    fn nearest_event_tick(events: &[Event], tick: f64,
        filter_fn: impl Fn(f64) -> bool
    ) -> Option<f64> {
        events.iter()
            .map(|e| e.tick)
            .filter(|t| filter_fn(*t))
            .min_by_key(|t| OrderedFloat((t - tick).abs()))
    }

    /// Handles a press in the canvas. In pencil mode a hit control point
    /// starts a move drag; in selection mode a new selection is anchored
    /// at the (quantized) pressed tick.
    pub fn mouse_down(&mut self, events: &[Event], point: Vec2) {
        match self.mouse_mode {
            MouseMode::Pencil => {
                self.drag = match self.hit_test(events, point) {
                    Some(id) => Drag::Move(id),
                    None => Drag::None,
                };
            }
            MouseMode::Selection => {
                let tick = self.point_tick(point);
                self.selection = Some(Selection { start_tick: tick, end_tick: tick });
                self.drag = Drag::Select;
            }
        }
    }

    /// Handles pointer movement during a drag. Returns the event update
    /// requested by a move drag, if any; the owner applies it.
    pub fn mouse_move(&mut self, point: Vec2) -> Option<EventUpdate> {
        match self.drag {
            Drag::None => None,
            Drag::Select => {
                let tick = self.point_tick(point);
                if let Some(s) = &mut self.selection {
                    s.end_tick = tick;
                }
                None
            }
            Drag::Move(id) => {
                let value = self.transform().get_value(point.y)
                    .clamp(0.0, self.max_value);
                Some(EventUpdate { id, tick: self.point_tick(point), value })
            }
        }
    }

    pub fn mouse_up(&mut self) {
        self.drag = Drag::None;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Quantized, non-negative tick at a content-space x coordinate.
    fn point_tick(&self, point: Vec2) -> f64 {
        self.quantizer().round(self.transform().get_tick(point.x)).max(0.0)
    }
}
