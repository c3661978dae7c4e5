//! The interactive repositioning surface.
//!
//! A two-mode drag state machine: **move** and **resize**, mutually
//! exclusive, entered by pointer-down on the design placeholder or on its
//! resize handle. While a drag is active the host attaches global
//! pointer listeners and forwards every move here; `pointer_up` (or the
//! pointer leaving the window, which counts as a release) returns the
//! machine to idle, at which point the host removes its listeners.
//!
//! All manipulation happens in the editor's percent-of-container space on
//! a normalized `[0,100] x [0,100]` canvas; the placeholder can never
//! leave it. Conversion to the on-screen pixel space only happens on save,
//! through [`EditorPlacement::to_record`].

use placekit_core::constants::MIN_EDITOR_SIZE_PCT;
use placekit_geometry::{EditorPlacement, EditorRect};
use tracing::debug;

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The design placeholder body: starts a move.
    Body,
    /// The resize handle: starts a resize.
    ResizeHandle,
}

/// The drag state machine.
///
/// Transitions: `pointer_down → Moving | Resizing`, `pointer_move →
/// update`, `pointer_up → Idle`. Pointer positions are container-relative
/// pixels; the machine converts deltas to percent itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Moving {
        /// Last observed pointer position, container pixels.
        last: (f64, f64),
    },
    Resizing {
        /// Last observed pointer position, container pixels.
        last: (f64, f64),
    },
}

/// Interactive editor for one design placement.
#[derive(Debug, Clone)]
pub struct RepositionEditor {
    container: (f64, f64),
    rect: EditorRect,
    scale: f64,
    rotation: f64,
    state: DragState,
    initial: EditorPlacement,
}

impl RepositionEditor {
    /// Creates an editor over the given container size (pixels) starting
    /// from an existing placement.
    pub fn new(container: (f64, f64), placement: EditorPlacement) -> Self {
        let mut rect = placement.rect;
        rect.clamp_to_canvas();
        Self {
            container,
            rect,
            scale: placement.scale,
            rotation: placement.rotation,
            state: DragState::Idle,
            // The cancel baseline is the clamped rect, so cancel can never
            // restore an off-canvas position.
            initial: EditorPlacement { rect, ..placement },
        }
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag or resize is in progress (the host keeps its global
    /// pointer listeners attached exactly while this is true).
    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Current placeholder rect, percent space.
    pub fn rect(&self) -> EditorRect {
        self.rect
    }

    /// Current rotation, degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the rotation directly (slider/input path, not a drag mode).
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }

    /// The container was resized mid-session; subsequent deltas convert
    /// against the new size.
    pub fn container_resized(&mut self, width: f64, height: f64) {
        self.container = (width, height);
    }

    /// Pointer pressed on the placeholder or its handle.
    ///
    /// Ignored unless idle: move and resize are mutually exclusive.
    pub fn pointer_down(&mut self, target: HitTarget, position: (f64, f64)) {
        if self.state != DragState::Idle {
            return;
        }
        self.state = match target {
            HitTarget::Body => DragState::Moving { last: position },
            HitTarget::ResizeHandle => DragState::Resizing { last: position },
        };
    }

    /// Pointer moved while a drag may be active.
    ///
    /// Deltas are converted to percent of the container
    /// (`Δ% = Δpx / container_dim * 100`) and applied to position (move)
    /// or size (resize), clamped so the placeholder stays on the canvas.
    pub fn pointer_move(&mut self, position: (f64, f64)) {
        let (cw, ch) = self.container;
        if cw <= 0.0 || ch <= 0.0 {
            return;
        }

        match self.state {
            DragState::Idle => {}
            DragState::Moving { last } => {
                let dx = (position.0 - last.0) / cw * 100.0;
                let dy = (position.1 - last.1) / ch * 100.0;
                self.rect.x += dx;
                self.rect.y += dy;
                self.rect.clamp_to_canvas();
                self.state = DragState::Moving { last: position };
            }
            DragState::Resizing { last } => {
                let dw = (position.0 - last.0) / cw * 100.0;
                let dh = (position.1 - last.1) / ch * 100.0;
                self.rect.width = (self.rect.width + dw).clamp(MIN_EDITOR_SIZE_PCT, 100.0);
                self.rect.height = (self.rect.height + dh).clamp(MIN_EDITOR_SIZE_PCT, 100.0);
                self.rect.clamp_to_canvas();
                self.state = DragState::Resizing { last: position };
            }
        }
    }

    /// Pointer released: back to idle.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            debug!(rect = ?self.rect, "drag ended");
        }
        self.state = DragState::Idle;
    }

    /// The pointer left the window mid-drag; treated as a release so the
    /// host's global listeners always come off.
    pub fn pointer_left_window(&mut self) {
        self.pointer_up();
    }

    /// Emits the current placement for persistence and makes it the new
    /// baseline for [`cancel`](Self::cancel).
    pub fn save(&mut self) -> EditorPlacement {
        self.pointer_up();
        let placement = EditorPlacement {
            rect: self.rect,
            scale: self.scale,
            rotation: self.rotation,
        };
        self.initial = placement;
        placement
    }

    /// Discards all edits since construction or the last save.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
        self.rect = self.initial.rect;
        self.scale = self.initial.scale;
        self.rotation = self.initial.rotation;
    }
}
