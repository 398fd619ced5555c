//! Visibility and position state of a single toolbar

use serde::{Deserialize, Serialize};

use crate::domain::{Anchor, DefaultPosition, Offset, Point, Size};

/// How an anchored toolbar reacts to viewport changes after first placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementMode {
    /// Resolve the anchor once; afterwards the position is a free coordinate
    #[default]
    FreeFloating,
    /// Re-resolve the anchor whenever the viewport changes, until the first drag
    AnchorLocked,
}

/// Where the current position came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Waiting for the toolbar to be measured
    Pending,
    /// Position is the resolved anchor
    Anchored,
    /// Explicit coordinates or moved by a drag
    Free,
}

/// An active grip drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer minus toolbar origin at grab time
    pub origin_offset: Offset,
}

#[derive(Debug, Clone)]
pub struct ToolbarState {
    is_open: bool,
    position: Point,
    drag: Option<DragSession>,
    placement: Placement,
    last_viewport: Option<Size>,
}

impl ToolbarState {
    pub fn new(default_open: bool, default_position: DefaultPosition) -> Self {
        let (position, placement) = match default_position {
            DefaultPosition::Explicit(point) => (point, Placement::Free),
            DefaultPosition::Anchor(_) => (Point::ORIGIN, Placement::Pending),
        };
        Self {
            is_open: default_open,
            position,
            drag: None,
            placement,
            last_viewport: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn drag(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Returns true if the toolbar was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }

    /// Returns true if the toolbar was closed
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.is_open, true)
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag = Some(DragSession {
            origin_offset: pointer - self.position,
        });
    }

    /// Move to follow `pointer`; returns false when no drag is active
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        self.position = pointer - session.origin_offset;
        self.placement = Placement::Free;
        true
    }

    /// Returns true if a drag was active
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Resolve the anchored position from a fresh measurement.
    ///
    /// Returns true when the position was written. Nothing happens while a drag
    /// is active or before the toolbar has a non-empty size.
    pub fn place(
        &mut self,
        anchor: Anchor,
        viewport: Size,
        toolbar: Size,
        padding: f32,
        mode: PlacementMode,
    ) -> bool {
        if self.drag.is_some() || toolbar.is_empty() {
            return false;
        }

        let viewport_changed = self.last_viewport != Some(viewport);
        self.last_viewport = Some(viewport);

        let resolve = match self.placement {
            Placement::Pending => true,
            Placement::Anchored => mode == PlacementMode::AnchorLocked && viewport_changed,
            Placement::Free => false,
        };
        if !resolve {
            return false;
        }

        self.position = anchor.resolve(viewport, toolbar, padding);
        self.placement = Placement::Anchored;
        true
    }

    /// Apply a changed default position; anchors wait for the next measurement
    pub fn reset_placement(&mut self, default_position: DefaultPosition) {
        match default_position {
            DefaultPosition::Explicit(point) => {
                self.position = point;
                self.placement = Placement::Free;
            }
            DefaultPosition::Anchor(_) => {
                self.placement = Placement::Pending;
            }
        }
    }
}
