//! Drop target state for the intake area.
//!
//! Tracks whether something is being dragged over the zone, suppresses the
//! platform's default "open the file" handling for drag events, and turns a
//! drop or dialog selection into at most one selected file.

use super::ALLOWED_EXTENSIONS;

/// Pointer events delivered to the drop zone.
#[derive(Debug)]
pub enum DragEvent<F> {
    Enter,
    Over,
    Leave,
    Drop(Vec<F>),
}

/// What the zone did with an event.
#[derive(Debug)]
pub struct EventResponse<F> {
    /// The platform default for this event must not run.
    pub default_prevented: bool,
    /// The file selected by this gesture, if any.
    pub selected: Option<F>,
}

/// Parameters for opening the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    /// Extensions offered by the picker (without dots).
    pub accept: &'static [&'static str],
}

/// Drop zone with its dragging flag and disabled gate.
#[derive(Debug, Default)]
pub struct DropZone {
    dragging: bool,
    disabled: bool,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zone whose file picker will not open.
    pub fn disabled() -> Self {
        Self {
            dragging: false,
            disabled: true,
        }
    }

    /// Whether a drag is currently hovering over the zone.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Handle a pointer event.
    ///
    /// Only the first file of a multi-file drop is used; an empty drop
    /// selects nothing.
    pub fn handle<F>(&mut self, event: DragEvent<F>) -> EventResponse<F> {
        let selected = match event {
            DragEvent::Enter => {
                self.dragging = true;
                None
            }
            DragEvent::Over => None,
            DragEvent::Leave => {
                self.dragging = false;
                None
            }
            DragEvent::Drop(files) => {
                self.dragging = false;
                files.into_iter().next()
            }
        };
        EventResponse {
            default_prevented: true,
            selected,
        }
    }

    /// Request the file picker. `None` while disabled.
    pub fn open_dialog(&self) -> Option<DialogRequest> {
        if self.disabled {
            return None;
        }
        Some(DialogRequest {
            accept: ALLOWED_EXTENSIONS,
        })
    }

    /// Accept the picker's result: the first file, unless disabled or empty.
    pub fn select_from_dialog<F>(&self, files: Vec<F>) -> Option<F> {
        if self.disabled {
            return None;
        }
        files.into_iter().next()
    }
}
