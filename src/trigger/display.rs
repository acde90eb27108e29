use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::core::Viewport;
use crate::mood::category::MoodCategory;
use crate::mood::style::{MoodStyle, style_for};
use crate::render::synth::Wallpaper;

/// Full-bleed background handed to the display surface: image plus gradient overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub mood: MoodCategory,
    pub wallpaper: Arc<Wallpaper>,
    /// Style whose gradient pair is composited above the image.
    pub style: &'static MoodStyle,
}

impl Backdrop {
    pub fn new(mood: MoodCategory, wallpaper: Arc<Wallpaper>) -> Self {
        Self {
            mood,
            wallpaper,
            style: style_for(mood),
        }
    }

    pub fn css_overlay(&self) -> String {
        self.style.css_overlay()
    }
}

/// Host-side surface that shows the backdrop. Last write wins.
pub trait DisplaySurface {
    fn present(&mut self, backdrop: &Backdrop);
    fn clear(&mut self);
}

/// Host-side viewport, read whenever a target resolution is needed.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Viewport cell shared between a host shell and the trigger.
#[derive(Clone, Debug)]
pub struct SharedViewport(Rc<RefCell<Viewport>>);

impl SharedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self(Rc::new(RefCell::new(viewport)))
    }

    pub fn set(&self, viewport: Viewport) {
        *self.0.borrow_mut() = viewport;
    }
}

impl ViewportSource for SharedViewport {
    fn viewport(&self) -> Viewport {
        *self.0.borrow()
    }
}

/// Surface that records every presentation; useful for headless shells and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<Vec<Option<Backdrop>>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// What is currently shown, if anything.
    pub fn current(&self) -> Option<Backdrop> {
        self.log.borrow().last().cloned().flatten()
    }

    /// Number of `present` calls so far.
    pub fn present_count(&self) -> usize {
        self.log.borrow().iter().filter(|e| e.is_some()).count()
    }

    /// Every presented backdrop in order, skipping clears.
    pub fn presented(&self) -> Vec<Backdrop> {
        self.log.borrow().iter().flatten().cloned().collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn present(&mut self, backdrop: &Backdrop) {
        self.log.borrow_mut().push(Some(backdrop.clone()));
    }

    fn clear(&mut self) {
        self.log.borrow_mut().push(None);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/display.rs"]
mod tests;
