//! Visibility state machine for the tray popover.
//!
//! The window is created once, hidden, and never destroyed outside of an
//! explicit quit. Every path that surfaces it goes through
//! [`VisibilityManager`].

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::geometry::{place_near_tray, GeometryProvider, Position, Size, TRAY_GAP};

/// Imperative window commands the host runtime has to provide.
pub trait PopoverWindow {
    fn show(&self) -> Result<()>;
    fn hide(&self) -> Result<()>;
    fn focus(&self) -> Result<()>;
    /// Moves without animating or resizing.
    fn set_position(&self, position: Position) -> Result<()>;
    fn size(&self) -> Result<Size>;

    /// Whether a debugging/inspection surface is attached.
    fn inspector_attached(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Keep the window alive; it has been hidden instead.
    Prevent,
    /// Let the host destroy the window.
    Allow,
}

pub struct VisibilityManager<W> {
    window: W,
    state: Visibility,
    gap: f64,
    hide_on_blur: bool,
}

impl<W: PopoverWindow> VisibilityManager<W> {
    pub fn new(window: W) -> Self {
        Self {
            window,
            state: Visibility::Hidden,
            gap: TRAY_GAP,
            hide_on_blur: true,
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_hide_on_blur(mut self, enabled: bool) -> Self {
        self.hide_on_blur = enabled;
        self
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn toggle(&mut self, geometry: &dyn GeometryProvider) -> Result<Visibility> {
        match self.state {
            Visibility::Visible => self.hide()?,
            Visibility::Hidden => {
                if let Some(position) = self.placement(geometry)? {
                    self.window.set_position(position)?;
                }
                self.surface()?;
            }
        }
        Ok(self.state)
    }

    /// Hides the window; a no-op when already hidden.
    pub fn hide(&mut self) -> Result<()> {
        if self.state == Visibility::Hidden {
            debug!("window already hidden");
            return Ok(());
        }
        self.window.hide()?;
        self.state = Visibility::Hidden;
        debug!("window hidden");
        Ok(())
    }

    pub fn on_blur(&mut self) -> Result<()> {
        if !self.hide_on_blur || self.state != Visibility::Visible {
            return Ok(());
        }
        if self.window.inspector_attached() {
            debug!("inspector attached, keeping window on blur");
            return Ok(());
        }
        self.hide()
    }

    pub fn on_close_requested(&mut self, quitting: bool) -> Result<CloseDecision> {
        if quitting {
            info!("close requested while quitting, allowing");
            return Ok(CloseDecision::Allow);
        }
        // hide even when already hidden
        self.window.hide()?;
        self.state = Visibility::Hidden;
        debug!("close intercepted, window hidden");
        Ok(CloseDecision::Prevent)
    }

    /// Surfaces the window at its last position, whatever the current state.
    pub fn on_external_show(&mut self) -> Result<()> {
        self.surface()
    }

    fn surface(&mut self) -> Result<()> {
        self.window.show()?;
        self.window.focus()?;
        self.state = Visibility::Visible;
        debug!("window shown");
        Ok(())
    }

    fn placement(&self, geometry: &dyn GeometryProvider) -> Result<Option<Position>> {
        let Some(tray) = geometry.tray_bounds() else {
            warn!("tray bounds unavailable, showing window at last position");
            return Ok(None);
        };
        let Some(screen) = geometry.screen_area() else {
            warn!("screen area unavailable, showing window at last position");
            return Ok(None);
        };
        let window = self.window.size()?;
        let position = place_near_tray(tray, window, screen, self.gap);
        debug!(?tray, ?window, ?screen, ?position, "placing window near tray");
        Ok(Some(position))
    }
}
