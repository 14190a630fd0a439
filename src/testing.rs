//! In-memory host doubles for driving the state machines without a display.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::bridge::SaveDialog;
use crate::error::{Error, Result};
use crate::geometry::{GeometryProvider, Position, Rect, Size};
use crate::window::PopoverWindow;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Show,
    Hide,
    Focus,
    SetPosition(Position),
}

pub struct FakeWindow {
    size: Size,
    calls: RefCell<Vec<Call>>,
    position: Cell<Option<Position>>,
    inspector: Cell<bool>,
    fail_show: Cell<bool>,
}

impl FakeWindow {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: RefCell::new(Vec::new()),
            position: Cell::new(None),
            inspector: Cell::new(false),
            fail_show: Cell::new(false),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn position(&self) -> Option<Position> {
        self.position.get()
    }

    pub fn attach_inspector(&self, attached: bool) {
        self.inspector.set(attached);
    }

    pub fn fail_next_show(&self) {
        self.fail_show.set(true);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PopoverWindow for FakeWindow {
    fn show(&self) -> Result<()> {
        if self.fail_show.replace(false) {
            return Err(Error::host("show", "window handle is gone"));
        }
        self.record(Call::Show);
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.record(Call::Hide);
        Ok(())
    }

    fn focus(&self) -> Result<()> {
        self.record(Call::Focus);
        Ok(())
    }

    fn set_position(&self, position: Position) -> Result<()> {
        self.position.set(Some(position));
        self.record(Call::SetPosition(position));
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.size)
    }

    fn inspector_attached(&self) -> bool {
        self.inspector.get()
    }
}

pub struct FakeGeometry {
    tray: Cell<Option<Rect>>,
    screen: Cell<Option<Size>>,
}

impl FakeGeometry {
    pub fn new(tray: Rect, screen: Size) -> Self {
        Self {
            tray: Cell::new(Some(tray)),
            screen: Cell::new(Some(screen)),
        }
    }

    pub fn detached() -> Self {
        Self {
            tray: Cell::new(None),
            screen: Cell::new(None),
        }
    }

    pub fn move_tray(&self, tray: Rect) {
        self.tray.set(Some(tray));
    }

    pub fn resize_screen(&self, screen: Size) {
        self.screen.set(Some(screen));
    }
}

impl GeometryProvider for FakeGeometry {
    fn tray_bounds(&self) -> Option<Rect> {
        self.tray.get()
    }

    fn screen_area(&self) -> Option<Size> {
        self.screen.get()
    }
}

/// Answers every save prompt with a fixed choice.
pub struct FakeDialog {
    choice: Option<PathBuf>,
    asked: RefCell<Vec<String>>,
}

impl FakeDialog {
    pub fn choosing(path: PathBuf) -> Self {
        Self {
            choice: Some(path),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn canceling() -> Self {
        Self {
            choice: None,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl SaveDialog for FakeDialog {
    fn pick_path(&self, default_name: &str) -> Option<PathBuf> {
        self.asked.borrow_mut().push(default_name.to_string());
        self.choice.clone()
    }
}

/// Per-test directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "prompt-amplifier-{}-{}",
            label,
            std::process::id()
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_dir_is_removed_with_its_contents() {
        let scratch = ScratchDir::new("scratch-drop");
        let root = scratch.path().to_path_buf();
        std::fs::create_dir_all(scratch.join("nested")).unwrap();
        std::fs::write(scratch.join("nested").join("file.txt"), "left behind").unwrap();
        assert!(root.exists());

        drop(scratch);
        assert!(!root.exists());
    }
}
