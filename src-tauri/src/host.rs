use prompt_amplifier::{
    Error, GeometryProvider, PopoverWindow, Position, Rect, Result, SaveConfig, SaveDialog, Size,
};
use std::path::PathBuf;
use tauri::{AppHandle, Manager, PhysicalPosition, WebviewWindow};
use tauri_plugin_dialog::DialogExt;
use tracing::warn;

use crate::tray::TRAY_ID;

/// The popover webview, driven through Tauri.
pub struct TauriWindow {
    window: WebviewWindow,
}

impl TauriWindow {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl PopoverWindow for TauriWindow {
    fn show(&self) -> Result<()> {
        self.window.show().map_err(|e| Error::host("show", e))
    }

    fn hide(&self) -> Result<()> {
        self.window.hide().map_err(|e| Error::host("hide", e))
    }

    fn focus(&self) -> Result<()> {
        self.window.set_focus().map_err(|e| Error::host("focus", e))
    }

    fn set_position(&self, position: Position) -> Result<()> {
        self.window
            .set_position(tauri::Position::Physical(PhysicalPosition {
                x: position.x,
                y: position.y,
            }))
            .map_err(|e| Error::host("set_position", e))
    }

    fn size(&self) -> Result<Size> {
        let size = self
            .window
            .outer_size()
            .map_err(|e| Error::host("outer_size", e))?;
        Ok(Size::new(size.width as f64, size.height as f64))
    }

    #[cfg(debug_assertions)]
    fn inspector_attached(&self) -> bool {
        self.window.is_devtools_open()
    }
}

/// Tray and monitor bounds in physical pixels.
pub struct TauriGeometry {
    app: AppHandle,
}

impl TauriGeometry {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn scale_factor(&self) -> f64 {
        self.app
            .get_webview_window(crate::WINDOW_LABEL)
            .and_then(|w| w.scale_factor().ok())
            .unwrap_or(1.0)
    }
}

impl GeometryProvider for TauriGeometry {
    fn tray_bounds(&self) -> Option<Rect> {
        let tray = self.app.tray_by_id(TRAY_ID)?;
        let rect = match tray.rect() {
            Ok(rect) => rect?,
            Err(e) => {
                warn!("failed to read tray bounds: {}", e);
                return None;
            }
        };

        let scale = self.scale_factor();
        let position = rect.position.to_physical::<f64>(scale);
        let size = rect.size.to_physical::<f64>(scale);
        Some(Rect::new(position.x, position.y, size.width, size.height))
    }

    fn screen_area(&self) -> Option<Size> {
        let monitor = match self.app.primary_monitor() {
            Ok(monitor) => monitor?,
            Err(e) => {
                warn!("failed to read primary monitor: {}", e);
                return None;
            }
        };

        let area = monitor.work_area();
        Some(Size::new(area.size.width as f64, area.size.height as f64))
    }
}

/// Native save dialog. Blocks the calling thread until the user answers.
pub struct TauriSaveDialog {
    app: AppHandle,
    filter_name: String,
    extensions: Vec<String>,
}

impl TauriSaveDialog {
    pub fn new(app: AppHandle, save: &SaveConfig) -> Self {
        Self {
            app,
            filter_name: save.filter_name.clone(),
            extensions: save.extensions.clone(),
        }
    }
}

impl SaveDialog for TauriSaveDialog {
    fn pick_path(&self, default_name: &str) -> Option<PathBuf> {
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        let file_path = self
            .app
            .dialog()
            .file()
            .set_file_name(default_name)
            .add_filter(&self.filter_name, &extensions)
            .blocking_save_file()?;

        match file_path.into_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("save dialog returned an unusable path: {}", e);
                None
            }
        }
    }
}
