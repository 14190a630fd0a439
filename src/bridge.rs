//! Messages the UI surface sends to the host process.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::SaveConfig;

/// One message from the UI. Wire names are kebab-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BridgeCommand {
    HideWindow,
    QuitApp,
    SavePrompt { content: String },
}

impl BridgeCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HideWindow => "hide-window",
            Self::QuitApp => "quit-app",
            Self::SavePrompt { .. } => "save-prompt",
        }
    }
}

/// Result of a `save-prompt` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "SaveResponse")]
pub enum SaveOutcome {
    Saved(PathBuf),
    Canceled,
    Failed(String),
}

/// Wire shape of [`SaveOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SaveOutcome> for SaveResponse {
    fn from(outcome: SaveOutcome) -> Self {
        let mut response = SaveResponse {
            success: false,
            file_path: None,
            canceled: None,
            error: None,
        };
        match outcome {
            SaveOutcome::Saved(path) => {
                response.success = true;
                response.file_path = Some(path);
            }
            SaveOutcome::Canceled => response.canceled = Some(true),
            SaveOutcome::Failed(message) => response.error = Some(message),
        }
        response
    }
}

/// Native "save as" prompt.
pub trait SaveDialog {
    /// Returns `None` when the user dismisses the dialog.
    fn pick_path(&self, default_name: &str) -> Option<PathBuf>;
}

pub fn save_prompt(dialog: &dyn SaveDialog, config: &SaveConfig, content: &str) -> SaveOutcome {
    let path = dialog.pick_path(&config.default_file_name);
    write_prompt(path.as_deref(), content)
}

/// Writes `content` to the chosen path, or reports the cancellation.
pub fn write_prompt(path: Option<&Path>, content: &str) -> SaveOutcome {
    let Some(path) = path else {
        info!("save dialog canceled");
        return SaveOutcome::Canceled;
    };

    match std::fs::write(path, content.as_bytes()) {
        Ok(()) => {
            info!("saved prompt to {:?} ({} bytes)", path, content.len());
            SaveOutcome::Saved(path.to_path_buf())
        }
        Err(e) => {
            warn!("failed to save prompt to {:?}: {}", path, e);
            SaveOutcome::Failed(e.to_string())
        }
    }
}
