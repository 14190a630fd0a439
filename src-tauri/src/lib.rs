use prompt_amplifier::{AppContext, Config, Reaction, SaveOutcome};
use std::sync::{Mutex, MutexGuard};
use tauri::{AppHandle, Manager, RunEvent, WebviewUrl, WebviewWindowBuilder, WindowEvent};
use tracing::{debug, error, info, warn};

mod host;
mod tray;

pub use host::{TauriGeometry, TauriSaveDialog, TauriWindow};
pub use prompt_amplifier::{BridgeCommand, HostEvent};

pub const WINDOW_LABEL: &str = "main";

type HostContext = AppContext<TauriWindow, TauriGeometry>;

pub struct AppState {
    context: Mutex<HostContext>,
}

impl AppState {
    fn new(context: HostContext) -> Self {
        Self {
            context: Mutex::new(context),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HostContext> {
        // ignore poisoning
        self.context.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Feeds one event through the core and carries out what it asks for.
pub fn handle_event(app: &AppHandle, event: HostEvent) -> Reaction {
    let Some(state) = app.try_state::<AppState>() else {
        debug!("event {:?} before state was managed", event);
        return Reaction::None;
    };

    let reaction = match state.lock().dispatch(event) {
        Ok(reaction) => reaction,
        Err(e) => {
            error!("failed to handle host event: {}", e);
            return Reaction::None;
        }
    };

    match &reaction {
        Reaction::Exit => {
            info!("exiting");
            app.exit(0);
        }
        Reaction::ShowMenu => debug!("tray menu shown by the platform"),
        _ => {}
    }
    reaction
}

#[tauri::command]
fn hide_window(app: AppHandle) {
    handle_event(&app, HostEvent::Bridge(BridgeCommand::HideWindow));
}

#[tauri::command]
fn quit_app(app: AppHandle) {
    handle_event(&app, HostEvent::Bridge(BridgeCommand::QuitApp));
}

#[tauri::command]
async fn save_prompt(app: AppHandle, content: String) -> SaveOutcome {
    let reaction = handle_event(&app, HostEvent::Bridge(BridgeCommand::SavePrompt { content }));
    let content = match reaction.into_save_request() {
        Ok(content) => content,
        Err(outcome) => return outcome,
    };

    let save = app.state::<AppState>().lock().config().save.clone();
    let dialog = TauriSaveDialog::new(app.clone(), &save);
    match tokio::task::spawn_blocking(move || {
        prompt_amplifier::save_prompt(&dialog, &save, &content)
    })
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("save task failed: {}", e);
            SaveOutcome::Failed(e.to_string())
        }
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_amplifier=info,amplifier_lib=info".into()),
        )
        .try_init();
}

fn setup(app: &mut tauri::App, config: Config) -> anyhow::Result<()> {
    // tray-only app, no dock icon
    #[cfg(target_os = "macos")]
    app.set_activation_policy(tauri::ActivationPolicy::Accessory);

    let handle = app.handle().clone();
    let window = WebviewWindowBuilder::new(&handle, WINDOW_LABEL, WebviewUrl::App("index.html".into()))
        .title(config.tray.tooltip.as_str())
        .inner_size(config.window.width, config.window.height)
        .visible(false)
        .decorations(config.window.decorations)
        .resizable(config.window.resizable)
        .always_on_top(config.window.always_on_top)
        .skip_taskbar(config.window.skip_taskbar)
        .build()?;

    let context = AppContext::new(
        config,
        TauriWindow::new(window),
        TauriGeometry::new(handle.clone()),
    );
    tray::setup_tray(app, context.tray())?;
    app.manage(AppState::new(context));

    handle_event(&handle, HostEvent::Ready);
    Ok(())
}

pub fn run() {
    init_logging();
    info!("prompt amplifier v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            warn!("falling back to default config: {}", e);
            Config::default()
        }
    };

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            handle_event(app, HostEvent::SecondInstance);
        }))
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            hide_window,
            quit_app,
            save_prompt,
        ])
        .setup(move |app| {
            setup(app, config)?;
            Ok(())
        })
        .on_window_event(|window, event| {
            if window.label() != WINDOW_LABEL {
                return;
            }
            match event {
                WindowEvent::Focused(false) => {
                    handle_event(window.app_handle(), HostEvent::Blur);
                }
                WindowEvent::CloseRequested { api, .. } => {
                    if handle_event(window.app_handle(), HostEvent::CloseRequested)
                        == Reaction::PreventClose
                    {
                        api.prevent_close();
                    }
                }
                _ => {}
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app, event| {
        if let RunEvent::ExitRequested { code, api, .. } = event {
            // no code: the last window went away on its own
            let host_event = match code {
                None => HostEvent::WindowAllClosed,
                Some(_) => HostEvent::BeforeQuit,
            };
            if handle_event(app, host_event) == Reaction::PreventExit {
                api.prevent_exit();
            }
        }
    });
}
