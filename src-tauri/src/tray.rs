use prompt_amplifier::{TrayActivation, TrayController};
use tauri::menu::{Menu, MenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent};
use tauri::App;
use tracing::info;

use crate::{handle_event, HostEvent};

pub const TRAY_ID: &str = "main";

pub fn setup_tray(app: &mut App, controller: &TrayController) -> anyhow::Result<()> {
    let handle = app.handle().clone();
    let items = controller
        .menu()
        .iter()
        .map(|entry| MenuItem::with_id(&handle, entry.id, entry.label, true, None::<&str>))
        .collect::<tauri::Result<Vec<_>>>()?;
    let refs: Vec<&dyn tauri::menu::IsMenuItem<tauri::Wry>> = items
        .iter()
        .map(|item| item as &dyn tauri::menu::IsMenuItem<tauri::Wry>)
        .collect();
    let menu = Menu::with_items(&handle, &refs)?;

    let mut builder = TrayIconBuilder::with_id(TRAY_ID)
        .title(controller.title())
        .tooltip(controller.tooltip())
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            handle_event(app, HostEvent::MenuItem(event.id.as_ref().to_string()));
        })
        .on_tray_icon_event(|tray, event| {
            let TrayIconEvent::Click {
                button,
                button_state: MouseButtonState::Up,
                ..
            } = event
            else {
                return;
            };
            let activation = match button {
                MouseButton::Left => TrayActivation::Primary,
                MouseButton::Right => TrayActivation::Secondary,
                _ => return,
            };
            handle_event(tray.app_handle(), HostEvent::Tray(activation));
        });

    // the title alone is enough on macOS; other platforms need an image
    if let Some(icon) = app.default_window_icon().cloned() {
        builder = builder.icon(icon);
    }

    builder.build(app)?;
    info!("tray icon created");

    Ok(())
}
