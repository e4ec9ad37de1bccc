//! WebView application using `wry` + `tao`.
//!
//! Architecture:
//! - The single page is served from the `hotroute://` custom protocol, built
//!   from the bundled HTML/CSS/JS with the current theme inlined.
//! - IPC from JS → Rust via `window.ipc.postMessage()`; Rust answers by
//!   evaluating `__hr_*` functions the page defines.
//! - Revealed urls revert on a timer driven by `ControlFlow::WaitUntil`.
//! - Links never open inside the app: new-window requests are denied and
//!   handed to the host shell, with a secondary window as the fallback.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tao::dpi::LogicalSize;
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopWindowTarget};
use tao::window::{Fullscreen, Window, WindowBuilder, WindowId};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::logging;
use crate::managers::add_dialog::DialogOutcome;
use crate::managers::link_manager::LinkManagerTrait;
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::platform;
use crate::services::render_engine::{self, html_escape};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::display::{Notification, NotificationKind};
use crate::types::errors::LinkError;
use crate::types::link::ImportOutcome;

const PAGE_URL: &str = "hotroute://localhost/";

#[derive(Debug, PartialEq)]
pub enum UserEvent {
    EvalScript(String),
    /// Shell delegation failed; show the url in a secondary window.
    OpenInWindow(String),
    /// Built-in help page markup.
    ShowHelp(String),
    ToggleFullscreen,
    Reload,
    Quit,
}

pub struct UiState {
    pub app: App,
    /// Current search box contents; every re-render applies it.
    pub query: String,
}

impl UiState {
    pub fn new(app: App) -> Self {
        Self { app, query: String::new() }
    }
}

/// A url opened in its own window. The webview drops before its window.
struct Popup {
    _webview: WebView,
    window: Window,
}

/// Full page markup with the current theme applied.
fn page_html(app: &App) -> String {
    include_str!("../../resources/ui/index.html")
        .replace("{{THEME_VARS}}", &app.theme_engine.css_root_block())
        .replace("{{STYLES}}", include_str!("../../resources/ui/styles.css"))
        .replace("{{BODY_CLASS}}", app.theme_engine.body_class())
        .replace("{{THEME_ICON}}", app.theme_engine.toggle_icon())
        .replace("{{APP_JS}}", include_str!("../../resources/ui/app.js"))
        .replace("{{SHORTCUTS}}", &bound_keys_json(app))
}

/// JSON array of the key combinations the page hands over as shortcuts.
fn bound_keys_json(app: &App) -> String {
    serde_json::to_string(&app.shortcut_manager.bound_keys()).unwrap_or_else(|_| "[]".to_string())
}

/// Help window markup: the version and a row per shortcut.
fn help_html(app: &App) -> String {
    let rows: String = app
        .shortcut_manager
        .sorted_bindings()
        .into_iter()
        .map(|(action, keys)| {
            format!(
                "<li><span>{}</span><kbd>{}</kbd></li>",
                html_escape(&action.replace('_', " ")),
                html_escape(keys)
            )
        })
        .collect();
    include_str!("../../resources/ui/help.html")
        .replace("{{THEME_VARS}}", &app.theme_engine.css_root_block())
        .replace("{{STYLES}}", include_str!("../../resources/ui/styles.css"))
        .replace("{{BODY_CLASS}}", app.theme_engine.body_class())
        .replace("{{VERSION}}", env!("CARGO_PKG_VERSION"))
        .replace("{{SHORTCUT_ROWS}}", &rows)
}

fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

// ─── Scripts ───

/// Re-renders the list for the current query. Rendering drops every
/// pending reveal, since the fresh markup shows names again.
fn render_script(state: &mut UiState) -> String {
    state.app.reveal_tracker.clear();
    let links = match state.app.links().search(&state.query) {
        Ok(links) => links,
        Err(e) => {
            tracing::error!(error = %e, "failed to load links");
            return notify_script(&state.app, &Notification::new(e.to_string(), NotificationKind::Error));
        }
    };
    let html = render_engine::render(&links).to_html();
    format!("__hr_render({})", js_str(&html))
}

fn notify_script(app: &App, n: &Notification) -> String {
    let kind = match n.kind {
        NotificationKind::Success => "success",
        NotificationKind::Info => "info",
        NotificationKind::Warning => "warning",
        NotificationKind::Error => "error",
    };
    format!(
        "__hr_toast({},{},{})",
        js_str(&n.message),
        js_str(kind),
        app.settings_engine.get_settings().display.notification_timeout_ms
    )
}

fn theme_script(app: &App) -> String {
    format!(
        "__hr_applyTheme({},{},{})",
        js_str(app.theme_engine.body_class()),
        js_str(app.theme_engine.toggle_icon()),
        js_str(&app.theme_engine.css_root_block())
    )
}

fn eval(scripts: Vec<String>) -> Vec<UserEvent> {
    vec![UserEvent::EvalScript(scripts.join(";"))]
}

fn open_url(url: &str) -> Vec<UserEvent> {
    match platform::open_external(url) {
        Ok(()) => Vec::new(),
        Err(e) => {
            tracing::warn!(url, error = %e, "host shell refused url, opening in a window");
            vec![UserEvent::OpenInWindow(url.to_string())]
        }
    }
}

fn open_dialog(state: &mut UiState) -> Vec<UserEvent> {
    state.app.add_dialog.open();
    eval(vec!["__hr_dialog(true)".to_string()])
}

// ─── IPC handler ───

/// Handles one IPC message from the page and returns what the event loop
/// should do in response.
pub fn handle_ipc(state: &mut UiState, message: &str) -> Vec<UserEvent> {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "malformed ipc message");
            return Vec::new();
        }
    };
    let Some(cmd) = msg.get("cmd").and_then(|v| v.as_str()) else {
        return Vec::new();
    };
    let param = |key: &str| msg.get(key).and_then(|v| v.as_str()).unwrap_or("");

    match cmd {
        "ui_ready" => eval(vec![theme_script(&state.app), render_script(state)]),

        "dialog_open" => open_dialog(state),

        "dialog_cancel" => {
            state.app.add_dialog.cancel();
            eval(vec!["__hr_dialog(false)".to_string()])
        }

        "save_link" => match state.app.add_dialog.submit(param("name"), param("url")) {
            DialogOutcome::Invalid(message) => eval(vec![format!("__hr_dialogError({})", js_str(&message))]),
            DialogOutcome::Valid { name, url } => {
                let added = state.app.links().add_link(&name, &url);
                match added {
                    Ok(link) => {
                        tracing::info!(id = %link.id, "link added");
                        state.app.add_dialog.saved();
                        eval(vec!["__hr_dialog(false)".to_string(), render_script(state)])
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to add link");
                        let message = e.to_string();
                        state.app.add_dialog.save_failed(message.clone());
                        eval(vec![format!("__hr_dialogError({})", js_str(&message))])
                    }
                }
            }
        },

        "delete_link" => {
            let deleted = state.app.links().delete_link(param("id"));
            match deleted {
                Ok(_) => eval(vec![render_script(state)]),
                Err(e) => eval(vec![notify_script(
                    &state.app,
                    &Notification::new(e.to_string(), NotificationKind::Error),
                )]),
            }
        }

        "delete_all" => {
            let cleared = state.app.links().delete_all();
            let n = match cleared {
                Ok(()) => Notification::new("All links deleted", NotificationKind::Success),
                Err(e) => Notification::new(e.to_string(), NotificationKind::Error),
            };
            eval(vec![render_script(state), notify_script(&state.app, &n)])
        }

        "toggle_important" => {
            let toggled = state.app.links().toggle_important(param("id"));
            match toggled {
                Ok(_) => eval(vec![render_script(state)]),
                Err(e) => eval(vec![notify_script(
                    &state.app,
                    &Notification::new(e.to_string(), NotificationKind::Error),
                )]),
            }
        }

        "search" => {
            state.query = param("query").to_string();
            eval(vec![render_script(state)])
        }

        "reveal" => {
            let id = param("id");
            if id.is_empty() {
                return Vec::new();
            }
            state.app.reveal_tracker.reveal(id, Instant::now());
            eval(vec![format!("__hr_reveal({},true)", js_str(id))])
        }

        "open_external" => {
            let url = param("url");
            if url.is_empty() {
                return Vec::new();
            }
            open_url(url)
        }

        "export" => {
            let n = match state.app.links().export() {
                Ok(file) => match file.write_to(&state.app.export_dir()) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "links exported");
                        Notification::new(
                            format!("Links exported to {}", path.display()),
                            NotificationKind::Success,
                        )
                    }
                    Err(e) => Notification::new(format!("Error writing file: {}", e), NotificationKind::Error),
                },
                Err(LinkError::NothingToExport) => {
                    Notification::new(LinkError::NothingToExport.to_string(), NotificationKind::Warning)
                }
                Err(e) => Notification::new(e.to_string(), NotificationKind::Error),
            };
            eval(vec![notify_script(&state.app, &n)])
        }

        "import" => {
            let outcome = state.app.links().import_json(param("contents"));
            match outcome {
                Ok(ImportOutcome::Imported(count)) => {
                    let n = Notification::new(
                        format!("Imported {} new links", count),
                        NotificationKind::Success,
                    );
                    eval(vec![render_script(state), notify_script(&state.app, &n)])
                }
                Ok(ImportOutcome::NothingNew) => {
                    let n = Notification::new("All links already exist", NotificationKind::Info);
                    eval(vec![notify_script(&state.app, &n)])
                }
                Err(e) => {
                    tracing::warn!(error = %e, "import rejected");
                    let n = Notification::new(format!("Error importing links: {}", e), NotificationKind::Error);
                    eval(vec![notify_script(&state.app, &n)])
                }
            }
        }

        "import_error" => {
            let n = Notification::new("Error reading file", NotificationKind::Error);
            eval(vec![notify_script(&state.app, &n)])
        }

        "toggle_theme" => match state.app.toggle_theme() {
            Ok(_) => eval(vec![theme_script(&state.app)]),
            Err(e) => eval(vec![notify_script(
                &state.app,
                &Notification::new(e.to_string(), NotificationKind::Error),
            )]),
        },

        "shortcut" => {
            let action = state.app.shortcut_manager.action_for(param("keys")).map(str::to_string);
            match action.as_deref() {
                Some("quit") => vec![UserEvent::Quit],
                Some("reload") => vec![UserEvent::Reload],
                Some("toggle_fullscreen") => vec![UserEvent::ToggleFullscreen],
                Some("help") => match state.app.settings_engine.get_settings().help_url.clone() {
                    Some(url) => open_url(&url),
                    None => vec![UserEvent::ShowHelp(help_html(&state.app))],
                },
                Some("add_link") => open_dialog(state),
                Some("focus_search") => eval(vec!["__hr_focusSearch()".to_string()]),
                _ => Vec::new(),
            }
        }

        other => {
            tracing::debug!(cmd = other, "unhandled ipc command");
            Vec::new()
        }
    }
}

// ─── Window plumbing ───

fn attach_webview(builder: WebViewBuilder<'_>, window: &Window) -> Result<WebView, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().ok_or("window has no GTK container")?;
        Ok(builder.build_gtk(vbox)?)
    }

    #[cfg(not(target_os = "linux"))]
    {
        Ok(builder.build(window)?)
    }
}

fn open_popup(
    target: &EventLoopWindowTarget<UserEvent>,
    title: &str,
    size: LogicalSize<f64>,
    builder: WebViewBuilder<'_>,
) -> Result<Popup, Box<dyn std::error::Error>> {
    let window = WindowBuilder::new().with_title(title).with_inner_size(size).build(target)?;
    let webview = attach_webview(builder.with_devtools(false), &window)?;
    Ok(Popup { _webview: webview, window })
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut boot_settings = SettingsEngine::new(None);
    let settings = boot_settings.load().unwrap_or_default();
    logging::init(&settings.log_filter);

    let db_path = platform::database_path();
    let app = App::new(&db_path.to_string_lossy(), None)?;
    let win = app.settings_engine.get_settings().window.clone();
    let state = Arc::new(Mutex::new(UiState::new(app)));

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&win.title)
        .with_inner_size(LogicalSize::new(win.width as f64, win.height as f64))
        .with_min_inner_size(LogicalSize::new(win.min_width as f64, win.min_height as f64))
        .build(&event_loop)?;
    let main_id = window.id();

    let page_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy;

    let builder = WebViewBuilder::new()
        .with_custom_protocol("hotroute".into(), move |_wv_id, _request| {
            let html = match page_state.lock() {
                Ok(s) => page_html(&s.app),
                Err(_) => String::new(),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(Cow::Owned(html.into_bytes()))
                .unwrap_or_else(|_| wry::http::Response::new(Cow::Borrowed(&[][..])))
        })
        .with_url(PAGE_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            tracing::trace!(len = body.len(), "ipc message");
            let events = match ipc_state.lock() {
                Ok(mut s) => handle_ipc(&mut s, body),
                Err(_) => return,
            };
            for event in events {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            tracing::debug!(%url, "new window request");
            for event in open_url(&url) {
                let _ = nw_proxy.send_event(event);
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(false);

    let webview = attach_webview(builder, &window)?;
    let mut popups: HashMap<WindowId, Popup> = HashMap::new();

    event_loop.run(move |event, target, control_flow| {
        match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                let expired = match state.lock() {
                    Ok(mut s) => s.app.reveal_tracker.expire(Instant::now()),
                    Err(_) => Vec::new(),
                };
                for id in expired {
                    let _ = webview.evaluate_script(&format!("__hr_reveal({},false)", js_str(&id)));
                }
            }

            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if window_id == main_id {
                    tracing::info!("main window closed");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                popups.remove(&window_id);
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::OpenInWindow(url) => {
                    let builder = WebViewBuilder::new().with_url(url.as_str());
                    match open_popup(target, &url, LogicalSize::new(1024.0, 768.0), builder) {
                        Ok(popup) => {
                            popups.insert(popup.window.id(), popup);
                        }
                        Err(e) => tracing::error!(%url, error = %e, "failed to open url window"),
                    }
                }
                UserEvent::ShowHelp(html) => {
                    let builder = WebViewBuilder::new().with_html(html);
                    match open_popup(target, "HotRoute help", LogicalSize::new(420.0, 520.0), builder) {
                        Ok(popup) => {
                            popups.insert(popup.window.id(), popup);
                        }
                        Err(e) => tracing::error!(error = %e, "failed to open help window"),
                    }
                }
                UserEvent::ToggleFullscreen => {
                    let next = match window.fullscreen() {
                        Some(_) => None,
                        None => Some(Fullscreen::Borderless(None)),
                    };
                    window.set_fullscreen(next);
                }
                UserEvent::Reload => {
                    if let Ok(mut s) = state.lock() {
                        s.app.reveal_tracker.clear();
                        s.app.add_dialog.cancel();
                    }
                    let _ = webview.load_url(PAGE_URL);
                }
                UserEvent::Quit => {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            },

            _ => {}
        }

        let deadline = state.lock().ok().and_then(|s| s.app.reveal_tracker.next_deadline());
        *control_flow = match deadline {
            Some(at) => ControlFlow::WaitUntil(at),
            None => ControlFlow::Wait,
        };
    })
}
