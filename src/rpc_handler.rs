//! RPC method handler for the HotRoute JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches a method call to the link operations, render
//! engine, theme and settings held by [`App`].

use std::path::Path;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::link_manager::LinkManagerTrait;
use crate::services::render_engine;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::link::ImportOutcome;

fn str_param<'p>(params: &'p Value, key: &str) -> Option<&'p str> {
    params.get(key).and_then(|v| v.as_str())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with a user-presentable message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Links ───
        "link.add" => {
            let name = str_param(params, "name").unwrap_or("");
            let url = str_param(params, "url").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let link = a.links().add_link(name, url).map_err(|e| e.to_string())?;
            serde_json::to_value(link).map_err(|e| e.to_string())
        }
        "link.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let links = a.links().list().map_err(|e| e.to_string())?;
            serde_json::to_value(links).map_err(|e| e.to_string())
        }
        "link.search" => {
            let query = str_param(params, "query").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let links = a.links().search(query).map_err(|e| e.to_string())?;
            serde_json::to_value(links).map_err(|e| e.to_string())
        }
        "link.render" => {
            let query = str_param(params, "query").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let links = a.links().search(query).map_err(|e| e.to_string())?;
            let list = render_engine::render(&links);
            Ok(json!({"count": list.len(), "html": list.to_html(), "list": list}))
        }
        "link.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let deleted = a.links().delete_link(id).map_err(|e| e.to_string())?;
            Ok(json!({"deleted": deleted}))
        }
        "link.delete_all" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            a.links().delete_all().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "link.toggle_important" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let important = a.links().toggle_important(id).map_err(|e| e.to_string())?;
            Ok(json!({"important": important}))
        }
        "link.export" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let file = a.links().export().map_err(|e| e.to_string())?;
            let dir = match str_param(params, "dir") {
                Some(d) => std::path::PathBuf::from(d),
                None => a.export_dir(),
            };
            let path = file.write_to(&dir).map_err(|e| format!("Error writing file: {}", e))?;
            Ok(json!({"file_name": file.file_name, "path": path.to_string_lossy()}))
        }
        "link.import" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut links = a.links();
            let result = if let Some(contents) = str_param(params, "contents") {
                links.import_json(contents)
            } else if let Some(path) = str_param(params, "path") {
                links.import_file(Path::new(path))
            } else {
                return Err("missing contents or path".to_string());
            };
            let outcome = result.map_err(|e| format!("Error importing links: {}", e))?;
            Ok(match outcome {
                ImportOutcome::Imported(n) => json!({"imported": n, "nothing_new": false}),
                ImportOutcome::NothingNew => json!({"imported": 0, "nothing_new": true}),
            })
        }

        // ─── Theme ───
        "theme.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"dark_mode": a.theme_engine.is_dark(), "body_class": a.theme_engine.body_class()}))
        }
        "theme.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let dark = a.toggle_theme().map_err(|e| e.to_string())?;
            Ok(json!({"dark_mode": dark, "body_class": a.theme_engine.body_class()}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
