//! RPC method handler for the Domain Vault JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! managers and engines via the `App` struct. Validation failures and
//! store errors come back as the error string the UI shows in a toast.

use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::domain_manager::DomainManagerTrait;
use crate::managers::provider_manager::ProviderManagerTrait;
use crate::services::localization_engine::LocalizationEngineTrait;
use crate::services::{ics_exporter, lookup_service};
use crate::types::domain::DomainDraft;
use crate::types::provider::ProviderDraft;
use crate::types::settings::SettingsPatch;

fn str_param(params: &Value, key: &str) -> Option<String> {
    params.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

/// Checks that an uploaded profile picture is a well-formed base64 image
/// data URL ("data:image/png;base64,....") before it lands in settings.
pub fn validate_profile_picture(data_url: &str) -> Result<(), String> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or("profile picture must be a data URL")?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or("profile picture data URL must be base64-encoded")?;
    if !mime.starts_with("image/") {
        return Err(format!("unsupported profile picture type: {}", mime));
    }
    BASE64
        .decode(payload)
        .map_err(|e| format!("profile picture payload is not valid base64: {}", e))?;
    Ok(())
}

/// Builds a domain draft from the RPC params (camelCase keys, everything
/// as text, matching the form fields).
fn domain_draft(params: &Value) -> DomainDraft {
    DomainDraft {
        name: str_param(params, "name").unwrap_or_default(),
        provider: str_param(params, "provider").unwrap_or_default(),
        renewal_date: str_param(params, "renewalDate").unwrap_or_default(),
        price: str_param(params, "price").unwrap_or_default(),
        purchase_date: str_param(params, "purchaseDate").unwrap_or_default(),
        purchase_price: str_param(params, "purchasePrice").unwrap_or_default(),
        auto_renew: params
            .get("autoRenew")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    }
}

fn provider_draft(params: &Value) -> ProviderDraft {
    ProviderDraft {
        name: str_param(params, "name").unwrap_or_default(),
        url: str_param(params, "url").unwrap_or_default(),
        username: str_param(params, "username").unwrap_or_default(),
        password: str_param(params, "password").unwrap_or_default(),
        user_id: str_param(params, "userId").unwrap_or_default(),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Domains ───
        "domain.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let domains = a.domains().map_err(|e| e.to_string())?;
            serde_json::to_value(domains).map_err(|e| e.to_string())
        }
        "domain.add" => {
            let draft = domain_draft(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store,
                domain_manager,
                ..
            } = &mut *a;
            let id = domain_manager
                .add_domain(store.as_mut(), &draft)
                .map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "domain.update" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let draft = domain_draft(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store,
                domain_manager,
                ..
            } = &mut *a;
            domain_manager
                .update_domain(store.as_mut(), &id, &draft)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "domain.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let confirmed = params
                .get("confirmed")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store,
                domain_manager,
                ..
            } = &mut *a;
            domain_manager
                .delete_domain(store.as_mut(), &id, confirmed)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "domain.search" => {
            let query = str_param(params, "query").unwrap_or_default();
            let a = app.lock().map_err(|e| e.to_string())?;
            let domains = a
                .domain_manager
                .search_domains(a.store.as_ref(), &query)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(domains).map_err(|e| e.to_string())
        }

        // ─── Providers ───
        "provider.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let providers = a.providers().map_err(|e| e.to_string())?;
            serde_json::to_value(providers).map_err(|e| e.to_string())
        }
        "provider.add" => {
            let draft = provider_draft(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store,
                provider_manager,
                ..
            } = &mut *a;
            let id = provider_manager
                .add_provider(store.as_mut(), &draft)
                .map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "provider.update" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let draft = provider_draft(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store,
                provider_manager,
                ..
            } = &mut *a;
            provider_manager
                .update_provider(store.as_mut(), &id, &draft)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "provider.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let confirmed = params
                .get("confirmed")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store,
                provider_manager,
                ..
            } = &mut *a;
            provider_manager
                .delete_provider(store.as_mut(), &id, confirmed)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "provider.credentials" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let view = a
                .provider_manager
                .credentials(a.store.as_ref(), &id)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(view).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.store.load_settings().map_err(|e| e.to_string())?;
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let patch: SettingsPatch =
                serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            if let Some(Some(picture)) = &patch.profile_picture {
                validate_profile_picture(picture)?;
            }
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let merged = a
                .store
                .save_settings(patch)
                .map_err(|e| e.to_string())?;
            let _ = a.localization_engine.set_locale(&merged.language);
            a.theme_engine.apply_settings(&merged);
            serde_json::to_value(merged).map_err(|e| e.to_string())
        }

        // ─── Dashboard / stats ───
        "stats.dashboard" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let stats = a.dashboard_stats().map_err(|e| e.to_string())?;
            serde_json::to_value(stats).map_err(|e| e.to_string())
        }
        "stats.urgent" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let urgent = a.urgent_renewals().map_err(|e| e.to_string())?;
            serde_json::to_value(urgent).map_err(|e| e.to_string())
        }
        "stats.expenses" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let expenses = a.monthly_expenses().map_err(|e| e.to_string())?;
            serde_json::to_value(expenses).map_err(|e| e.to_string())
        }
        "stats.providers" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let shares = a.provider_shares().map_err(|e| e.to_string())?;
            serde_json::to_value(shares).map_err(|e| e.to_string())
        }

        // ─── Calendar ───
        "calendar.month" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if let (Some(year), Some(month0)) = (
                params.get("year").and_then(|v| v.as_i64()),
                params.get("month").and_then(|v| v.as_u64()),
            ) {
                if month0 > 11 {
                    return Err(format!("invalid month index: {}", month0));
                }
                a.calendar_cursor = (year as i32, month0 as u32);
            }
            let grid = a.calendar_month().map_err(|e| e.to_string())?;
            let mut value = serde_json::to_value(&grid).map_err(|e| e.to_string())?;
            if let Some(map) = value.as_object_mut() {
                map.insert("label".to_string(), json!(grid.label()));
            }
            Ok(value)
        }
        "calendar.next" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.calendar_next();
            let grid = a.calendar_month().map_err(|e| e.to_string())?;
            serde_json::to_value(grid).map_err(|e| e.to_string())
        }
        "calendar.prev" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.calendar_prev();
            let grid = a.calendar_month().map_err(|e| e.to_string())?;
            serde_json::to_value(grid).map_err(|e| e.to_string())
        }

        // ─── Notifications ───
        "notifications.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let notifications = a.notifications().map_err(|e| e.to_string())?;
            serde_json::to_value(notifications).map_err(|e| e.to_string())
        }

        // ─── Export ───
        "export.ics" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let ics = a.export_ics().map_err(|e| e.to_string())?;
            Ok(json!({"filename": ics_exporter::ICS_FILENAME, "content": ics}))
        }
        "export.google" => Ok(json!({"message": ics_exporter::GOOGLE_CALENDAR_MESSAGE})),

        // ─── Lookups ───
        "lookup.dns" => {
            let domain = str_param(params, "domain").ok_or("missing domain")?;
            let records =
                lookup_service::fetch_dns_records(&domain).map_err(|e| e.to_string())?;
            serde_json::to_value(records).map_err(|e| e.to_string())
        }
        "lookup.whois" => {
            let domain = str_param(params, "domain").ok_or("missing domain")?;
            let today = chrono::Local::now().date_naive();
            let info = lookup_service::fetch_whois(&domain, today).map_err(|e| e.to_string())?;
            serde_json::to_value(info).map_err(|e| e.to_string())
        }

        // ─── Auth ───
        "auth.login" => {
            let email = str_param(params, "email").ok_or("missing email")?;
            let password = str_param(params, "password").ok_or("missing password")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store, auth_gate, ..
            } = &mut *a;
            let session = auth_gate
                .sign_in(store.as_mut(), &email, &password)
                .map_err(|e| e.to_string())?;
            let migrated = a.migrate_local_snapshot().unwrap_or(0);
            Ok(json!({"userId": session.user_id, "email": session.email, "migrated": migrated}))
        }
        "auth.signup" => {
            let email = str_param(params, "email").ok_or("missing email")?;
            let password = str_param(params, "password").ok_or("missing password")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store, auth_gate, ..
            } = &mut *a;
            let session = auth_gate
                .sign_up(store.as_mut(), &email, &password)
                .map_err(|e| e.to_string())?;
            let migrated = a.migrate_local_snapshot().unwrap_or(0);
            Ok(json!({"userId": session.user_id, "email": session.email, "migrated": migrated}))
        }
        "auth.logout" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let App {
                store, auth_gate, ..
            } = &mut *a;
            auth_gate.sign_out(store.as_mut());
            Ok(json!({"ok": true}))
        }
        "auth.status" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.auth_gate.current_user() {
                Some(session) => Ok(json!({
                    "signedIn": true,
                    "userId": session.user_id,
                    "email": session.email
                })),
                None => Ok(json!({"signedIn": false})),
            }
        }

        // ─── Localization ───
        "i18n.t" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"text": a.localization_engine.t(&key, None)}))
        }
        "i18n.locale" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"locale": a.localization_engine.get_locale()}))
        }
        "i18n.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.localization_engine
                .toggle_locale()
                .map_err(|e| e.to_string())?;
            Ok(json!({"locale": a.localization_engine.get_locale()}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
