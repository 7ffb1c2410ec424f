//! WebView-based desktop shell using `wry` + `tao`.
//!
//! The whole dashboard is one internal page served over the `dv://`
//! custom protocol. IPC from JS arrives as JSON commands; each handler
//! mutates the application core and pushes re-rendered fragments back
//! with `evaluate_script`.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::domain_manager::DomainManagerTrait;
use crate::managers::provider_manager::ProviderManagerTrait;
use crate::services::localization_engine::LocalizationEngineTrait;
use crate::services::{ics_exporter, lookup_service};
use crate::types::domain::DomainDraft;
use crate::types::provider::ProviderDraft;
use crate::ui::render;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

/// Builds the dashboard page: styles from the theme engine, empty
/// containers the refresh script fills in, and the IPC bridge.
fn dashboard_html(app: &App) -> String {
    let css_vars = render::css_root_block(&app.theme_engine.css_variables());
    let mut html = String::with_capacity(8000);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(&css_vars);
    html.push_str(concat!(
        "*{margin:0;padding:0;box-sizing:border-box}",
        "body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Helvetica,Arial,sans-serif;",
        "background:var(--bg-primary);color:var(--text-primary);padding:24px}",
        "h1{color:var(--primary)}h2{margin:20px 0 8px}",
        "table{width:100%;border-collapse:collapse}",
        "td,th{padding:6px 10px;border-bottom:1px solid var(--border-color);text-align:left}",
        ".badge{padding:2px 8px;border-radius:10px;font-size:12px}",
        ".badge.active{background:rgba(var(--primary-rgb),0.2);color:var(--primary)}",
        ".badge.warning{background:rgba(245,158,11,0.2);color:var(--warning)}",
        ".badge.expired{background:rgba(239,68,68,0.2);color:var(--danger)}",
        ".stats{display:flex;gap:16px}",
        ".stat-card{flex:1;background:var(--bg-secondary);border:1px solid var(--border-color);",
        "border-radius:8px;padding:16px;display:flex;flex-direction:column}",
        ".stat-value{font-size:24px;font-weight:700;color:var(--primary)}",
        ".calendar{display:grid;grid-template-columns:repeat(7,1fr);gap:4px}",
        ".calendar-day{min-height:64px;background:var(--bg-secondary);border-radius:4px;padding:4px}",
        ".calendar-day.empty{background:transparent}",
        ".calendar-event{display:block;font-size:11px;color:var(--primary)}",
        ".text-muted{color:var(--text-muted)}.text-center{text-align:center}",
        ".provider-card{background:var(--bg-secondary);border:1px solid var(--border-color);",
        "border-radius:8px;padding:12px;margin:6px 0}",
    ));
    html.push_str("</style></head><body>");
    html.push_str(concat!(
        "<h1>DOMAIN VAULT</h1>",
        "<div class=\"stats\" id=\"stats\"></div>",
        "<h2 data-i18n=\"urgentRenewals\">Top 5 Urgent Renewals</h2>",
        "<table><tbody id=\"urgent\"></tbody></table>",
        "<h2 data-i18n=\"allDomains\">All Domains</h2>",
        "<input id=\"search\" placeholder=\"Search domains...\"/>",
        "<table><tbody id=\"domains\"></tbody></table>",
        "<h2 data-i18n=\"domainProviders\">Domain Providers</h2>",
        "<div id=\"providers\"></div>",
        "<h2 data-i18n=\"calendar\">Calendar</h2>",
        "<div><button id=\"prev-month\">&lt;</button>",
        "<span id=\"month-label\"></span>",
        "<button id=\"next-month\">&gt;</button></div>",
        "<div class=\"calendar\" id=\"calendar\"></div>",
        "<h2 data-i18n=\"notifications\">Notifications</h2>",
        "<div id=\"notifications\"></div>",
    ));
    html.push_str("<script>");
    html.push_str(concat!(
        "function send(cmd,data){window.ipc.postMessage(JSON.stringify(Object.assign({cmd:cmd},data||{})))}",
        "document.getElementById('prev-month').addEventListener('click',function(){send('calendar_prev')});",
        "document.getElementById('next-month').addEventListener('click',function(){send('calendar_next')});",
        "document.getElementById('search').addEventListener('input',function(e){send('search',{query:e.target.value})});",
        "document.addEventListener('click',function(e){",
        "var del=e.target.closest('.btn-delete');",
        "if(del&&confirm('Delete this domain?'))send('delete_domain',{id:del.dataset.id,confirmed:true});",
        "});",
        "send('ui_ready');",
    ));
    html.push_str("</script></body></html>");
    html
}

/// Re-renders every dynamic fragment from current state.
fn build_refresh_script(app: &App) -> String {
    let now = app.now();
    let domains = app.domains().unwrap_or_default();
    let stats = render::render_stats(&app.dashboard_stats().unwrap_or_else(|_| {
        crate::services::stats_engine::dashboard_stats(&[], now)
    }));
    let urgent = render::render_urgent_table(&app.urgent_renewals().unwrap_or_default());
    let table = render::render_domains_table(&domains, now);
    let providers = render::render_provider_cards(&app.provider_shares().unwrap_or_default());
    let notifications = render::render_notifications(&app.notifications().unwrap_or_default());
    let (calendar, label) = match app.calendar_month() {
        Ok(grid) => (render::render_calendar(&grid), grid.label()),
        Err(_) => (String::new(), String::new()),
    };

    let payload = serde_json::json!({
        "stats": stats,
        "urgent": urgent,
        "domains": table,
        "providers": providers,
        "notifications": notifications,
        "calendar": calendar,
        "monthLabel": label,
    });
    format!(
        concat!(
            "(function(d){{",
            "var set=function(id,html){{var e=document.getElementById(id);if(e)e.innerHTML=html}};",
            "set('stats',d.stats);set('urgent',d.urgent);set('domains',d.domains);",
            "set('providers',d.providers);set('notifications',d.notifications);",
            "set('calendar',d.calendar);",
            "var l=document.getElementById('month-label');if(l)l.textContent=d.monthLabel;",
            "}})({})"
        ),
        payload
    )
}

fn toast_script(message: &str) -> String {
    format!("if(window.__dv_toast)__dv_toast({})", serde_json::json!(message))
}

fn handle_ipc(app: &mut App, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;
    let text = |key: &str| {
        msg.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    };

    match cmd {
        "ui_ready" => Some(UserEvent::EvalScript(build_refresh_script(app))),

        "add_domain" => {
            let draft = DomainDraft {
                name: text("name"),
                provider: text("provider"),
                renewal_date: text("renewalDate"),
                price: text("price"),
                purchase_date: text("purchaseDate"),
                purchase_price: text("purchasePrice"),
                auto_renew: msg.get("autoRenew").and_then(|v| v.as_bool()).unwrap_or(false),
            };
            let App {
                store,
                domain_manager,
                domain_form,
                ..
            } = app;
            match domain_manager.add_domain(store.as_mut(), &draft) {
                Ok(_) => {
                    domain_form.submitted();
                    Some(UserEvent::EvalScript(build_refresh_script(app)))
                }
                // A failed submit keeps the form open; only the toast goes out.
                Err(e) => Some(UserEvent::EvalScript(toast_script(&e.to_string()))),
            }
        }

        "delete_domain" => {
            let id = text("id");
            let confirmed = msg.get("confirmed").and_then(|v| v.as_bool()).unwrap_or(false);
            let App {
                store,
                domain_manager,
                ..
            } = app;
            match domain_manager.delete_domain(store.as_mut(), &id, confirmed) {
                Ok(()) => Some(UserEvent::EvalScript(build_refresh_script(app))),
                Err(e) => Some(UserEvent::EvalScript(toast_script(&e.to_string()))),
            }
        }

        "add_provider" => {
            let draft = ProviderDraft {
                name: text("name"),
                url: text("url"),
                username: text("username"),
                password: text("password"),
                user_id: text("userId"),
            };
            let App {
                store,
                provider_manager,
                provider_form,
                ..
            } = app;
            match provider_manager.add_provider(store.as_mut(), &draft) {
                Ok(_) => {
                    provider_form.submitted();
                    Some(UserEvent::EvalScript(build_refresh_script(app)))
                }
                Err(e) => Some(UserEvent::EvalScript(toast_script(&e.to_string()))),
            }
        }

        "delete_provider" => {
            let id = text("id");
            let confirmed = msg.get("confirmed").and_then(|v| v.as_bool()).unwrap_or(false);
            let App {
                store,
                provider_manager,
                ..
            } = app;
            match provider_manager.delete_provider(store.as_mut(), &id, confirmed) {
                Ok(()) => Some(UserEvent::EvalScript(build_refresh_script(app))),
                Err(e) => Some(UserEvent::EvalScript(toast_script(&e.to_string()))),
            }
        }

        "search" => {
            let query = text("query");
            let rows = app
                .domain_manager
                .search_domains(app.store.as_ref(), &query)
                .map(|domains| render::render_domains_table(&domains, app.now()))
                .unwrap_or_default();
            let payload = serde_json::json!(rows);
            Some(UserEvent::EvalScript(format!(
                "document.getElementById('domains').innerHTML={}",
                payload
            )))
        }

        "calendar_next" => {
            app.calendar_next();
            Some(UserEvent::EvalScript(build_refresh_script(app)))
        }
        "calendar_prev" => {
            app.calendar_prev();
            Some(UserEvent::EvalScript(build_refresh_script(app)))
        }

        "toggle_language" => {
            let _ = app.localization_engine.toggle_locale();
            Some(UserEvent::EvalScript(build_refresh_script(app)))
        }

        "toggle_theme" => {
            app.theme_engine.toggle_mode();
            let css = render::css_root_block(&app.theme_engine.css_variables());
            Some(UserEvent::EvalScript(format!(
                "document.querySelector('style').textContent={}",
                serde_json::json!(css)
            )))
        }

        "export_ics" => match app.export_ics() {
            Ok(_) => Some(UserEvent::EvalScript(toast_script("Calendar exported"))),
            Err(e) => Some(UserEvent::EvalScript(toast_script(&e.to_string()))),
        },

        "sync_google" => Some(UserEvent::EvalScript(toast_script(
            ics_exporter::GOOGLE_CALENDAR_MESSAGE,
        ))),

        "lookup_dns" => {
            let domain = text("domain");
            match lookup_service::fetch_dns_records(&domain) {
                Ok(records) => {
                    let rows = render::render_dns_table(&records);
                    Some(UserEvent::EvalScript(format!(
                        "var t=document.getElementById('dns-results');if(t)t.innerHTML={}",
                        serde_json::json!(rows)
                    )))
                }
                Err(e) => Some(UserEvent::EvalScript(toast_script(&e.to_string()))),
            }
        }

        _ => None,
    }
}

// ─── Main entry point ───

pub fn run() {
    let mut app = App::with_local_store().expect("Failed to initialize Domain Vault");
    app.startup();
    let page = dashboard_html(&app);
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Domain Vault")
        .with_inner_size(tao::dpi::LogicalSize::new(1200.0, 840.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("dv".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page.clone().into_bytes().into())
                .unwrap()
        })
        .with_url("dv://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut s = state.lock().unwrap();
                s.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
