//! Domain Vault — a domain portfolio dashboard with renewal tracking.
//!
//! Entry point: opens the WebView dashboard window. When built without
//! the `gui` feature, runs a console demo walking through every
//! component.

#[cfg(feature = "gui")]
fn main() {
    domainvault::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║             Domain Vault v{} — Demo Mode              ║", env!("CARGO_PKG_VERSION"));
    println!("║        Domain portfolio dashboard & renewal tracker        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_store();
    demo_domains();
    demo_providers();
    demo_stats();
    demo_calendar();
    demo_notifications();
    demo_export();
    demo_lookup();
    demo_localization();
    demo_theme();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("  Domain Vault is ready for WebView UI integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("domainvault-demo-{}", std::process::id()))
}

#[cfg(not(feature = "gui"))]
fn demo_store() {
    use domainvault::store::{LocalStore, StoreBackend};
    section("Local Store");

    let store = LocalStore::open_at(demo_dir()).expect("Failed to open store");
    let domains = store.list_domains().unwrap();
    let providers = store.list_providers().unwrap();
    println!("  Seeded {} sample domains, {} providers", domains.len(), providers.len());
    println!("  Snapshot directory: {}", demo_dir().display());
    println!("  ✓ LocalStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_domains() {
    use domainvault::managers::domain_manager::{DomainManager, DomainManagerTrait};
    use domainvault::store::LocalStore;
    use domainvault::types::domain::DomainDraft;
    section("Domain Manager");

    let mut store = LocalStore::open_at(demo_dir()).unwrap();
    let mut mgr = DomainManager::new();

    let id = mgr
        .add_domain(
            &mut store,
            &DomainDraft {
                name: "rustacean.dev".to_string(),
                provider: "Cloudflare".to_string(),
                renewal_date: "2027-03-15".to_string(),
                price: "12.99".to_string(),
                ..DomainDraft::default()
            },
        )
        .unwrap();
    println!("  Added rustacean.dev ({})", &id[..8]);

    let found = mgr.search_domains(&store, "rustacean").unwrap();
    println!("  Search 'rustacean': {} result(s)", found.len());

    let unconfirmed = mgr.delete_domain(&mut store, &id, false);
    println!("  Delete without confirmation: {}", if unconfirmed.is_err() { "correctly rejected" } else { "ERROR" });

    mgr.delete_domain(&mut store, &id, true).unwrap();
    println!("  Deleted after confirmation");
    println!("  ✓ DomainManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_providers() {
    use domainvault::managers::provider_manager::{ProviderManager, ProviderManagerTrait};
    use domainvault::store::LocalStore;
    section("Provider Manager");

    let store = LocalStore::open_at(demo_dir()).unwrap();
    let mgr = ProviderManager::new();

    let providers = mgr.list_providers(&store).unwrap();
    println!("  Providers: {}", providers.len());
    for p in providers.iter().take(2) {
        let view = mgr.credentials(&store, &p.id).unwrap();
        println!("    {} — username: {}", p.name, view.username);
    }
    println!("  ✓ ProviderManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_stats() {
    use chrono::Local;
    use domainvault::services::stats_engine;
    use domainvault::store::{LocalStore, StoreBackend};
    section("Dashboard Stats");

    let store = LocalStore::open_at(demo_dir()).unwrap();
    let domains = store.list_domains().unwrap();
    let now = Local::now().naive_local();

    let stats = stats_engine::dashboard_stats(&domains, now);
    println!("  Total domains: {}", stats.total_domains);
    println!("  Expiring soon: {}", stats.expiring_soon);
    println!("  Annual cost: ${:.2}", stats.annual_cost);
    println!("  Providers in use: {}", stats.unique_providers);

    let urgent = stats_engine::urgent_renewals(&domains, now);
    println!("  Urgent renewals (top {}):", urgent.len());
    for u in urgent.iter().take(3) {
        println!("    {} — {} day(s) left", u.name, u.days_left);
    }
    println!("  ✓ StatsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_calendar() {
    use chrono::{Datelike, Local};
    use domainvault::services::calendar_engine;
    use domainvault::store::{LocalStore, StoreBackend};
    section("Renewal Calendar");

    let store = LocalStore::open_at(demo_dir()).unwrap();
    let domains = store.list_domains().unwrap();
    let today = Local::now().date_naive();

    let grid = calendar_engine::month_grid(today.year(), today.month0(), &domains);
    let events: usize = grid.days.iter().map(|d| d.events.len()).sum();
    println!("  {} — {} day cell(s), {} leading blank(s), {} event(s)",
        grid.label(), grid.days.len(), grid.leading_blanks, events);

    let (ny, nm) = calendar_engine::next_month(grid.year, grid.month0);
    println!("  Next month cursor: {}-{:02}", ny, nm + 1);
    println!("  ✓ CalendarEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_notifications() {
    use chrono::Local;
    use domainvault::services::notification_engine;
    use domainvault::store::{LocalStore, StoreBackend};
    section("Notifications");

    let store = LocalStore::open_at(demo_dir()).unwrap();
    let domains = store.list_domains().unwrap();
    let notifications = notification_engine::generate(&domains, Local::now().naive_local());
    println!("  Generated {} notification(s)", notifications.len());
    for n in notifications.iter().take(3) {
        println!("    {}: {}", n.title, n.message);
    }
    println!("  ✓ NotificationEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_export() {
    use domainvault::services::ics_exporter;
    use domainvault::store::{LocalStore, StoreBackend};
    section("Calendar Export");

    let store = LocalStore::open_at(demo_dir()).unwrap();
    let domains = store.list_domains().unwrap();
    let ics = ics_exporter::export_ics(&domains).unwrap();
    let events = ics.matches("BEGIN:VEVENT").count();
    println!("  Generated {} ({} bytes, {} event(s))", ics_exporter::ICS_FILENAME, ics.len(), events);
    println!("  Google sync: {}", ics_exporter::GOOGLE_CALENDAR_MESSAGE);
    println!("  ✓ IcsExporter OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_lookup() {
    use chrono::Local;
    use domainvault::services::lookup_service;
    section("DNS / WHOIS Lookup");

    let records = lookup_service::fetch_dns_records("example.com").unwrap();
    println!("  DNS records for example.com:");
    for r in &records {
        println!("    {:<4} {}", r.record_type, r.value);
    }

    let whois = lookup_service::fetch_whois("example.com", Local::now().date_naive()).unwrap();
    println!("  WHOIS: purchased={}, renews={}", whois.purchase_date, whois.renewal_date);
    println!("  ✓ LookupService OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_localization() {
    use domainvault::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
    section("Localization Engine (EN/ES)");

    let mut engine = LocalizationEngine::new("locales");
    engine.initialize().unwrap();

    engine.set_locale("en").unwrap();
    println!("  [EN] {}", engine.t("allDomains", None));
    engine.toggle_locale().unwrap();
    println!("  [ES] {}", engine.t("allDomains", None));
    println!("  Available locales: {:?}", engine.get_available_locales());
    println!("  ✓ LocalizationEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_theme() {
    use domainvault::services::theme_engine::{hex_to_rgb, ThemeEngine};
    section("Theme Engine");

    let mut engine = ThemeEngine::new();
    println!("  Mode: {:?}, accent: {}", engine.mode(), engine.accent_color());

    engine.set_preset("blue").unwrap();
    println!("  Preset 'blue' -> {} (rgb {})", engine.accent_color(), hex_to_rgb(engine.accent_color()));

    engine.toggle_mode();
    println!("  Toggled mode: {:?}", engine.mode());
    println!("  CSS variables: {}", engine.css_variables().len());
    println!("  ✓ ThemeEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use domainvault::app::App;
    use domainvault::store::LocalStore;
    section("App Core (full lifecycle)");

    let store = LocalStore::open_at(demo_dir()).unwrap();
    let mut app = App::new(Box::new(store));
    println!("  Initialized App over the demo store");

    app.startup();
    println!("  Startup sequence: locales → persisted language → theme");

    let stats = app.dashboard_stats().unwrap();
    println!("  Dashboard: {} domain(s), {} expiring", stats.total_domains, stats.expiring_soon);

    app.shutdown();
    let _ = std::fs::remove_dir_all(demo_dir());
    println!("  Shutdown sequence: store subscription stopped");
    println!("  ✓ App Core OK");
}
