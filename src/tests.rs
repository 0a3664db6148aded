#![cfg(test)]

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use std::cell::RefCell;
use std::sync::Arc;
use std::time::Duration;

use crate::animation::{AnimationContext, EntranceHook, Handle, ScriptStage, Stage, Timeline};
use crate::config::SiteConfig;
use crate::db::{run_migrations, DbPool};
use crate::email::{notification_body, ContactSink, LogSink};
use crate::filter::{self, ListQuery};
use crate::i18n::{get_text, Language};
use crate::models::contact::{is_valid_email, ContactForm, ContactMessage};
use crate::models::post::BlogPost;
use crate::models::project::Project;
use crate::preferences::{
    decode_snapshot, encode_snapshot, Preference, PreferenceStore, Theme, STORAGE_KEY,
};
use crate::rate_limit::{hash_ip, RateLimiter};
use crate::routes::preferences::safe_return_to;
use crate::store::{MemoryStorage, SqliteStorage, Storage};

/// Atomic counter for unique shared-cache DB names so parallel tests don't collide.
static TEST_DB_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Fresh in-memory SQLite pool with migrations applied. Named shared-cache so
/// every pooled connection sees the same data.
fn test_pool() -> DbPool {
    let id = TEST_DB_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let uri = format!("file:testdb_{}?mode=memory&cache=shared", id);
    let manager = SqliteConnectionManager::file(uri);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Failed to create test pool");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

/// Shared-cache pool without the `kv_store` table, so every storage call fails.
fn unmigrated_pool() -> DbPool {
    let id = TEST_DB_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let uri = format!("file:testdb_bare_{}?mode=memory&cache=shared", id);
    Pool::builder()
        .max_size(2)
        .build(SqliteConnectionManager::file(uri))
        .expect("Failed to create test pool")
}

fn memory() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        message: Some(message.to_string()),
        honeypot: None,
    }
}

fn ids<T>(items: &[&T], id: impl Fn(&T) -> &'static str) -> Vec<&'static str> {
    items.iter().map(|item| id(item)).collect()
}

// ═══════════════════════════════════════════════════════════
// Preferences
// ═══════════════════════════════════════════════════════════

#[test]
fn preferences_default_when_storage_empty() {
    let store = PreferenceStore::load(memory());
    assert_eq!(store.get(), Preference { theme: Theme::Light, language: Language::En });
}

#[test]
fn preferences_round_trip_through_storage() {
    let storage = memory();
    let store = PreferenceStore::load(storage.clone());
    store.set_theme(Theme::Dark);
    store.set_language(Language::Tr);

    let reloaded = PreferenceStore::load(storage);
    assert_eq!(reloaded.get().theme, Theme::Dark);
    assert_eq!(reloaded.get().language, Language::Tr);
}

#[test]
fn preferences_toggle_twice_restores_theme() {
    let store = PreferenceStore::load(memory());
    assert_eq!(store.toggle_theme(), Theme::Dark);
    assert_eq!(store.toggle_theme(), Theme::Light);
    assert_eq!(store.get().theme, Theme::Light);
}

#[test]
fn preferences_every_mutation_is_persisted() {
    let storage = memory();
    let store = PreferenceStore::load(storage.clone());
    store.toggle_theme();
    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(decode_snapshot(&raw).unwrap().theme, Theme::Dark);
}

#[test]
fn preferences_version_mismatch_loads_defaults() {
    let storage = memory();
    storage
        .set_item(STORAGE_KEY, r#"{"state":{"theme":"dark","language":"tr"},"version":7}"#)
        .unwrap();
    let store = PreferenceStore::load(storage);
    assert_eq!(store.get(), Preference::default());
}

#[test]
fn preferences_corrupt_snapshot_loads_defaults() {
    let storage = memory();
    storage.set_item(STORAGE_KEY, "{not json").unwrap();
    let store = PreferenceStore::load(storage);
    assert_eq!(store.get(), Preference::default());
}

#[test]
fn preferences_partial_snapshot_fills_defaults() {
    let pref = decode_snapshot(r#"{"state":{"theme":"dark"},"version":0}"#).unwrap();
    assert_eq!(pref.theme, Theme::Dark);
    assert_eq!(pref.language, Language::En);
}

#[test]
fn preferences_snapshot_envelope_shape() {
    let raw = encode_snapshot(&Preference { theme: Theme::Dark, language: Language::En });
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["theme"], "dark");
}

// ═══════════════════════════════════════════════════════════
// Storage
// ═══════════════════════════════════════════════════════════

#[test]
fn sqlite_storage_set_get_overwrite() {
    let storage = SqliteStorage::new(test_pool());
    assert_eq!(storage.get_item("k"), Ok(None));
    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();
    assert_eq!(storage.get_item("k"), Ok(Some("two".to_string())));
}

#[test]
fn sqlite_storage_read_failure_is_an_error() {
    let storage = SqliteStorage::new(unmigrated_pool());
    let err = storage.get_item(STORAGE_KEY).unwrap_err();
    assert!(err.contains("kv_store"), "{}", err);
    assert!(storage.set_item(STORAGE_KEY, "{}").is_err());
}

#[test]
fn preferences_unreadable_storage_loads_defaults() {
    let store = PreferenceStore::load(Arc::new(SqliteStorage::new(unmigrated_pool())));
    assert_eq!(store.get(), Preference { theme: Theme::Light, language: Language::En });
    // writes fail too, but the in-memory preference still moves
    assert_eq!(store.toggle_theme(), Theme::Dark);
}

#[test]
fn sqlite_storage_backs_preferences() {
    let pool = test_pool();
    let store = PreferenceStore::load(Arc::new(SqliteStorage::new(pool.clone())));
    store.set_language(Language::Tr);

    let reloaded = PreferenceStore::load(Arc::new(SqliteStorage::new(pool)));
    assert_eq!(reloaded.get().language, Language::Tr);
}

// ═══════════════════════════════════════════════════════════
// i18n
// ═══════════════════════════════════════════════════════════

#[test]
fn i18n_unknown_key_comes_back_verbatim() {
    assert_eq!(get_text("no.such.key", Language::Tr), "no.such.key");
}

#[test]
fn i18n_known_key_is_translated() {
    assert_eq!(get_text("nav.home", Language::En), "Home");
    assert_ne!(get_text("notFound.title", Language::Tr), "notFound.title");
}

// ═══════════════════════════════════════════════════════════
// Filtering
// ═══════════════════════════════════════════════════════════

#[test]
fn filter_empty_query_returns_full_catalog() {
    let all = filter::filter(BlogPost::all(), &ListQuery::new(Some("   "), Some("")));
    assert_eq!(all.len(), BlogPost::all().len());
}

#[test]
fn filter_query_is_trimmed_before_matching() {
    let padded = filter::filter(BlogPost::all(), &ListQuery::new(Some("  serverless "), None));
    assert_eq!(ids(&padded, |p: &BlogPost| p.id), vec!["5"]);
    assert_eq!(ListQuery::new(Some(" \t "), None).query, None);
}

#[test]
fn filter_query_is_case_insensitive_and_ordered() {
    let hits = filter::filter(BlogPost::all(), &ListQuery::new(Some("ReAcT"), None));
    assert_eq!(ids(&hits, |p: &BlogPost| p.id), vec!["1", "4", "6"]);
}

#[test]
fn filter_post_category_is_exact() {
    let hits = filter::filter(BlogPost::all(), &ListQuery::new(None, Some("Tutorial")));
    assert_eq!(ids(&hits, |p: &BlogPost| p.id), vec!["1"]);
    let none = filter::filter(BlogPost::all(), &ListQuery::new(None, Some("tutorial")));
    assert!(none.is_empty());
}

#[test]
fn filter_query_and_category_combine() {
    let hits = filter::filter(BlogPost::all(), &ListQuery::new(Some("react"), Some("Performance")));
    assert_eq!(ids(&hits, |p: &BlogPost| p.id), vec!["6"]);
}

#[test]
fn filter_project_tag_ignores_case() {
    let hits = filter::filter(Project::all(), &ListQuery::new(None, Some("react")));
    assert_eq!(ids(&hits, |p: &Project| p.id), vec!["1", "5", "6"]);
}

#[test]
fn filter_project_all_tag_matches_everything() {
    let hits = filter::filter(Project::all(), &ListQuery::new(None, Some("All")));
    assert_eq!(hits.len(), Project::all().len());
}

#[test]
fn filter_project_query_searches_tags() {
    let hits = filter::filter(Project::all(), &ListQuery::new(Some("tensorflow"), None));
    assert_eq!(ids(&hits, |p: &Project| p.id), vec!["2"]);
}

#[test]
fn unique_categories_and_tags_are_deduplicated() {
    let categories = filter::unique_categories(BlogPost::all());
    assert_eq!(categories.first(), Some(&"Tutorial"));
    assert_eq!(categories.len(), 6);

    let tags = filter::unique_tags(Project::all());
    assert_eq!(tags.iter().filter(|t| t.as_str() == "react").count(), 1);
    assert!(tags.iter().all(|t| *t == t.to_lowercase()));
}

// ═══════════════════════════════════════════════════════════
// Contact validation
// ═══════════════════════════════════════════════════════════

#[test]
fn contact_valid_submission_is_trimmed() {
    let msg = form("  Ada ", " ada@example.com ", "  Hello there, world  ").validate().unwrap();
    assert_eq!(
        msg,
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there, world".to_string(),
        }
    );
}

#[test]
fn contact_lengths_count_trimmed_chars() {
    let errors = form(" A ", "a@b.co", "   short    ").validate().unwrap_err();
    assert_eq!(errors.name, Some("contact.nameInvalid"));
    assert_eq!(errors.message, Some("contact.messageInvalid"));
    assert_eq!(errors.email, None);
}

#[test]
fn contact_missing_fields_all_reported() {
    let errors = ContactForm::default().validate().unwrap_err();
    assert!(errors.name.is_some() && errors.email.is_some() && errors.message.is_some());
}

#[test]
fn contact_email_shapes() {
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("no-at-sign.example.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email(".lead@example.com"));
    assert!(!is_valid_email("double..dot@example.com"));
    assert!(!is_valid_email("trailing.@example.com"));
}

#[test]
fn contact_honeypot_marks_spam() {
    let mut f = form("Ada", "ada@example.com", "Hello there, world");
    assert!(!f.is_spam());
    f.honeypot = Some(String::new());
    assert!(!f.is_spam());
    f.honeypot = Some("http://spam".to_string());
    assert!(f.is_spam());
}

#[test]
fn contact_log_sink_returns_reference() {
    let msg = form("Ada", "ada@example.com", "Hello there, world").validate().unwrap();
    let reference = LogSink::new("Test").deliver(&msg).unwrap();
    assert_eq!(reference.len(), 36);
    assert!(notification_body(&msg).contains("Email: ada@example.com"));
}

// ═══════════════════════════════════════════════════════════
// Rate limiting
// ═══════════════════════════════════════════════════════════

#[test]
fn rate_limiter_blocks_after_max() {
    let limiter = RateLimiter::new();
    let window = Duration::from_secs(60);
    assert!(limiter.check_and_record("contact:x", 2, window));
    assert!(limiter.check_and_record("contact:x", 2, window));
    assert!(!limiter.check_and_record("contact:x", 2, window));
    assert_eq!(limiter.remaining("contact:x", 2, window), 0);
    assert_eq!(limiter.remaining("contact:y", 2, window), 2);
}

#[test]
fn rate_limiter_cleanup_drops_stale_keys() {
    let limiter = RateLimiter::new();
    limiter.check_and_record("k", 1, Duration::from_secs(60));
    limiter.cleanup(Duration::ZERO);
    assert!(limiter.check_and_record("k", 1, Duration::from_secs(60)));
}

#[test]
fn hash_ip_is_stable_hex() {
    let h = hash_ip("10.0.0.1");
    assert_eq!(h.len(), 64);
    assert_eq!(h, hash_ip("10.0.0.1"));
    assert_ne!(h, hash_ip("10.0.0.2"));
}

// ═══════════════════════════════════════════════════════════
// Animation lifecycle
// ═══════════════════════════════════════════════════════════

/// Records play/revert calls in order.
#[derive(Default)]
struct RecordingStage {
    log: RefCell<Vec<String>>,
}

impl Stage for RecordingStage {
    fn play(&self, timeline: &Timeline) -> Handle {
        let mut log = self.log.borrow_mut();
        let handle = Handle(log.iter().filter(|l| l.starts_with("play")).count());
        log.push(format!("play {}", timeline.name));
        handle
    }

    fn revert(&self, handle: Handle) {
        self.log.borrow_mut().push(format!("revert {:?}", handle));
    }
}

#[test]
fn animation_context_reverts_on_drop() {
    let stage = ScriptStage::new();
    {
        let _ctx = AnimationContext::attach(&stage, vec![Timeline::hero(".hero-section"), Timeline::scroll_reveal()]);
        assert_eq!(stage.live().len(), 2);
    }
    assert!(stage.live().is_empty());
    assert_eq!(stage.render_script(), "");
}

#[test]
fn animation_context_reverts_newest_first() {
    let stage = RecordingStage::default();
    {
        let _ctx = AnimationContext::attach(&stage, vec![Timeline::hero(".a"), Timeline::skill_bars()]);
    }
    let log = stage.log.borrow();
    assert_eq!(log[0], format!("play {}", Timeline::hero(".a").name));
    assert_eq!(log[2], "revert Handle(1)");
    assert_eq!(log[3], "revert Handle(0)");
}

#[test]
fn entrance_hook_skips_unchanged_set() {
    let stage = ScriptStage::new();
    let mut hook = EntranceHook::new(&stage);
    assert!(hook.observe(&["1", "2"], Timeline::entrance(".card", 50.0)));
    assert!(!hook.observe(&["1", "2"], Timeline::entrance(".card", 50.0)));
    assert_eq!(stage.live().len(), 1);
}

#[test]
fn entrance_hook_replays_on_change() {
    let stage = ScriptStage::new();
    let mut hook = EntranceHook::new(&stage);
    hook.observe(&["1", "2"], Timeline::entrance(".card", 50.0));
    assert!(hook.observe(&["2"], Timeline::entrance(".card", 50.0)));
    // the first run was reverted before the second started
    assert_eq!(stage.live().len(), 1);
    drop(hook);
    assert!(stage.live().is_empty());
}

#[test]
fn script_stage_escapes_closing_tags() {
    let stage = ScriptStage::new();
    let _ctx = AnimationContext::attach(&stage, vec![Timeline::entrance("</script>", 10.0)]);
    let script = stage.render_script();
    assert!(script.contains("id=\"folio-timelines\""));
    assert!(!script.contains("\"</script>\""));
    assert!(script.contains("<\\/script>"));
}

// ═══════════════════════════════════════════════════════════
// Config & redirects
// ═══════════════════════════════════════════════════════════

#[test]
fn config_parse_fills_defaults() {
    let config = SiteConfig::parse("site_name = \"Ada\"\n[contact]\nrate_limit = 2\n").unwrap();
    assert_eq!(config.site_name, "Ada");
    assert_eq!(config.contact.rate_limit, 2);
    assert_eq!(config.contact.rate_window_secs, 900);
    assert_eq!(config.database_dir(), Some("website/db"));
}

#[test]
fn config_parse_rejects_bad_toml() {
    assert!(SiteConfig::parse("site_name = ").is_err());
}

#[test]
fn safe_return_to_only_follows_local_paths() {
    assert_eq!(safe_return_to(Some("/blog?q=rust")), "/blog?q=rust");
    assert_eq!(safe_return_to(Some("https://evil.example")), "/");
    assert_eq!(safe_return_to(Some("//evil.example")), "/");
    assert_eq!(safe_return_to(Some("/\\evil.example")), "/");
    assert_eq!(safe_return_to(None), "/");
}

// ═══════════════════════════════════════════════════════════
// HTTP
// ═══════════════════════════════════════════════════════════

struct FailingSink;

impl ContactSink for FailingSink {
    fn deliver(&self, _message: &ContactMessage) -> Result<String, String> {
        Err("smtp down".to_string())
    }
}

fn client_with(config: SiteConfig, sink: Arc<dyn ContactSink>) -> Client {
    Client::tracked(crate::build_rocket(config, memory(), sink)).expect("valid rocket instance")
}

fn client() -> Client {
    client_with(SiteConfig::default(), Arc::new(LogSink::new("Test")))
}

const VALID_CONTACT: &str = "name=Ada&email=ada%40example.com&message=Hello+there%2C+world";

#[test]
fn http_pages_render_in_layout() {
    let client = client();
    for path in ["/", "/about", "/projects", "/blog", "/contact", "/blog/redux-vs-context-api"] {
        let response = client.get(path).dispatch();
        assert_eq!(response.status(), Status::Ok, "{}", path);
        assert_eq!(response.headers().get_one("X-Content-Type-Options"), Some("nosniff"));
        let body = response.into_string().unwrap();
        assert!(body.contains("<html lang=\"en\""), "{}", path);
        assert!(body.contains("folio-timelines"), "{}", path);
    }
}

#[test]
fn http_unknown_page_is_404_in_layout() {
    let client = client();
    let response = client.get("/nowhere").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_string().unwrap();
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("<footer"));
}

#[test]
fn http_unknown_blog_slug_is_404() {
    let client = client();
    let response = client.get("/blog/no-such-post").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn http_theme_toggle_redirects_and_persists() {
    let client = client();
    let response = client
        .post("/preferences/theme/toggle")
        .header(ContentType::Form)
        .body("return_to=%2Fabout")
        .dispatch();
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/about"));

    let snapshot: serde_json::Value = client.get("/api/preferences").dispatch().into_json().unwrap();
    assert_eq!(snapshot["state"]["theme"], "dark");
    assert_eq!(snapshot["version"], 0);

    let body = client.get("/about").dispatch().into_string().unwrap();
    assert!(body.contains("class=\"dark\""));
}

#[test]
fn http_language_switch_rejects_offsite_return() {
    let client = client();
    let response = client
        .post("/preferences/language")
        .header(ContentType::Form)
        .body("language=tr&return_to=%2F%2Fevil.example")
        .dispatch();
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/"));

    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("<html lang=\"tr\""));
}

#[test]
fn http_project_query_opens_dialog() {
    let client = client();
    let body = client.get("/projects?project=2").dispatch().into_string().unwrap();
    assert!(body.contains("<dialog open"));
    assert!(body.contains("AI-Powered Analytics Dashboard"));

    let closed = client.get("/projects").dispatch().into_string().unwrap();
    assert!(!closed.contains("<dialog"));
}

#[test]
fn http_filtered_grid_emits_one_entrance_per_render() {
    let client = client();
    for path in ["/projects?tag=react", "/blog?q=react"] {
        let body = client.get(path).dispatch().into_string().unwrap();
        assert_eq!(body.matches("\"name\":\"entrance\"").count(), 1, "{}", path);
    }
}

#[test]
fn http_blog_search_narrows_list() {
    let client = client();
    let body = client.get("/blog?q=serverless").dispatch().into_string().unwrap();
    assert!(body.contains("Introduction to Serverless Architecture"));
    assert!(!body.contains("Understanding TypeScript Generics"));
}

#[test]
fn http_contact_invalid_is_422_with_values_kept() {
    let client = client();
    let response = client
        .post("/contact")
        .header(ContentType::Form)
        .body("name=A&email=nope&message=short")
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body = response.into_string().unwrap();
    assert!(body.contains("class=\"field-error\""));
    assert!(body.contains("value=\"nope\""));
}

#[test]
fn http_contact_valid_is_accepted() {
    let client = client();
    let response = client
        .post("/contact")
        .header(ContentType::Form)
        .body(VALID_CONTACT)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().unwrap().contains("flash flash-success"));
}

#[test]
fn http_contact_honeypot_looks_accepted() {
    let client = client_with(SiteConfig::default(), Arc::new(FailingSink));
    let response = client
        .post("/contact")
        .header(ContentType::Form)
        .body(format!("{}&_honey=spam", VALID_CONTACT))
        .dispatch();
    // never reaches the failing sink
    assert_eq!(response.status(), Status::Ok);
}

#[test]
fn http_contact_rate_limited_is_429() {
    let mut config = SiteConfig::default();
    config.contact.rate_limit = 1;
    let client = client_with(config, Arc::new(LogSink::new("Test")));
    let send = || {
        client
            .post("/contact")
            .header(ContentType::Form)
            .header(Header::new("X-Real-IP", "203.0.113.9"))
            .body(VALID_CONTACT)
            .dispatch()
            .status()
    };
    assert_eq!(send(), Status::Ok);
    assert_eq!(send(), Status::TooManyRequests);
}

#[test]
fn http_contact_sink_failure_is_500() {
    let client = client_with(SiteConfig::default(), Arc::new(FailingSink));
    let response = client
        .post("/contact")
        .header(ContentType::Form)
        .body(VALID_CONTACT)
        .dispatch();
    assert_eq!(response.status(), Status::InternalServerError);
    assert!(response.into_string().unwrap().contains("flash flash-error"));
}
