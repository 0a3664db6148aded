use rocket::form::{Form, FromForm};
use rocket::http::uri::Origin;
use rocket::response::Redirect;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::Value;

use crate::i18n::Language;
use crate::preferences::{self, PreferenceStore, Theme};

#[derive(Debug, FromForm)]
pub struct ReturnForm {
    pub return_to: Option<String>,
}

#[derive(Debug, FromForm)]
pub struct ThemeForm {
    pub theme: Theme,
    pub return_to: Option<String>,
}

#[derive(Debug, FromForm)]
pub struct LanguageForm {
    pub language: Language,
    pub return_to: Option<String>,
}

/// Only same-site paths are followed; anything else lands on the home page.
pub fn safe_return_to(return_to: Option<&str>) -> String {
    match return_to {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && Origin::parse(path).is_ok() =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

// ── Theme ──────────────────────────────────────────────

#[post("/theme/toggle", data = "<form>")]
pub fn toggle_theme(prefs: &State<PreferenceStore>, form: Form<ReturnForm>) -> Redirect {
    let theme = prefs.toggle_theme();
    log::debug!("Theme toggled to {}", theme);
    Redirect::to(safe_return_to(form.return_to.as_deref()))
}

#[post("/theme", data = "<form>")]
pub fn set_theme(prefs: &State<PreferenceStore>, form: Form<ThemeForm>) -> Redirect {
    prefs.set_theme(form.theme);
    Redirect::to(safe_return_to(form.return_to.as_deref()))
}

// ── Language ───────────────────────────────────────────

#[post("/language", data = "<form>")]
pub fn set_language(prefs: &State<PreferenceStore>, form: Form<LanguageForm>) -> Redirect {
    prefs.set_language(form.language);
    Redirect::to(safe_return_to(form.return_to.as_deref()))
}

// ── Snapshot ───────────────────────────────────────────

#[get("/preferences")]
pub fn snapshot(prefs: &State<PreferenceStore>) -> Json<Value> {
    Json(preferences::snapshot_value(&prefs.get()))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![toggle_theme, set_theme, set_language]
}

pub fn api_routes() -> Vec<rocket::Route> {
    routes![snapshot]
}
