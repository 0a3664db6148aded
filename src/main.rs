#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::response::content::RawHtml;
use rocket::{Build, Request, Rocket};

mod animation;
mod boot;
mod config;
mod db;
mod designs;
mod email;
mod filter;
mod i18n;
mod models;
mod preferences;
mod rate_limit;
mod render;
mod routes;
mod security;
mod seo;
mod store;

#[cfg(test)]
mod tests;

use animation::ScriptStage;
use config::SiteConfig;
use email::{ContactSink, LogSink};
use preferences::PreferenceStore;
use rate_limit::RateLimiter;
use store::{SqliteStorage, Storage};

#[catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    let rocket = req.rocket();
    let (config, prefs) = match (rocket.state::<SiteConfig>(), rocket.state::<PreferenceStore>()) {
        (Some(c), Some(p)) => (c, p.get()),
        _ => return RawHtml(render::render_error_page(404, "Page not found.")),
    };
    let body = designs::not_found::render_body(prefs.language);
    let title = i18n::get_text("notFound.title", prefs.language);
    RawHtml(routes::render_view(
        config,
        prefs,
        req.uri(),
        Some(title),
        None,
        &body,
        &ScriptStage::new(),
    ))
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml(render::render_error_page(500, "Internal server error."))
}

/// Assemble the server around a storage backend and a contact sink.
pub fn build_rocket(
    config: SiteConfig,
    storage: Arc<dyn Storage>,
    sink: Arc<dyn ContactSink>,
) -> Rocket<Build> {
    let prefs = PreferenceStore::load(storage);

    rocket::build()
        .manage(config)
        .manage(prefs)
        .manage(RateLimiter::new())
        .manage(sink)
        .attach(security::SecurityHeaders)
        .mount("/", routes::public::root_routes())
        .mount("/", routes::contact::routes())
        .mount("/projects", routes::public::portfolio_routes())
        .mount("/blog", routes::public::blog_routes())
        .mount("/preferences", routes::preferences::routes())
        .mount("/api", routes::preferences::api_routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load().expect("Failed to read site config");

    // Boot check: verify/create the database directory
    boot::run(&config);

    let pool = db::init_pool(&config.database.path).expect("Failed to initialize database pool");
    db::run_migrations(&pool).expect("Failed to run database migrations");

    log::info!("Serving {} (database: {})", config.site_name, config.database.path);

    let sink: Arc<dyn ContactSink> = Arc::new(LogSink::new(&config.site_name));
    build_rocket(config, Arc::new(SqliteStorage::new(pool)), sink)
}
