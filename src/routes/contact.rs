use std::sync::Arc;
use std::time::Duration;

use rocket::form::Form;
use rocket::http::uri::Origin;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status;
use rocket::State;

use crate::animation::{AnimationContext, ScriptStage, Timeline};
use crate::config::SiteConfig;
use crate::designs::contact::{self, Flash};
use crate::email::ContactSink;
use crate::i18n::get_text;
use crate::models::contact::{ContactErrors, ContactForm};
use crate::preferences::PreferenceStore;
use crate::rate_limit::{hash_ip, RateLimiter};
use crate::security::auth::ClientIp;

use super::render_view;

fn render_contact(
    config: &SiteConfig,
    prefs: &PreferenceStore,
    uri: &Origin<'_>,
    form: &ContactForm,
    errors: &ContactErrors,
    flash: Option<Flash>,
) -> String {
    let prefs = prefs.get();
    let (body, css) = contact::render_body(config, prefs.language, form, errors, flash);

    let stage = ScriptStage::new();
    let _animations = AnimationContext::attach(
        &stage,
        vec![Timeline::hero(".hero-section"), Timeline::contact_intro()],
    );

    render_view(
        config,
        prefs,
        uri,
        Some(get_text("contact.title", prefs.language)),
        Some(get_text("contact.subtitle", prefs.language)),
        &format!("{}{}", css, body),
        &stage,
    )
}

#[get("/contact")]
pub fn contact_page(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    uri: &Origin<'_>,
) -> RawHtml<String> {
    RawHtml(render_contact(
        config,
        prefs,
        uri,
        &ContactForm::default(),
        &ContactErrors::default(),
        None,
    ))
}

#[post("/contact", data = "<form>")]
pub fn contact_submit(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    limiter: &State<RateLimiter>,
    sink: &State<Arc<dyn ContactSink>>,
    client_ip: ClientIp,
    uri: &Origin<'_>,
    form: Form<ContactForm>,
) -> status::Custom<RawHtml<String>> {
    let respond = |code: Status, form: &ContactForm, errors: &ContactErrors, flash: Option<Flash>| {
        status::Custom(code, RawHtml(render_contact(config, prefs, uri, form, errors, flash)))
    };
    let blank = ContactForm::default();
    let no_errors = ContactErrors::default();

    // Honeypot: bots get the success page and nothing is delivered
    if form.is_spam() {
        log::info!("[contact] Honeypot filled, discarding submission");
        return respond(Status::Ok, &blank, &no_errors, Some(Flash::Sent));
    }

    let message = match form.validate() {
        Ok(m) => m,
        Err(errors) => return respond(Status::UnprocessableEntity, &*form, &errors, None),
    };

    let window = Duration::from_secs(config.contact.rate_window_secs);
    let rate_key = format!("contact:{}", hash_ip(&client_ip.0));
    limiter.cleanup(window);
    if !limiter.check_and_record(&rate_key, config.contact.rate_limit, window) {
        log::warn!("[contact] Rate limit hit for {}", rate_key);
        return respond(Status::TooManyRequests, &*form, &no_errors, Some(Flash::RateLimited));
    }
    log::debug!(
        "[contact] {} submission(s) left in window for {}",
        limiter.remaining(&rate_key, config.contact.rate_limit, window),
        rate_key
    );

    match sink.deliver(&message) {
        Ok(reference) => {
            log::info!("[contact] Accepted submission ref={}", reference);
            respond(Status::Ok, &blank, &no_errors, Some(Flash::Sent))
        }
        Err(e) => {
            log::error!("[contact] Delivery failed: {}", e);
            respond(Status::InternalServerError, &*form, &no_errors, Some(Flash::Failed))
        }
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![contact_page, contact_submit]
}
