use crate::config::SiteConfig;
use crate::i18n::{get_text, Language};
use crate::models::contact::{ContactErrors, ContactForm};
use crate::render::{build_social_links, html_escape};

use super::common::page_hero;

/// Notice shown above the form after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Sent,
    RateLimited,
    Failed,
}

/// Build the contact page body HTML.
/// `form` holds the values to put back into the inputs; `errors` the
/// field messages to show under them. Returns `(body_html, contact_css)`.
pub fn render_body(
    config: &SiteConfig,
    language: Language,
    form: &ContactForm,
    errors: &ContactErrors,
    flash: Option<Flash>,
) -> (String, String) {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };
    let contact = &config.contact;

    // Info block
    let info_items: [(&str, &str, String); 3] = [
        ("&#9993;", "contact.email", format!(
            "<a href=\"mailto:{}\">{}</a>",
            html_escape(&contact.email),
            html_escape(&contact.email)
        )),
        ("&#9742;", "contact.phone", html_escape(&contact.phone)),
        ("&#9906;", "contact.location", html_escape(&contact.location)),
    ];
    let mut info_html = String::new();
    for (icon, label, value) in &info_items {
        info_html.push_str(&format!(
            "<div class=\"contact-info-item\"><div class=\"icon\">{}</div><div><h3>{}</h3><p class=\"muted\">{}</p></div></div>",
            icon,
            t(*label),
            value
        ));
    }

    let social = build_social_links(config, "social-btn");
    let social_html = if social.is_empty() {
        String::new()
    } else {
        format!("<h3>{}</h3>{}", t("contact.connect"), social)
    };

    // Form block
    let flash_html = match flash {
        Some(Flash::Sent) => format!(
            "<div class=\"flash flash-success\" role=\"status\"><strong>{}</strong> {}</div>",
            t("contact.success"),
            t("contact.successDetail")
        ),
        Some(Flash::RateLimited) => format!(
            "<div class=\"flash flash-error\" role=\"alert\">{}</div>",
            t("contact.rateLimited")
        ),
        Some(Flash::Failed) => format!(
            "<div class=\"flash flash-error\" role=\"alert\">{}</div>",
            t("contact.error")
        ),
        None => String::new(),
    };

    let field_error = |key: Option<&str>| -> (String, &'static str) {
        match key {
            Some(k) => (format!("<div class=\"field-error\">{}</div>", t(k)), " has-error"),
            None => (String::new(), ""),
        }
    };
    let (name_error, name_class) = field_error(errors.name);
    let (email_error, email_class) = field_error(errors.email);
    let (message_error, message_class) = field_error(errors.message);

    let form_html = format!(
        r#"{flash_html}<form method="post" action="/contact" class="contact-form-fields" novalidate>
<div class="form-group{name_class}"><label for="cf-name">{name_label}</label><input type="text" id="cf-name" name="name" value="{name}" placeholder="{name_placeholder}">{name_error}</div>
<div class="form-group{email_class}"><label for="cf-email">{email_label}</label><input type="email" id="cf-email" name="email" value="{email}" placeholder="{email_placeholder}">{email_error}</div>
<div class="form-group{message_class}"><label for="cf-message">{message_label}</label><textarea id="cf-message" name="message" rows="6" placeholder="{message_placeholder}">{message}</textarea>{message_error}</div>
<div class="honey" aria-hidden="true"><input type="text" name="_honey" tabindex="-1" autocomplete="off"></div>
<button type="submit" class="btn btn-primary">{send}</button>
</form>"#,
        flash_html = flash_html,
        name_class = name_class,
        name_label = t("contact.name"),
        name = html_escape(form.name()),
        name_placeholder = t("contact.namePlaceholder"),
        name_error = name_error,
        email_class = email_class,
        email_label = t("contact.email"),
        email = html_escape(form.email()),
        email_placeholder = t("contact.emailPlaceholder"),
        email_error = email_error,
        message_class = message_class,
        message_label = t("contact.message"),
        message = html_escape(form.message()),
        message_placeholder = t("contact.messagePlaceholder"),
        message_error = message_error,
        send = t("contact.send"),
    );

    let body = format!(
        r#"{hero}
<section class="section">
    <div class="container contact-grid">
        <div>
            <h2>{get_in_touch}</h2>
            <p class="muted">{intro}</p>
            {info_html}
            {social_html}
        </div>
        <div class="contact-form">
            <h2>{send_title}</h2>
            {form_html}
        </div>
    </div>
</section>
<section class="section section-alt">
    <div class="container"><div class="map-placeholder">{map}</div></div>
</section>"#,
        hero = page_hero(get_text("contact.title", language), get_text("contact.subtitle", language), ""),
        get_in_touch = t("contact.getInTouch"),
        intro = t("contact.intro"),
        info_html = info_html,
        social_html = social_html,
        send_title = t("contact.sendTitle"),
        form_html = form_html,
        map = t("contact.mapPlaceholder"),
    );

    (body, css().to_string())
}

pub fn css() -> &'static str {
    r#"<style>
.contact-form h2 { margin-top:0; }
.contact-form-fields textarea { resize:vertical; }
.contact-info-item h3 { margin:0 0 2px; font-size:1rem; }
.contact-info-item p { margin:0; }
</style>"#
}
