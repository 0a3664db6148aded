use chrono::Datelike;

use crate::animation::ScriptStage;
use crate::config::SiteConfig;
use crate::i18n::{get_text, Language};
use crate::preferences::{Preference, Theme};
use crate::seo;

/// Everything the layout needs besides the page body.
pub struct PageShell<'a> {
    pub config: &'a SiteConfig,
    pub prefs: Preference,
    /// Request path, used for the active nav link.
    pub path: &'a str,
    /// Path plus query string, where preference forms send the visitor back to.
    pub return_to: &'a str,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "nav.home"),
    ("/about", "nav.about"),
    ("/projects", "nav.projects"),
    ("/blog", "nav.blog"),
    ("/contact", "nav.contact"),
];

/// Wraps a page body in the site layout: header, footer, theme and locale.
/// Timelines still live on `stage` are emitted as the page's animation script.
pub fn render_page(shell: &PageShell, body_html: &str, stage: &ScriptStage) -> String {
    let language = shell.prefs.language;
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };

    let html_class = match shell.prefs.theme {
        Theme::Dark => " class=\"dark\"",
        Theme::Light => "",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}"{html_class}>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {seo_meta}
    <style>
        {base_css}
    </style>
</head>
<body>
    {header}
    <main class="content">
        {body_html}
    </main>
    {footer}
    <script>{shell_js}</script>
    {animation_script}
</body>
</html>"#,
        lang = language.code(),
        html_class = html_class,
        seo_meta = seo::build_meta(shell.config, language, shell.title, shell.description, shell.path),
        base_css = DEFAULT_CSS,
        header = build_header(shell, &t),
        body_html = body_html,
        footer = build_footer(shell, &t),
        shell_js = SHELL_JS,
        animation_script = stage.render_script(),
    )
}

/// Bare error page for failures where the layout itself may be unavailable.
pub fn render_error_page(code: u16, message: &str) -> String {
    format!(
        "<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>{}</h1><p>{}</p><a href='/'>&larr; Home</a></body></html>",
        code,
        html_escape(message)
    )
}

fn is_active(item: &str, path: &str) -> bool {
    if item == "/" {
        path == "/"
    } else {
        path == item || path.starts_with(&format!("{}/", item))
    }
}

fn build_nav_links(shell: &PageShell, t: &dyn Fn(&str) -> String, class: &str) -> String {
    let mut html = String::new();
    for (href, key) in NAV_ITEMS {
        let active = if is_active(href, shell.path) {
            " active\" aria-current=\"page"
        } else {
            ""
        };
        html.push_str(&format!(
            "<a href=\"{}\" class=\"{}{}\">{}</a>\n",
            href,
            class,
            active,
            t(*key)
        ));
    }
    html
}

fn build_header(shell: &PageShell, t: &dyn Fn(&str) -> String) -> String {
    let return_to = html_escape(shell.return_to);
    let theme_icon = match shell.prefs.theme {
        Theme::Dark => "&#9728;",
        Theme::Light => "&#9790;",
    };

    let mut language_forms = String::new();
    for lang in Language::ALL {
        let current = if lang == shell.prefs.language { " current" } else { "" };
        language_forms.push_str(&format!(
            r#"<form method="post" action="/preferences/language"><input type="hidden" name="return_to" value="{return_to}"><input type="hidden" name="language" value="{code}"><button type="submit" class="lang-option{current}">{name}</button></form>"#,
            return_to = return_to,
            code = lang.code(),
            current = current,
            name = lang.native_name(),
        ));
    }

    format!(
        r#"<header class="site-header">
    <div class="container header-inner">
        <a href="/" class="brand">{site_name}</a>
        <nav class="main-nav">
            {nav_links}
        </nav>
        <div class="header-actions">
            <details class="lang-menu">
                <summary aria-label="{language_label}">{current_code}</summary>
                <div class="lang-options">{language_forms}</div>
            </details>
            <form method="post" action="/preferences/theme/toggle" class="theme-form">
                <input type="hidden" name="return_to" value="{return_to}">
                <button type="submit" class="icon-btn" aria-label="{toggle_theme}">{theme_icon}</button>
            </form>
            <button type="button" class="icon-btn mobile-menu-btn" aria-label="{toggle_menu}" aria-expanded="false">&#9776;</button>
        </div>
    </div>
    <nav class="mobile-nav">
        {mobile_links}
    </nav>
</header>"#,
        site_name = html_escape(&shell.config.site_name),
        nav_links = build_nav_links(shell, t, "nav-link"),
        mobile_links = build_nav_links(shell, t, "mobile-link"),
        language_label = t("nav.language"),
        current_code = shell.prefs.language.code().to_uppercase(),
        language_forms = language_forms,
        return_to = return_to,
        toggle_theme = t("nav.toggleTheme"),
        theme_icon = theme_icon,
        toggle_menu = t("nav.toggleMenu"),
    )
}

fn build_footer(shell: &PageShell, t: &dyn Fn(&str) -> String) -> String {
    let contact = &shell.config.contact;
    let mut links = String::new();
    for (href, key) in NAV_ITEMS {
        links.push_str(&format!("<li><a href=\"{}\">{}</a></li>", href, t(*key)));
    }

    format!(
        r##"<footer class="site-footer">
    <div class="container footer-grid">
        <div>
            <a href="/" class="brand">{site_name}</a>
            <p class="muted">{blurb}</p>
            {social}
        </div>
        <div>
            <h3>{links_title}</h3>
            <ul class="footer-links">{links}</ul>
        </div>
        <div>
            <h3>{contact_title}</h3>
            <ul class="footer-links">
                <li>{location}</li>
                <li><a href="mailto:{email}">{email}</a></li>
                <li>{phone}</li>
            </ul>
        </div>
    </div>
    <div class="container footer-bottom">
        <p>&copy; {year} {site_name}. {rights}</p>
        <div class="footer-legal"><a href="#">{privacy}</a><a href="#">{terms}</a></div>
    </div>
</footer>"##,
        site_name = html_escape(&shell.config.site_name),
        blurb = t("footer.blurb"),
        social = build_social_links(shell.config, "social-link"),
        links_title = t("footer.links"),
        links = links,
        contact_title = t("footer.contact"),
        location = html_escape(&contact.location),
        email = html_escape(&contact.email),
        phone = html_escape(&contact.phone),
        year = chrono::Local::now().year(),
        rights = t("footer.rights"),
        privacy = t("footer.privacy"),
        terms = t("footer.terms"),
    )
}

/// Social icon links for every platform with a configured URL.
pub fn build_social_links(config: &SiteConfig, class: &str) -> String {
    // (url, platform_label, icon_svg)
    let platforms: [(&str, &str, &str); 3] = [
        (config.social.github.as_str(), "GitHub",
         r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#),
        (config.social.linkedin.as_str(), "LinkedIn",
         r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#),
        (config.social.twitter.as_str(), "Twitter",
         r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor"><path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"/></svg>"#),
    ];

    let mut html = String::new();
    for (url, label, icon) in platforms.iter().filter(|(url, _, _)| !url.is_empty()) {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"{}\" target=\"_blank\" rel=\"noopener\" aria-label=\"{}\" title=\"{}\">{}</a>\n",
            html_escape(url),
            class,
            label,
            label,
            icon
        ));
    }
    if html.is_empty() {
        return html;
    }
    format!("<div class=\"social-links\">{}</div>", html)
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Percent-encode a query string value.
pub fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

const SHELL_JS: &str = r#"
(function(){
  var header = document.querySelector('.site-header');
  function onScroll(){ if (header) header.classList.toggle('scrolled', window.scrollY > 10); }
  window.addEventListener('scroll', onScroll, { passive: true });
  onScroll();
  var btn = document.querySelector('.mobile-menu-btn');
  if (btn && header) {
    btn.addEventListener('click', function(){
      var open = header.classList.toggle('menu-open');
      btn.setAttribute('aria-expanded', open ? 'true' : 'false');
    });
  }
})();
"#;

const DEFAULT_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-soft: #f5f7fb;
    --fg: #111827;
    --muted: #6b7280;
    --card: #ffffff;
    --border: #e5e7eb;
    --primary: #6366f1;
    --primary-fg: #ffffff;
    --success: #16a34a;
    --danger: #ef4444;
    --shape-blue: #bfdbfe;
    --shape-pink: #fbcfe8;
    --shape-green: #bbf7d0;
    --shape-orange: #fed7aa;
}
html.dark {
    --bg: #0b1020;
    --bg-soft: #111831;
    --fg: #f3f4f6;
    --muted: #9ca3af;
    --card: #151c36;
    --border: #27304f;
    --primary: #818cf8;
    --shape-blue: rgba(59,130,246,.35);
    --shape-pink: rgba(236,72,153,.35);
    --shape-green: rgba(34,197,94,.35);
    --shape-orange: rgba(249,115,22,.35);
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: var(--bg); color: var(--fg); line-height: 1.6; }
a { color: inherit; text-decoration: none; }
img { max-width: 100%; display: block; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }
.muted { color: var(--muted); }
.section { padding: 80px 0; }
.section-alt { background: var(--bg-soft); }

.site-header { position: fixed; top: 0; left: 0; right: 0; z-index: 40; transition: background .3s, box-shadow .3s; }
.site-header.scrolled { background: var(--bg); box-shadow: 0 1px 8px rgba(0,0,0,.08); }
.header-inner { display: flex; align-items: center; justify-content: space-between; height: 68px; }
.brand { font-weight: 800; font-size: 1.3rem; }
.main-nav { display: flex; gap: 24px; }
.nav-link { color: var(--muted); font-weight: 500; }
.nav-link:hover, .nav-link.active { color: var(--primary); }
.header-actions { display: flex; align-items: center; gap: 8px; }
.header-actions form { margin: 0; }
.icon-btn { background: none; border: 1px solid var(--border); color: var(--fg); border-radius: 8px; width: 38px; height: 38px; cursor: pointer; font-size: 1rem; }
.lang-menu { position: relative; }
.lang-menu summary { list-style: none; cursor: pointer; border: 1px solid var(--border); border-radius: 8px; padding: 6px 10px; font-size: .85rem; }
.lang-options { position: absolute; right: 0; top: 44px; background: var(--card); border: 1px solid var(--border); border-radius: 8px; padding: 4px; min-width: 120px; }
.lang-option { display: block; width: 100%; text-align: left; background: none; border: 0; color: var(--fg); padding: 6px 10px; cursor: pointer; border-radius: 6px; }
.lang-option.current { background: var(--bg-soft); font-weight: 600; }
.mobile-menu-btn, .mobile-nav { display: none; }
.site-header.menu-open .mobile-nav { display: flex; flex-direction: column; background: var(--bg); padding: 12px 20px; border-top: 1px solid var(--border); }
.mobile-link { padding: 8px 0; }
.mobile-link.active { color: var(--primary); }

.hero { position: relative; overflow: hidden; padding: 140px 0 80px; text-align: center; }
.hero-home { min-height: 90vh; display: flex; align-items: center; }
.hero h1 { font-size: clamp(2.2rem, 5vw, 3.8rem); margin: 0 0 16px; line-height: 1.15; }
.hero p { font-size: 1.15rem; color: var(--muted); max-width: 680px; margin: 0 auto 28px; }
.hero .container { position: relative; z-index: 1; }
.floating-shapes { position: absolute; inset: 0; pointer-events: none; }
.shape { position: absolute; border-radius: 50%; filter: blur(1px); animation: float 6s ease-in-out infinite; }
.shape-1 { width: 96px; height: 96px; top: 20%; left: 10%; background: var(--shape-blue); }
.shape-2 { width: 80px; height: 80px; top: 60%; right: 15%; background: var(--shape-pink); animation-delay: 2s; }
.shape-3 { width: 64px; height: 64px; bottom: 15%; left: 30%; background: var(--shape-green); animation-delay: 1s; }
.shape-4 { width: 56px; height: 56px; top: 30%; right: 30%; background: var(--shape-orange); animation-delay: 3s; }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-20px); } }

.btn { display: inline-block; padding: 12px 24px; border-radius: 10px; font-weight: 600; border: 1px solid transparent; cursor: pointer; font-size: 1rem; }
.btn-primary { background: var(--primary); color: var(--primary-fg); }
.btn-outline { border-color: var(--border); color: var(--fg); background: transparent; }
.btn-row { display: flex; gap: 12px; justify-content: center; flex-wrap: wrap; }

.section-heading { text-align: center; margin-bottom: 48px; }
.section-heading h2 { font-size: 2rem; margin: 0 0 8px; }
.section-heading p { color: var(--muted); margin: 0; }

.grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 14px; overflow: hidden; display: flex; flex-direction: column; }
.card-img { aspect-ratio: 16 / 9; object-fit: cover; width: 100%; }
.card-body { padding: 20px; display: flex; flex-direction: column; gap: 10px; flex: 1; }
.card-body h3 { margin: 0; font-size: 1.15rem; }
.card-body p { margin: 0; color: var(--muted); }
.card-meta { display: flex; gap: 10px; font-size: .85rem; color: var(--muted); }
.card-actions { margin-top: auto; display: flex; gap: 12px; align-items: center; }
.tags { display: flex; flex-wrap: wrap; gap: 6px; }
.tag { font-size: .75rem; padding: 3px 10px; border-radius: 999px; background: var(--bg-soft); color: var(--muted); }

.pills { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin-bottom: 36px; }
.pill { padding: 6px 16px; border-radius: 999px; border: 1px solid var(--border); font-size: .9rem; }
.pill.active { background: var(--primary); color: var(--primary-fg); border-color: var(--primary); }
.search-form { display: flex; justify-content: center; gap: 8px; margin-bottom: 24px; }
.search-form input { width: min(480px, 100%); }

.empty-state { text-align: center; padding: 60px 0; }
.empty-state h3 { margin: 0 0 8px; }

.skills-grid { display: grid; gap: 16px; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); }
.skill-item, .tool-item { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 20px; text-align: center; }
.skill-icon { font-size: 2rem; }

.cta-banner { text-align: center; background: var(--primary); color: var(--primary-fg); border-radius: 20px; padding: 56px 24px; }
.cta-banner p { opacity: .9; }
.cta-banner .btn { background: var(--primary-fg); color: var(--primary); }

.timeline { position: relative; max-width: 900px; margin: 0 auto; }
.timeline::before { content: ""; position: absolute; left: 50%; top: 0; bottom: 0; width: 2px; background: var(--border); }
.timeline-item { position: relative; width: 50%; padding: 0 32px 40px; }
.timeline-item.left { left: 0; text-align: right; }
.timeline-item.right { left: 50%; }
.timeline-year { color: var(--primary); font-weight: 700; }
.timeline-item h3 { margin: 4px 0; }
.skill-progress { margin-bottom: 20px; }
.skill-progress .label { display: flex; justify-content: space-between; margin-bottom: 6px; }
.progress-track { height: 10px; border-radius: 999px; background: var(--bg-soft); overflow: hidden; }
.progress-bar { height: 100%; background: var(--primary); border-radius: 999px; }
.two-col { display: grid; gap: 40px; grid-template-columns: 1fr 1fr; align-items: start; }

dialog.project-dialog { position: fixed; inset: 0; margin: auto; max-width: 760px; width: calc(100% - 40px); max-height: 90vh; overflow: auto; border: 1px solid var(--border); border-radius: 16px; background: var(--card); color: var(--fg); padding: 0; z-index: 50; }
.dialog-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,.55); z-index: 45; }
.dialog-body { padding: 24px; }
.dialog-body h4 { margin: 18px 0 6px; }

.post-detail { max-width: 820px; margin: 0 auto; }
.post-detail img { border-radius: 16px; margin-bottom: 24px; }
.related-list { list-style: none; padding: 0; }
.related-list li { padding: 8px 0; border-bottom: 1px solid var(--border); }

.contact-grid { display: grid; gap: 40px; grid-template-columns: 1fr 1.3fr; }
.contact-info-item { display: flex; gap: 14px; align-items: flex-start; margin-bottom: 18px; }
.contact-info-item .icon { width: 44px; height: 44px; border-radius: 12px; background: var(--bg-soft); display: flex; align-items: center; justify-content: center; }
.contact-form { background: var(--card); border: 1px solid var(--border); border-radius: 16px; padding: 28px; }
.form-group { margin-bottom: 18px; }
.form-group label { display: block; font-weight: 600; margin-bottom: 6px; }
input[type=text], input[type=email], input[type=search], textarea { width: 100%; padding: 10px 14px; border-radius: 10px; border: 1px solid var(--border); background: var(--bg); color: var(--fg); font: inherit; }
.field-error { color: var(--danger); font-size: .85rem; margin-top: 4px; }
.has-error input, .has-error textarea { border-color: var(--danger); }
.flash { padding: 12px 16px; border-radius: 10px; margin-bottom: 18px; }
.flash-success { background: rgba(34,197,94,.12); color: var(--success); }
.flash-error { background: rgba(239,68,68,.12); color: var(--danger); }
.honey { position: absolute; left: -10000px; width: 1px; height: 1px; overflow: hidden; }
.social-links { display: flex; gap: 10px; margin-top: 12px; }
.social-link, .social-btn { width: 40px; height: 40px; border-radius: 10px; border: 1px solid var(--border); display: inline-flex; align-items: center; justify-content: center; }
.map-placeholder { margin-top: 24px; height: 200px; border-radius: 16px; background: var(--bg-soft); display: flex; align-items: center; justify-content: center; color: var(--muted); }

.error-page { text-align: center; padding: 160px 0 100px; }
.error-page h1 { font-size: 5rem; margin: 0; color: var(--primary); }

.site-footer { border-top: 1px solid var(--border); padding: 56px 0 24px; background: var(--bg-soft); }
.footer-grid { display: grid; gap: 32px; grid-template-columns: 2fr 1fr 1fr; }
.footer-grid h3 { font-size: 1rem; margin-top: 0; }
.footer-links { list-style: none; padding: 0; margin: 0; color: var(--muted); }
.footer-links li { margin-bottom: 8px; }
.footer-bottom { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 12px; margin-top: 40px; padding-top: 20px; border-top: 1px solid var(--border); color: var(--muted); font-size: .9rem; }
.footer-legal { display: flex; gap: 16px; }

@media (max-width: 768px) {
    .main-nav { display: none; }
    .mobile-menu-btn { display: inline-block; }
    .two-col, .contact-grid, .footer-grid { grid-template-columns: 1fr; }
    .timeline::before { left: 8px; }
    .timeline-item, .timeline-item.right { width: 100%; left: 0; text-align: left; padding-left: 32px; }
    .timeline-item.left { text-align: left; }
}
@media (prefers-reduced-motion: reduce) {
    .shape { animation: none; }
}
"#;
