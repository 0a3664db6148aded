use crate::i18n::{get_text, Language};
use crate::render::html_escape;

pub fn render_body(language: Language) -> String {
    format!(
        r#"<div class="error-page container">
    <h1>404</h1>
    <h2>{title}</h2>
    <p class="muted">{text}</p>
    <a href="/" class="btn btn-primary">&larr; {back}</a>
</div>"#,
        title = html_escape(get_text("notFound.title", language)),
        text = html_escape(get_text("notFound.text", language)),
        back = html_escape(get_text("notFound.back", language)),
    )
}
