use crate::config::SiteConfig;
use crate::i18n::Language;

use super::html_escape;

const TITLE_TEMPLATE: &str = "{{title}} | {{site_name}}";

/// Build meta tags HTML string for a page
pub fn build_meta(
    config: &SiteConfig,
    language: Language,
    title: Option<&str>,
    description: Option<&str>,
    path: &str,
) -> String {
    let site_name = config.site_name.as_str();

    let page_title = match title {
        Some(t) => TITLE_TEMPLATE
            .replace("{{title}}", t)
            .replace("{{site_name}}", site_name),
        None => site_name.to_string(),
    };
    let page_desc = description.unwrap_or("");
    let locale = match language {
        Language::En => "en_US",
        Language::Tr => "tr_TR",
    };

    format!(
        r#"<title>{title}</title>
<meta name="description" content="{desc}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{desc}">
<meta property="og:url" content="{path}">
<meta property="og:site_name" content="{site_name}">
<meta property="og:locale" content="{locale}">
<meta property="og:type" content="website">
<meta name="twitter:card" content="summary_large_image">"#,
        title = html_escape(&page_title),
        desc = html_escape(page_desc),
        path = html_escape(path),
        site_name = html_escape(site_name),
        locale = locale,
    )
}
