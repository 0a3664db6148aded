use crate::i18n::{get_text, Language};
use crate::models::post::BlogPost;
use crate::models::project::Project;
use crate::render::{html_escape, url_encode};

/// Centered section title with a muted subtitle.
pub(crate) fn section_heading(title: &str, subtitle: &str) -> String {
    let subtitle_html = if subtitle.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", html_escape(subtitle))
    };
    format!(
        "<div class=\"section-heading scroll-animate\"><h2>{}</h2>{}</div>",
        html_escape(title),
        subtitle_html
    )
}

/// Decorative blurred circles behind a hero.
pub(crate) fn floating_shapes() -> String {
    let mut html = String::from("<div class=\"floating-shapes\" aria-hidden=\"true\">");
    for i in 1..=4 {
        html.push_str(&format!("<div class=\"shape shape-{} decoration\"></div>", i));
    }
    html.push_str("</div>");
    html
}

/// Page hero: title, subtitle and shapes. `extra` goes under the subtitle.
pub(crate) fn page_hero(title: &str, subtitle: &str, extra: &str) -> String {
    format!(
        r#"<section class="hero hero-section">
    {shapes}
    <div class="container">
        <h1>{title}</h1>
        <p>{subtitle}</p>
        {extra}
    </div>
</section>"#,
        shapes = floating_shapes(),
        title = html_escape(title),
        subtitle = html_escape(subtitle),
        extra = extra,
    )
}

pub(crate) fn tag_list(tags: &[&str]) -> String {
    let mut html = String::from("<div class=\"tags\">");
    for tag in tags {
        html.push_str(&format!("<span class=\"tag\">{}</span>", html_escape(tag)));
    }
    html.push_str("</div>");
    html
}

/// Project card. `details_href` links to the detail dialog when set.
pub(crate) fn project_card(
    project: &Project,
    language: Language,
    card_class: &str,
    details_href: Option<&str>,
) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };

    let mut actions = String::new();
    if let Some(href) = details_href {
        actions.push_str(&format!(
            "<a href=\"{}\" class=\"btn btn-outline\">{}</a>",
            html_escape(href),
            t("projects.viewDetails")
        ));
    }
    if let Some(demo) = project.demo_url {
        actions.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            html_escape(demo),
            t("projects.liveDemo")
        ));
    }
    if let Some(repo) = project.repo_url {
        actions.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            html_escape(repo),
            t("projects.sourceCode")
        ));
    }

    format!(
        r#"<article class="card {card_class}" data-id="{id}">
    <img class="card-img" src="{image}" alt="{title}" loading="lazy">
    <div class="card-body">
        <h3>{title}</h3>
        <p>{description}</p>
        {tags}
        <div class="card-actions">{actions}</div>
    </div>
</article>"#,
        card_class = card_class,
        id = html_escape(project.id),
        image = html_escape(project.image),
        title = html_escape(project.title),
        description = html_escape(project.description),
        tags = tag_list(project.tags),
        actions = actions,
    )
}

/// Blog post card linking to the post detail page.
pub(crate) fn post_card(post: &BlogPost, language: Language, card_class: &str) -> String {
    let href = format!("/blog/{}", url_encode(post.slug));
    format!(
        r#"<article class="card {card_class}" data-id="{id}">
    <a href="{href}"><img class="card-img" src="{image}" alt="{title}" loading="lazy"></a>
    <div class="card-body">
        <div class="card-meta"><span class="tag">{category}</span><time>{date}</time></div>
        <h3><a href="{href}">{title}</a></h3>
        <p>{excerpt}</p>
        <div class="card-actions"><a href="{href}" class="btn btn-outline">{read_more}</a></div>
    </div>
</article>"#,
        card_class = card_class,
        id = html_escape(post.id),
        href = href,
        image = html_escape(post.image),
        title = html_escape(post.title),
        category = html_escape(post.category),
        date = html_escape(post.date),
        excerpt = html_escape(post.excerpt),
        read_more = html_escape(get_text("blog.readMore", language)),
    )
}

pub(crate) fn empty_state(title: &str, text: &str) -> String {
    format!(
        "<div class=\"empty-state\"><h3>{}</h3><p class=\"muted\">{}</p></div>",
        html_escape(title),
        html_escape(text)
    )
}
