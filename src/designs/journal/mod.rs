use crate::i18n::{get_text, Language};
use crate::models::post::BlogPost;
use crate::render::{html_escape, url_encode};

use super::common::{empty_state, page_hero, post_card};

/// What the blog listing is showing.
pub struct BlogListView<'a> {
    pub posts: &'a [&'a BlogPost],
    pub categories: &'a [&'a str],
    pub query: Option<&'a str>,
    pub selected_category: Option<&'a str>,
}

fn list_href(query: Option<&str>, category: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(q) = query {
        params.push(format!("q={}", url_encode(q)));
    }
    if let Some(c) = category {
        params.push(format!("category={}", url_encode(c)));
    }
    if params.is_empty() {
        "/blog".to_string()
    } else {
        format!("/blog?{}", params.join("&"))
    }
}

/// Blog listing: hero, search box, category pills, grid or empty state.
pub fn render_list(view: &BlogListView, language: Language) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };

    let category_input = view
        .selected_category
        .map(|c| format!("<input type=\"hidden\" name=\"category\" value=\"{}\">", html_escape(c)))
        .unwrap_or_default();
    let search = format!(
        r#"<form method="get" action="/blog" class="search-form" role="search">
    <input type="search" name="q" value="{value}" placeholder="{placeholder}" aria-label="{placeholder}">
    {category_input}
</form>"#,
        value = html_escape(view.query.unwrap_or("")),
        placeholder = t("blog.search"),
        category_input = category_input,
    );

    let mut pills = format!(
        "<a href=\"{}\" class=\"pill{}\">{}</a>",
        html_escape(&list_href(view.query, None)),
        if view.selected_category.is_none() { " active" } else { "" },
        t("blog.all")
    );
    for category in view.categories {
        pills.push_str(&format!(
            "<a href=\"{}\" class=\"pill{}\">{}</a>",
            html_escape(&list_href(view.query, Some(*category))),
            if view.selected_category == Some(*category) { " active" } else { "" },
            html_escape(category)
        ));
    }

    let grid = if view.posts.is_empty() {
        empty_state(get_text("blog.emptyTitle", language), get_text("blog.emptyText", language))
    } else {
        let mut cards = String::new();
        for post in view.posts {
            cards.push_str(&post_card(post, language, "blog-post-card"));
        }
        format!("<div class=\"grid\">{}</div>", cards)
    };

    format!(
        r#"{hero}
<section class="section">
    <div class="container">
        {search}
        <div class="pills">{pills}</div>
        {grid}
    </div>
</section>"#,
        hero = page_hero(get_text("blog.title", language), get_text("blog.subtitle", language), ""),
        search = search,
        pills = pills,
        grid = grid,
    )
}

/// Single post: image, category, date, title, excerpt, more from the category.
pub fn render_single(post: &BlogPost, related: &[&BlogPost], language: Language) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };

    let related_html = if related.is_empty() {
        String::new()
    } else {
        let mut items = String::new();
        for other in related {
            items.push_str(&format!(
                "<li><a href=\"/blog/{}\">{}</a> <span class=\"muted\">{}</span></li>",
                url_encode(other.slug),
                html_escape(other.title),
                html_escape(other.date)
            ));
        }
        format!(
            "<aside class=\"scroll-animate\"><h3>{} {}</h3><ul class=\"related-list\">{}</ul></aside>",
            t("blog.moreIn"),
            html_escape(post.category),
            items
        )
    };

    format!(
        r#"<section class="section hero-section" style="padding-top:120px">
    <div class="container post-detail">
        <a href="/blog" class="muted">&larr; {back}</a>
        <img src="{image}" alt="{title}" style="margin-top:20px">
        <div class="card-meta"><a class="tag" href="/blog?category={category_q}">{category}</a><time>{date}</time></div>
        <h1>{title}</h1>
        <p>{excerpt}</p>
        {related}
    </div>
</section>"#,
        back = t("blog.back"),
        image = html_escape(post.image),
        title = html_escape(post.title),
        category_q = url_encode(post.category),
        category = html_escape(post.category),
        date = html_escape(post.date),
        excerpt = html_escape(post.excerpt),
        related = related_html,
    )
}
