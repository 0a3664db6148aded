use crate::i18n::{get_text, Language};
use crate::models::project::Project;
use crate::render::{html_escape, url_encode};

use super::common::{empty_state, page_hero, project_card, tag_list};

/// What the projects page is showing.
pub struct ProjectsView<'a> {
    pub projects: &'a [&'a Project],
    pub tags: &'a [String],
    /// Active tag filter, `None` for all projects.
    pub selected_tag: Option<&'a str>,
    /// Project whose detail dialog is open.
    pub open: Option<&'a Project>,
}

fn list_href(tag: Option<&str>) -> String {
    match tag {
        Some(t) => format!("/projects?tag={}", url_encode(t)),
        None => "/projects".to_string(),
    }
}

fn details_href(tag: Option<&str>, id: &str) -> String {
    match tag {
        Some(t) => format!("/projects?tag={}&project={}", url_encode(t), url_encode(id)),
        None => format!("/projects?project={}", url_encode(id)),
    }
}

/// Projects page: hero, tag pills, grid or empty state, and the detail dialog.
pub fn render_body(view: &ProjectsView, language: Language) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };
    let selected = view.selected_tag.map(str::to_lowercase);

    let mut pills = format!(
        "<a href=\"/projects\" class=\"pill{}\">{}</a>",
        if selected.is_none() { " active" } else { "" },
        t("projects.all")
    );
    for tag in view.tags {
        let active = selected.as_deref() == Some(tag.as_str());
        pills.push_str(&format!(
            "<a href=\"{}\" class=\"pill{}\">{}</a>",
            html_escape(&list_href(Some(tag))),
            if active { " active" } else { "" },
            html_escape(tag)
        ));
    }

    let grid = if view.projects.is_empty() {
        empty_state(get_text("projects.emptyTitle", language), get_text("projects.emptyText", language))
    } else {
        let mut cards = String::new();
        for project in view.projects {
            let href = details_href(view.selected_tag, project.id);
            cards.push_str(&project_card(project, language, "project-card", Some(&href)));
        }
        format!("<div class=\"grid\">{}</div>", cards)
    };

    let dialog = view
        .open
        .map(|p| render_dialog(p, view.selected_tag, language))
        .unwrap_or_default();

    format!(
        r#"{hero}
<section class="section">
    <div class="container">
        <div class="pills">{pills}</div>
        {grid}
    </div>
</section>
{dialog}"#,
        hero = page_hero(get_text("projects.title", language), get_text("projects.subtitle", language), ""),
        pills = pills,
        grid = grid,
        dialog = dialog,
    )
}

fn render_dialog(project: &Project, tag: Option<&str>, language: Language) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };
    let close_href = html_escape(&list_href(tag));

    let mut sections = format!(
        "<h4>{}</h4><p class=\"muted\">{}</p>",
        t("projects.description"),
        html_escape(project.description)
    );
    if let Some(detail) = project.detail() {
        for (key, text) in [
            ("projects.challenge", detail.challenge),
            ("projects.solution", detail.solution),
            ("projects.impact", detail.impact),
        ] {
            sections.push_str(&format!(
                "<h4>{}</h4><p class=\"muted\">{}</p>",
                t(key),
                html_escape(text)
            ));
        }
    }

    let mut links = String::new();
    if let Some(demo) = project.demo_url {
        links.push_str(&format!(
            "<a href=\"{}\" class=\"btn btn-primary\" target=\"_blank\" rel=\"noopener\">{}</a>",
            html_escape(demo),
            t("projects.liveDemo")
        ));
    }
    if let Some(repo) = project.repo_url {
        links.push_str(&format!(
            "<a href=\"{}\" class=\"btn btn-outline\" target=\"_blank\" rel=\"noopener\">{}</a>",
            html_escape(repo),
            t("projects.sourceCode")
        ));
    }

    format!(
        r#"<a href="{close_href}" class="dialog-backdrop" aria-label="{close}"></a>
<dialog open class="project-dialog" aria-labelledby="project-dialog-title">
    <img src="{image}" alt="{title}">
    <div class="dialog-body">
        <h2 id="project-dialog-title">{title}</h2>
        {tags}
        {sections}
        <div class="btn-row" style="justify-content:flex-start;margin-top:20px">{links}<a href="{close_href}" class="btn btn-outline">{close}</a></div>
    </div>
</dialog>"#,
        close_href = close_href,
        close = t("projects.close"),
        image = html_escape(project.image),
        title = html_escape(project.title),
        tags = tag_list(project.tags),
        sections = sections,
        links = links,
    )
}
