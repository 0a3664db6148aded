use rocket::http::uri::Origin;
use rocket::response::content::RawHtml;
use rocket::State;

use crate::animation::{AnimationContext, EntranceHook, ScriptStage, Timeline};
use crate::config::SiteConfig;
use crate::designs;
use crate::designs::journal::BlogListView;
use crate::designs::portfolio::ProjectsView;
use crate::filter::{self, ListQuery};
use crate::i18n::get_text;
use crate::models::post::BlogPost;
use crate::models::project::Project;
use crate::preferences::PreferenceStore;

use super::render_view;

const FEATURED_PROJECTS: usize = 3;
const LATEST_POSTS: usize = 3;

// ── Homepage ───────────────────────────────────────────

#[get("/")]
pub fn homepage(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    uri: &Origin<'_>,
) -> RawHtml<String> {
    let prefs = prefs.get();
    let body = designs::home::render_body(
        prefs.language,
        Project::featured(FEATURED_PROJECTS),
        BlogPost::latest(LATEST_POSTS),
    );

    let stage = ScriptStage::new();
    let _animations = AnimationContext::attach(
        &stage,
        vec![
            Timeline::hero(".hero-section"),
            Timeline::scroll_reveal(),
            Timeline::home_sections(),
        ],
    );

    RawHtml(render_view(
        config,
        prefs,
        uri,
        None,
        Some(get_text("home.subtitle", prefs.language)),
        &body,
        &stage,
    ))
}

// ── About ──────────────────────────────────────────────

#[get("/about")]
pub fn about(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    uri: &Origin<'_>,
) -> RawHtml<String> {
    let prefs = prefs.get();
    let body = designs::about::render_body(prefs.language);

    let stage = ScriptStage::new();
    let _animations = AnimationContext::attach(
        &stage,
        vec![
            Timeline::hero(".hero-section"),
            Timeline::scroll_reveal(),
            Timeline::timeline_items(),
            Timeline::skill_bars(),
            Timeline::tools_grid(),
        ],
    );

    RawHtml(render_view(
        config,
        prefs,
        uri,
        Some(get_text("about.title", prefs.language)),
        Some(get_text("about.intro", prefs.language)),
        &body,
        &stage,
    ))
}

// ── Projects ───────────────────────────────────────────

#[get("/?<tag>&<project>")]
pub fn projects(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    uri: &Origin<'_>,
    tag: Option<String>,
    project: Option<String>,
) -> RawHtml<String> {
    let prefs = prefs.get();
    let selected_tag = tag
        .as_deref()
        .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("all"));
    let matches = filter::filter(Project::all(), &ListQuery::new(None, selected_tag));
    let tags = filter::unique_tags(Project::all());

    let view = ProjectsView {
        projects: &matches,
        tags: &tags,
        selected_tag,
        open: project.as_deref().and_then(Project::find_by_id),
    };
    let body = designs::portfolio::render_body(&view, prefs.language);

    let stage = ScriptStage::new();
    let _animations = AnimationContext::attach(&stage, vec![Timeline::hero(".hero-section")]);
    let mut entrance = EntranceHook::new(&stage);
    let ids: Vec<&str> = matches.iter().map(|p| p.id).collect();
    entrance.observe(&ids, Timeline::entrance(".project-card", 50.0));

    RawHtml(render_view(
        config,
        prefs,
        uri,
        Some(get_text("projects.title", prefs.language)),
        Some(get_text("projects.subtitle", prefs.language)),
        &body,
        &stage,
    ))
}

// ── Blog ───────────────────────────────────────────────

#[get("/?<q>&<category>")]
pub fn blog_list(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    uri: &Origin<'_>,
    q: Option<String>,
    category: Option<String>,
) -> RawHtml<String> {
    let prefs = prefs.get();
    let list_query = ListQuery::new(q.as_deref(), category.as_deref());
    let matches = filter::filter(BlogPost::all(), &list_query);
    let categories = filter::unique_categories(BlogPost::all());

    let view = BlogListView {
        posts: &matches,
        categories: &categories,
        query: list_query.query,
        selected_category: list_query.category,
    };
    let body = designs::journal::render_list(&view, prefs.language);

    let stage = ScriptStage::new();
    let _animations = AnimationContext::attach(&stage, vec![Timeline::hero(".hero-section")]);
    let mut entrance = EntranceHook::new(&stage);
    let ids: Vec<&str> = matches.iter().map(|p| p.id).collect();
    entrance.observe(&ids, Timeline::entrance(".blog-post-card", 30.0));

    RawHtml(render_view(
        config,
        prefs,
        uri,
        Some(get_text("blog.title", prefs.language)),
        Some(get_text("blog.subtitle", prefs.language)),
        &body,
        &stage,
    ))
}

#[get("/<slug>")]
pub fn blog_single(
    config: &State<SiteConfig>,
    prefs: &State<PreferenceStore>,
    uri: &Origin<'_>,
    slug: &str,
) -> Option<RawHtml<String>> {
    let post = BlogPost::find_by_slug(slug)?;
    let prefs = prefs.get();
    let related = post.related();
    let body = designs::journal::render_single(post, &related, prefs.language);

    let stage = ScriptStage::new();
    let _animations = AnimationContext::attach(
        &stage,
        vec![Timeline::hero(".hero-section"), Timeline::scroll_reveal()],
    );

    Some(RawHtml(render_view(
        config,
        prefs,
        uri,
        Some(post.title),
        Some(post.excerpt),
        &body,
        &stage,
    )))
}

pub fn root_routes() -> Vec<rocket::Route> {
    routes![homepage, about]
}

pub fn blog_routes() -> Vec<rocket::Route> {
    routes![blog_list, blog_single]
}

pub fn portfolio_routes() -> Vec<rocket::Route> {
    routes![projects]
}
