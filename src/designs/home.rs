use crate::i18n::{get_text, Language};
use crate::models::post::BlogPost;
use crate::models::profile::SKILLS;
use crate::models::project::Project;
use crate::render::html_escape;

use super::common::{floating_shapes, post_card, project_card, section_heading};

/// Home page: hero, skills grid, featured projects, latest posts, call to action.
pub fn render_body(language: Language, featured: &[Project], latest: &[BlogPost]) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };

    let mut skills = String::new();
    for skill in SKILLS {
        skills.push_str(&format!(
            "<div class=\"skill-item\"><div class=\"skill-icon\">{}</div><h3>{}</h3></div>",
            skill.icon,
            html_escape(skill.name)
        ));
    }

    let mut projects = String::new();
    for project in featured {
        let href = format!("/projects?project={}", project.id);
        projects.push_str(&project_card(project, language, "featured-project", Some(&href)));
    }

    let mut posts = String::new();
    for post in latest {
        posts.push_str(&post_card(post, language, "blog-card"));
    }

    format!(
        r#"<section class="hero hero-home hero-section">
    {shapes}
    <div class="container">
        <h1>{title}</h1>
        <p>{subtitle}</p>
        <div class="btn-row cta-button">
            <a href="/projects" class="btn btn-primary">{cta} &rarr;</a>
            <a href="/contact" class="btn btn-outline">{contact}</a>
        </div>
    </div>
</section>
<section class="section section-alt skills-section">
    <div class="container">
        {skills_heading}
        <div class="skills-grid">{skills}</div>
    </div>
</section>
<section class="section projects-section">
    <div class="container">
        {projects_heading}
        <div class="grid">{projects}</div>
        <div class="btn-row" style="margin-top:40px"><a href="/projects" class="btn btn-outline">{view_all_projects} &rarr;</a></div>
    </div>
</section>
<section class="section section-alt blog-section">
    <div class="container">
        {blog_heading}
        <div class="grid">{posts}</div>
        <div class="btn-row" style="margin-top:40px"><a href="/blog" class="btn btn-outline">{view_all_posts} &rarr;</a></div>
    </div>
</section>
<section class="section">
    <div class="container">
        <div class="cta-banner scroll-animate">
            <h2>{cta_title}</h2>
            <p>{cta_text}</p>
            <a href="/contact" class="btn">{contact}</a>
        </div>
    </div>
</section>"#,
        shapes = floating_shapes(),
        title = t("home.title"),
        subtitle = t("home.subtitle"),
        cta = t("home.cta"),
        contact = t("home.contact"),
        skills_heading = section_heading(get_text("about.skills", language), get_text("home.skillsSubtitle", language)),
        skills = skills,
        projects_heading = section_heading(get_text("projects.title", language), get_text("home.projectsSubtitle", language)),
        projects = projects,
        view_all_projects = t("projects.viewAll"),
        blog_heading = section_heading(get_text("blog.title", language), get_text("blog.subtitle", language)),
        posts = posts,
        view_all_posts = t("blog.viewAll"),
        cta_title = t("home.ctaTitle"),
        cta_text = t("home.ctaText"),
    )
}
