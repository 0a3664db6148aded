use crate::i18n::{get_text, Language};
use crate::models::profile::{PROFICIENCIES, TIMELINE, TOOLS};
use crate::render::html_escape;

use super::common::{page_hero, section_heading};

/// About page: intro hero, journey timeline, proficiency bars, bio, tools.
pub fn render_body(language: Language) -> String {
    let t = |key: &str| -> String { html_escape(get_text(key, language)) };

    let intro = format!("<p>{}</p>", t("about.intro"));

    let mut timeline = String::new();
    for (i, entry) in TIMELINE.iter().enumerate() {
        let side = if i % 2 == 0 { "left" } else { "right" };
        timeline.push_str(&format!(
            r#"<div class="timeline-item {side}">
    <div class="card"><div class="card-body">
        <div class="timeline-year">{year}</div>
        <h3>{title}</h3>
        <div class="muted">{company}</div>
        <p>{description}</p>
    </div></div>
</div>"#,
            side = side,
            year = html_escape(entry.year),
            title = html_escape(entry.title.get(language)),
            company = html_escape(entry.company),
            description = html_escape(entry.description.get(language)),
        ));
    }

    let mut bars = String::new();
    for skill in PROFICIENCIES {
        bars.push_str(&format!(
            r#"<div class="skill-progress" data-value="{value}%">
    <div class="label"><span>{name}</span><span class="muted">{value}%</span></div>
    <div class="progress-track"><div class="progress-bar" data-value="{value}%" style="width:{value}%"></div></div>
</div>"#,
            name = html_escape(skill.name),
            value = skill.value,
        ));
    }

    let mut tools = String::new();
    for tool in TOOLS {
        tools.push_str(&format!(
            "<div class=\"tool-item\"><div class=\"skill-icon\">{}</div><h3>{}</h3></div>",
            tool.icon,
            html_escape(tool.name)
        ));
    }

    format!(
        r#"{hero}
<section class="section section-alt">
    <div class="container">
        {journey_heading}
        <div class="timeline">{timeline}</div>
    </div>
</section>
<section class="section">
    <div class="container">
        {skills_heading}
        <div class="two-col">
            <div>{bars}</div>
            <div class="scroll-animate">
                <h3>{who}</h3>
                <p class="muted">{bio1}</p>
                <p class="muted">{bio2}</p>
                <p class="muted">{bio3}</p>
            </div>
        </div>
    </div>
</section>
<section class="section section-alt tools-section">
    <div class="container">
        {tools_heading}
        <div class="skills-grid">{tools}</div>
    </div>
</section>"#,
        hero = page_hero(get_text("about.title", language), get_text("about.subtitle", language), &intro),
        journey_heading = section_heading(get_text("about.journey", language), get_text("about.journeySubtitle", language)),
        timeline = timeline,
        skills_heading = section_heading(get_text("about.skills", language), get_text("about.skillsSubtitle", language)),
        bars = bars,
        who = t("about.whoIAm"),
        bio1 = t("about.bio1"),
        bio2 = t("about.bio2"),
        bio3 = t("about.bio3"),
        tools_heading = section_heading(get_text("about.tools", language), get_text("about.toolsSubtitle", language)),
        tools = tools,
    )
}
