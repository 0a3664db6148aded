pub mod contact;
pub mod preferences;
pub mod public;

use rocket::http::uri::Origin;

use crate::animation::ScriptStage;
use crate::config::SiteConfig;
use crate::preferences::Preference;
use crate::render::{self, PageShell};

/// Wrap a design's body in the layout for the request at `uri`.
pub(crate) fn render_view(
    config: &SiteConfig,
    prefs: Preference,
    uri: &Origin<'_>,
    title: Option<&str>,
    description: Option<&str>,
    body: &str,
    stage: &ScriptStage,
) -> String {
    let return_to = uri.to_string();
    let shell = PageShell {
        config,
        prefs,
        path: uri.path().as_str(),
        return_to: &return_to,
        title,
        description,
    };
    render::render_page(&shell, body, stage)
}
