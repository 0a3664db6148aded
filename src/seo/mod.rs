pub mod meta;

pub use meta::build_meta;

use crate::render::html_escape;
