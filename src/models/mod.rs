pub mod contact;
pub mod post;
pub mod profile;
pub mod project;
