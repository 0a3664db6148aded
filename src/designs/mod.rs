pub mod about;
pub(crate) mod common;
pub mod contact;
pub mod home;
pub mod journal;
pub mod not_found;
pub mod portfolio;
