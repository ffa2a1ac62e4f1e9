//! Typed REST client, one submodule per backend resource.

pub mod auth;
pub mod categories;
pub mod http;
pub mod images;
pub mod wallpapers;

pub use http::ApiError;
