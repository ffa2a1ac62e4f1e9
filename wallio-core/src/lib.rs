//! wallio-core - domain types and client-side state machines for wallio
//!
//! Everything here is framework-free: the paged gallery list, the preview
//! navigation controller, and the generation poll loop are plain state
//! machines driven by the web crate, which keeps them unit-testable without
//! a browser.

pub mod filter;
pub mod gallery;
pub mod generate;
pub mod models;
pub mod preview;
pub mod roles;
pub mod session;
pub mod theme;

pub use filter::GalleryFilter;
pub use gallery::{FetchTicket, GalleryList, SimilarList, GALLERY_PAGE_SIZE, SIMILAR_PAGE_SIZE};
pub use generate::{Generation, GenerationPhase, PollOutcome, SubmitOutcome, POLL_INTERVAL};
pub use models::*;
pub use preview::Preview;
pub use theme::ThemeMode;
