mod category_filter;
mod confirm_dialog;
mod dimension_inputs;
mod icons;
mod image_preview;
mod lazy_image;
mod loader;
mod modal;
mod navbar;
mod search_box;
mod selectable_list;
mod similar_wallpapers;
mod tag_manager;
mod wallpaper_card;
mod wallpaper_grid;

pub use category_filter::CategoryFilter;
pub use confirm_dialog::ConfirmDialog;
pub use dimension_inputs::DimensionInputs;
pub use icons::*;
pub use image_preview::ImagePreview;
pub use lazy_image::LazyImage;
pub use loader::Loader;
pub use modal::Modal;
pub use navbar::{NavItem, Navbar};
pub use search_box::SearchBox;
pub use selectable_list::SelectableList;
pub use similar_wallpapers::SimilarWallpapers;
pub use tag_manager::TagManager;
pub use wallpaper_card::WallpaperCard;
pub use wallpaper_grid::WallpaperGrid;
