mod admin;
mod auth_callback;
mod categories;
mod favorites;
mod guard;
mod layout;
mod login;
mod not_found;
mod profile;
mod wallpapers;

pub use admin::AdminPanel;
pub use auth_callback::AuthCallback;
pub use categories::Categories;
pub use favorites::Favorites;
pub use guard::RequireAuth;
pub use layout::Shell;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use wallpapers::{Home, Wallpapers};
