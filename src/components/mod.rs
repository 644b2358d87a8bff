pub mod articles;
pub mod auth_layout;
pub mod home;
pub mod login;

pub use articles::ArticlesPage;
pub use auth_layout::AuthLayout;
pub use home::{HomePage, NotFound};
pub use login::LoginPage;
