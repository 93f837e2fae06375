mod dashboard;
mod home;
mod login;
mod not_found;
pub mod posts;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use posts::{PostCreate, PostEdit, PostList};
