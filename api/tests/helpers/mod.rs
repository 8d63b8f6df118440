pub mod app;

pub use app::{TestUser, create_user, make_test_app, send};
