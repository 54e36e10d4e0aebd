/// HTTP route modules
pub mod genres;
pub mod health;
