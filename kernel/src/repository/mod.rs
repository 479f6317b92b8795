pub mod event;
pub mod health;
pub mod session;
pub mod user;
