pub mod extractor;
pub mod handler;
pub mod model;
pub mod page;
pub mod route;
