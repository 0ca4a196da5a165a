// Public library interface for integration tests and embedding.
pub mod app;
pub mod breadcrumb;
pub mod commands;
pub mod config;
pub mod enums;
pub mod executor;
pub mod input;
pub mod model;
pub mod runtime;
pub mod selection;
pub mod sort;
pub mod source;
pub mod trace;
pub mod ui;
pub mod view;

pub use app::App;
