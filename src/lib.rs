pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod ui;
pub mod view_models;

pub use app::EduApp;
