pub mod config;
pub mod i18n;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod storage;
pub mod web;
