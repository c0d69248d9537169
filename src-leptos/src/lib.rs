//! Daloy Dashboard - Leptos Frontend Library

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod session;
