//! Marketview: browser front-end for a marketplace scraping backend.
//!
//! A client-side-rendered Leptos application. Each page fetches its own
//! data from the backend REST API on mount or parameter change; there is no
//! shared client-side store and nothing is persisted in the browser.

pub mod api;
pub mod app;
pub mod data;
pub mod media;
pub mod pages;
pub mod sections;
