//! HTTP handlers for all web routes.

pub mod api;
pub mod pages;
pub mod upload;
