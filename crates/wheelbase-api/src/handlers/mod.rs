//! HTTP handlers

pub mod auth;
pub mod cars;
pub mod health;
pub mod pages;
