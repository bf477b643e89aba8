//! Mountain info server.
//!
//! A web service that answers: "what are conditions like on this trail
//! right now?" by resolving a trail to coordinates and asking weather,
//! air quality and sun time providers in parallel.

pub mod aggregate;
pub mod app;
pub mod config;
pub mod domain;
pub mod providers;
pub mod resolver;
pub mod web;

#[cfg(test)]
mod testing;
