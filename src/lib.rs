//! wasteboard - municipal waste dataset query service and web frontend.
//!
//! Two services over a semicolon-delimited CSV of Italian municipal waste
//! figures: a JSON query service (`server`) that re-reads the dataset on each
//! request, and an HTML frontend (`web`) that forwards form input to it.

pub mod config;
pub mod dataset;
pub mod http_client;
pub mod models;
pub mod server;
pub mod utils;
pub mod web;
