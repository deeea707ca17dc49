//! Freight quote routing and pricing server.
//!
//! Takes geocoded shipment requests, discovers candidate
//! trucking → air → trucking routes from schedule data, and prices each
//! candidate against tiered carrier rate tables.

pub mod cache;
pub mod distance;
pub mod domain;
pub mod loader;
pub mod pricing;
pub mod routing;
pub mod store;
pub mod web;
