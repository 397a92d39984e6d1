//! Teletext ISP API: tariff plan listings and lead capture for the
//! Телетекст marketing site.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
