//! Almacén API library.
//!
//! This crate provides the grocery storefront backend as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod meli;
pub mod mercado_pago;
pub mod models;
pub mod routes;
pub mod state;
