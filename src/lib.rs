//! Visceral Fat Calculator (vfcalc) Library
//!
//! Computes Body Mass Index and an estimated visceral fat area from imperial
//! anthropometric measurements, classifies both against fixed thresholds,
//! and optionally persists results to SQLite.

pub mod build_info;
pub mod db;
pub mod engine;
pub mod models;
pub mod report;
