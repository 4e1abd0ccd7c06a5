//! Taro Holistico - Symbolic Tarot Consultation Backend
//!
//! This crate implements the consultation pipeline: intake validation,
//! age policy, deterministic prompt assembly, and the external completion
//! call that produces the generated reading.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
