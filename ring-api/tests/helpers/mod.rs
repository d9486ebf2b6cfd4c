//! Shared test helpers for ring-api integration tests

#![allow(dead_code)]

pub mod audio_generator;
