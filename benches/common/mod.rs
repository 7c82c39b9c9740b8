#![allow(dead_code)]
//! Shared bench support: criterion configuration and scenario-matrix registration.

pub mod harness;
