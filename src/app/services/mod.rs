//! Services layer - operations around the store.
//!
//! This module contains:
//! - Snapshot persistence hooks
//! - The page-builder widget binding

pub mod editor_host;
pub mod persistence;
