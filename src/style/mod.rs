//! Style fragments.
//!
//! This module provides the default fragment type carried by recipes:
//!
//! - [`StyleFragment`]: An ordered bag of CSS-like properties
//! - [`PropertyValue`]: A text value, a number, or a nested fragment
//!
//! The compile/resolve core never looks inside a fragment; it only forwards
//! fragments to a [`StyleRegistry`](crate::StyleRegistry). Registries that
//! want to emit CSS walk fragments with [`StyleFragment::declarations`].

mod fragment;

pub use fragment::{Declaration, PropertyValue, StyleFragment};
