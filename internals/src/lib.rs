// SPDX-License-Identifier: CC0-1.0

//! # Numutil Internal
//!
//! This crate is only meant to be used internally by crates in the numutil
//! workspace.
//!

#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod macros;
