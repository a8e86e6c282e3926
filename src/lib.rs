//! # Defer
//!
//! This crate provides a scope-exit guard for deferring cleanup code until
//! the end of the enclosing scope.
//!
//! ## Features
//!
//! - **Scope-exit execution**: The [`ScopeGuard`] type runs a deferred
//!   closure exactly once when it goes out of scope, on every exit path —
//!   normal fall-through, early return, or panic unwinding.
//! - **Inline syntax**: The [`defer!`] macro declares an anonymous guard at
//!   the point of intent, without naming a variable.
//!
//! ## no_std Support
//!
//! This crate is designed to work in `no_std` environments by default, making
//! it suitable for kernel-level code. When running tests, the standard
//! library is available.
//!
//! ## Example
//!
//! ```
//! use defer::defer;
//!
//! let mut closed = false;
//! {
//!     defer!(closed = true);
//!     // closed is still false here
//! }
//! assert!(closed);
//! ```

#![cfg_attr(not(test), no_std)]

mod macros;

mod scope_guard;

pub use scope_guard::*;
