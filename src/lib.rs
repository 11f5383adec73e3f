//! # Goal
//! The main goal of this library is to provide a growable list foundation
//! for programs that need amortized-cost sequence storage.
//!
//! Primary attribute of the library is a strict ownership model: the array
//! uniquely owns its backing buffer, and every view handed out is either a
//! borrow-checked reference or a snapshot copy.
//!
//! Secondary attribute is a small capability surface so that the array can
//! both accept foreign collections and be accepted by foreign algorithms.
//!
//! # Features
//! - Dynamic array, through the [`DynamicArray`] type.
//!      - Responsible for: storage, growth, and shifting of elements.
//! - Capability set, through the [`Collection`] trait.
//!      - Responsible for: what counts as a finite, sized, iterable source?
//! - Adapters, through the [`adapter`] module.
//!      - Responsible for: restricted interfaces (stack) layered on top.
//!
//! # Architecture
//! There are a few pieces that interact with one another:
//! - Buffer - contiguous owned storage of capacity >= logical length.
//! - Length - number of live elements; slots past it are uninitialized.
//! - Collection - the contract bulk operations consume and the array produces.
//! - Iterators - a borrowed cursor over the live buffer, and an owned drain.
//!
//! Indexed operations come in two families: explicitly indexed ones treat a
//! bad index as a contract violation and panic loudly, while the
//! `try_`-prefixed ones encode the miss as [`None`].

#[cfg(feature = "adapters")]
pub mod adapter;
pub mod array;
pub mod core;

#[cfg(feature = "adapters")]
pub use crate::adapter::Stack;
pub use crate::array::{DynamicArray, IntoIter, Iter, DEFAULT_CAPACITY};
pub use crate::core::{ArrayError, Collection};
