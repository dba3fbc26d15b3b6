//! Core domain and policy logic for the forum service.
//!
//! This crate contains no I/O. It defines the domain types, the cache key
//! policy, and the traits that the service crate's storage, cache, and event
//! bus backends implement.

pub mod cache;
pub mod events;
pub mod post;
pub mod storage;
