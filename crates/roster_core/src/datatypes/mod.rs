//! General-purpose containers used by the in-memory repositories.
//!
//! # Responsibility
//! - Provide storage structures with no knowledge of domain records.
//!
//! # Invariants
//! - Containers here carry no synchronization; owners guard them.

pub mod ordered_map;
