//! Repository layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Own identity assignment and concurrent access to stored records.
//!
//! # Invariants
//! - Repositories perform no input validation; callers validate first.
//! - Repository APIs return the semantic `NotFound` error for missing ids.

pub mod employee_repo;
