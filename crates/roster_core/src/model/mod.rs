//! Domain model for roster records.
//!
//! # Responsibility
//! - Define the record shape stored by repositories and returned to callers.
//! - Own field-level validation rules for caller-supplied input.
//!
//! # Invariants
//! - Every record is identified by a repository-assigned `EmployeeId`.
//! - Identity is never part of caller-owned fields.

pub mod employee;
