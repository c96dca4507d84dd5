//! Core domain logic for Roster.
//! This crate owns record identity, ordering and concurrent access rules.

pub mod datatypes;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use datatypes::ordered_map::OrderedMap;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::employee::{Employee, EmployeeFields, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{
    EmployeePage, EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
};
pub use service::employee_service::{
    parse_employee_id, EmployeeRequest, EmployeeService, ListQuery, ListResponse, ServiceError,
    ServiceErrorKind,
};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
