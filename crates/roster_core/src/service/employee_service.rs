//! Employee use-case service.
//!
//! # Responsibility
//! - Validate caller input before it reaches the repository.
//! - Parse and default transport-level identifiers and list parameters.
//! - Shape list results into a serializable response envelope.
//!
//! # Invariants
//! - Invalid input never reaches the repository, so no identity is consumed.
//! - Repository `NotFound` is surfaced as `ServiceError::NotFound`.
//! - List parameter parsing is independent of repository page normalization.

use crate::model::employee::{Employee, EmployeeFields, EmployeeId, EmployeeValidationError};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page used when the caller omits one.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the caller omits one.
pub const DEFAULT_LIMIT: i64 = 10;
/// Limit value meaning "return every remaining record".
pub const UNLIMITED: i64 = -1;

/// Create and update request body. Both operations accept the same fields.
pub type EmployeeRequest = EmployeeFields;

/// Service error for employee use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Request body failed field validation.
    Validation(EmployeeValidationError),
    /// Identifier is not a non-negative integer.
    InvalidId(String),
    /// Page parameter is not an integer.
    InvalidPage(String),
    /// Page parameter is zero or negative.
    PageOutOfRange(i64),
    /// Limit parameter is not an integer.
    InvalidLimit(String),
    /// Target employee does not exist.
    NotFound(EmployeeId),
}

/// Coarse error class for transport adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    BadRequest,
    NotFound,
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::NotFound(_) => ServiceErrorKind::NotFound,
            _ => ServiceErrorKind::BadRequest,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidId(_) => "invalid_id",
            Self::InvalidPage(_) => "invalid_page",
            Self::PageOutOfRange(_) => "page_out_of_range",
            Self::InvalidLimit(_) => "invalid_limit",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidId(raw) => write!(f, "invalid employee ID: `{raw}`"),
            Self::InvalidPage(raw) => write!(f, "invalid page number: `{raw}`"),
            Self::PageOutOfRange(page) => {
                write!(f, "page number should be greater than 0 (got {page})")
            }
            Self::InvalidLimit(raw) => write!(f, "invalid limit number: `{raw}`"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EmployeeValidationError> for ServiceError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Parses a path identifier into an `EmployeeId`.
pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, ServiceError> {
    raw.parse::<EmployeeId>()
        .map_err(|_| ServiceError::InvalidId(raw.to_string()))
}

/// Parsed list parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page, always positive once parsed.
    pub page: i64,
    /// Page size, or `UNLIMITED`.
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    /// Parses raw `page` / `limit` query values.
    ///
    /// # Contract
    /// - Missing or empty values fall back to `DEFAULT_PAGE` / `DEFAULT_LIMIT`.
    /// - Non-integer values are rejected.
    /// - `page <= 0` is rejected; `limit <= 0` becomes `UNLIMITED`.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, ServiceError> {
        let page = match page.filter(|value| !value.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ServiceError::InvalidPage(raw.to_string()))?,
            None => DEFAULT_PAGE,
        };
        if page <= 0 {
            return Err(ServiceError::PageOutOfRange(page));
        }

        let limit = match limit.filter(|value| !value.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ServiceError::InvalidLimit(raw.to_string()))?,
            None => DEFAULT_LIMIT,
        };
        let limit = if limit <= 0 { UNLIMITED } else { limit };

        Ok(Self { page, limit })
    }
}

/// List envelope returned to transport callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse {
    pub page: i64,
    pub limit: i64,
    pub total: usize,
    pub data: Vec<Employee>,
}

/// Employee service facade over repository implementations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates the request and stores a new employee.
    pub fn create_employee(&self, request: &EmployeeRequest) -> Result<Employee, ServiceError> {
        if let Err(err) = request.validate() {
            return Err(rejected("employee_create", err.into()));
        }

        let employee = self.repo.create_employee(request.clone());
        info!(
            "event=employee_create module=service status=ok id={}",
            employee.id
        );
        Ok(employee)
    }

    pub fn get_employee(&self, id: EmployeeId) -> Result<Employee, ServiceError> {
        Ok(self.repo.get_employee(id)?)
    }

    /// Validates the request and replaces all fields of an existing employee.
    ///
    /// Validation runs first, so an invalid body for a missing id reports
    /// the validation error.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        request: &EmployeeRequest,
    ) -> Result<Employee, ServiceError> {
        if let Err(err) = request.validate() {
            return Err(rejected("employee_update", err.into()));
        }

        let employee = self
            .repo
            .update_employee(id, request.clone())
            .map_err(|err| rejected("employee_update", err.into()))?;
        info!("event=employee_update module=service status=ok id={id}");
        Ok(employee)
    }

    pub fn delete_employee(&self, id: EmployeeId) -> Result<(), ServiceError> {
        self.repo
            .delete_employee(id)
            .map_err(|err| rejected("employee_delete", err.into()))?;
        info!("event=employee_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Lists one page of employees in creation order.
    pub fn list_employees(&self, query: &ListQuery) -> ListResponse {
        let page = self.repo.list_employees(query.page, query.limit);
        ListResponse {
            page: query.page,
            limit: query.limit,
            total: page.total,
            data: page.items,
        }
    }
}

fn rejected(event: &str, err: ServiceError) -> ServiceError {
    info!(
        "event={event} module=service status=rejected error_code={}",
        err.code()
    );
    err
}
