//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and pagination APIs over employee records.
//! - Assign record identities from a monotonically increasing counter.
//!
//! # Invariants
//! - One reader/writer lock guards the container and the counter together.
//! - Reads take shared access; create/update/delete take exclusive access.
//! - Identities start at 1, increase by one per create, and are never reused.
//! - List order is record creation order; updates never reorder records.
//! - No logging or other I/O happens while the lock is held.

use crate::datatypes::ordered_map::OrderedMap;
use crate::model::employee::{Employee, EmployeeFields, EmployeeId};
use log::debug;
use parking_lot::RwLock;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

const FIRST_EMPLOYEE_ID: EmployeeId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No record exists for the identity (never created, or deleted).
    NotFound(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// One page of records plus the total number of stored records.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeePage {
    /// Records in creation order, at most one page long.
    pub items: Vec<Employee>,
    /// Count of all stored records, independent of the page window.
    pub total: usize,
}

/// Repository interface for employee CRUD operations.
///
/// Every method takes `&self`; implementations are responsible for their own
/// synchronization so one instance can serve many threads.
pub trait EmployeeRepository {
    /// Stores a new record under the next identity. Never fails.
    fn create_employee(&self, fields: EmployeeFields) -> Employee;
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee>;
    /// Replaces all caller-owned fields of an existing record.
    fn update_employee(&self, id: EmployeeId, fields: EmployeeFields) -> RepoResult<Employee>;
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()>;
    /// Returns one 1-based page of records.
    ///
    /// `page <= 0` is treated as page 1 and `limit <= 0` as "no limit".
    /// Out-of-range pages are empty, not errors.
    fn list_employees(&self, page: i64, limit: i64) -> EmployeePage;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &R {
    fn create_employee(&self, fields: EmployeeFields) -> Employee {
        (**self).create_employee(fields)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee> {
        (**self).get_employee(id)
    }

    fn update_employee(&self, id: EmployeeId, fields: EmployeeFields) -> RepoResult<Employee> {
        (**self).update_employee(id, fields)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        (**self).delete_employee(id)
    }

    fn list_employees(&self, page: i64, limit: i64) -> EmployeePage {
        (**self).list_employees(page, limit)
    }
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for Arc<R> {
    fn create_employee(&self, fields: EmployeeFields) -> Employee {
        (**self).create_employee(fields)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee> {
        (**self).get_employee(id)
    }

    fn update_employee(&self, id: EmployeeId, fields: EmployeeFields) -> RepoResult<Employee> {
        (**self).update_employee(id, fields)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        (**self).delete_employee(id)
    }

    fn list_employees(&self, page: i64, limit: i64) -> EmployeePage {
        (**self).list_employees(page, limit)
    }
}

#[derive(Debug)]
struct RepoState {
    store: OrderedMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

/// Process-local employee repository backed by an insertion-ordered map.
///
/// Nothing is persisted; identities restart at 1 for every new instance.
#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    state: RwLock<RepoState>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RepoState {
                store: OrderedMap::new(),
                next_id: FIRST_EMPLOYEE_ID,
            }),
        }
    }

    /// Current number of stored records.
    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn create_employee(&self, fields: EmployeeFields) -> Employee {
        let employee = {
            let mut state = self.state.write();
            let employee = Employee::from_fields(state.next_id, fields);
            state.store.set(employee.id, employee.clone());
            state.next_id += 1;
            employee
        };

        debug!(
            "event=employee_create module=repo status=ok id={}",
            employee.id
        );
        employee
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Employee> {
        let found = self.state.read().store.get(&id).cloned();
        found.ok_or(RepoError::NotFound(id))
    }

    fn update_employee(&self, id: EmployeeId, fields: EmployeeFields) -> RepoResult<Employee> {
        let updated = {
            let mut state = self.state.write();
            match state.store.get(&id).cloned() {
                Some(mut employee) => {
                    employee.apply(fields);
                    state.store.set(id, employee.clone());
                    Some(employee)
                }
                None => None,
            }
        };

        match updated {
            Some(employee) => {
                debug!("event=employee_update module=repo status=ok id={id}");
                Ok(employee)
            }
            None => {
                debug!("event=employee_update module=repo status=error error_code=not_found id={id}");
                Err(RepoError::NotFound(id))
            }
        }
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        let removed = self.state.write().store.delete(&id);

        if !removed {
            debug!("event=employee_delete module=repo status=error error_code=not_found id={id}");
            return Err(RepoError::NotFound(id));
        }

        debug!("event=employee_delete module=repo status=ok id={id}");
        Ok(())
    }

    fn list_employees(&self, page: i64, limit: i64) -> EmployeePage {
        let result = {
            let state = self.state.read();
            let total = state.store.len();
            let items = match page_window(page, limit, total) {
                Some((offset, take)) => state
                    .store
                    .iter()
                    .skip(offset)
                    .take(take)
                    .map(|(_, employee)| employee.clone())
                    .collect(),
                None => Vec::new(),
            };
            EmployeePage { items, total }
        };

        debug!(
            "event=employee_list module=repo status=ok page={page} limit={limit} returned={} total={}",
            result.items.len(),
            result.total
        );
        result
    }
}

/// Resolves a 1-based page request into `(offset, take)`.
///
/// A non-positive `limit` is replaced by `total` before the offset is
/// computed. Returns `None` when the offset lies at or beyond `total`.
fn page_window(page: i64, limit: i64, total: usize) -> Option<(usize, usize)> {
    let page = page.max(1);
    let limit = if limit <= 0 {
        total
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    };

    let skipped_pages = usize::try_from(page - 1).unwrap_or(usize::MAX);
    let offset = skipped_pages.saturating_mul(limit);
    if offset >= total {
        return None;
    }

    Some((offset, limit))
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn page_window_normalizes_page_and_limit() {
        assert_eq!(page_window(0, 2, 5), Some((0, 2)));
        assert_eq!(page_window(-7, 2, 5), Some((0, 2)));
        assert_eq!(page_window(1, 0, 5), Some((0, 5)));
        assert_eq!(page_window(1, -1, 5), Some((0, 5)));
    }

    #[test]
    fn page_window_unlimited_beyond_first_page_is_empty() {
        assert_eq!(page_window(2, -1, 5), None);
    }

    #[test]
    fn page_window_empty_store_is_always_empty() {
        assert_eq!(page_window(1, 10, 0), None);
        assert_eq!(page_window(1, 0, 0), None);
    }

    #[test]
    fn page_window_saturates_huge_offsets() {
        assert_eq!(page_window(i64::MAX, i64::MAX, 3), None);
        assert_eq!(page_window(2, i64::MAX, 3), None);
    }
}
