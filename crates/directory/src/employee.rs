use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_core::{DomainError, DomainResult, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
}

/// In-memory employee repository.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Employee>> {
        self.employees.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Employee>> {
        self.employees.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn list(&self) -> Vec<Employee> {
        self.read().clone()
    }

    pub fn get(&self, id: EntityId) -> Option<Employee> {
        self.read().iter().find(|e| e.id == id).cloned()
    }

    pub fn create(&self, draft: EmployeeDraft) -> DomainResult<Employee> {
        if draft.first_name.trim().is_empty() && draft.last_name.trim().is_empty() {
            return Err(DomainError::validation("employee name cannot be empty"));
        }
        let mut employees = self.write();
        let id = employees
            .iter()
            .map(|e| e.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(EntityId(1));

        let employee = Employee {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department: draft.department,
            salary: draft.salary,
            hire_date: draft.hire_date,
        };
        employees.push(employee.clone());
        tracing::info!(id = %employee.id, "employee created");
        Ok(employee)
    }

    pub fn update(&self, id: EntityId, draft: EmployeeDraft) -> DomainResult<Employee> {
        let mut employees = self.write();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::NotFound)?;
        employee.first_name = draft.first_name;
        employee.last_name = draft.last_name;
        employee.email = draft.email;
        employee.department = draft.department;
        employee.salary = draft.salary;
        employee.hire_date = draft.hire_date;
        Ok(employee.clone())
    }

    pub fn delete(&self, id: EntityId) -> DomainResult<()> {
        let mut employees = self.write();
        let idx = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(DomainError::NotFound)?;
        employees.remove(idx);
        Ok(())
    }
}
