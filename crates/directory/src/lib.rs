//! `shopdesk-directory` — employee and user records.
//!
//! Flat CRUD stores with the same `RwLock<Vec<_>>` shape as the catalog.
//! The user store carries the demo's plaintext login check; real credential
//! handling is explicitly out of scope.

pub mod employee;
pub mod user;

pub use employee::{Employee, EmployeeDraft, EmployeeStore};
pub use user::{User, UserDraft, UserStore};
