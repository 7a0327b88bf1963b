//! In-memory employee store
//!
//! Same contract as the SQLite backend, kept in a map behind a mutex. Ids
//! come from a monotonic counter, so a deleted id is never handed out again.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use crate::{Error, Result};
use crate::employee::{Employee, EmployeeFields};
use super::EmployeeStore;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// Volatile store for tests and throwaway sessions
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl EmployeeStore for MemoryStore {
    fn create(&self, fields: &EmployeeFields) -> Result<i64> {
        fields.validate()?;
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, Employee::from_fields(id, fields.clone()));
        tracing::debug!("Created employee {} (memory)", id);
        Ok(id)
    }

    fn get(&self, id: i64) -> Result<Option<Employee>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn update(&self, id: i64, fields: &EmployeeFields) -> Result<bool> {
        fields.validate()?;
        let mut inner = self.lock()?;
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = Employee::from_fields(id, fields.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }

    fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }
}
