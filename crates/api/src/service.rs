use std::sync::Arc;

use chrono::NaiveDate;
use entity::employees;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    store::EmployeeStore,
};

/// Employee payload accepted by the create and update operations. The
/// identifier is optional: create discards it, update requires it. Absent
/// fields are stored as NULL; there are no partial-update semantics.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub employee_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<NaiveDate>,
    pub status: Option<String>,
}

impl EmployeeInput {
    /// Record to insert: the primary key stays unset so the store assigns it.
    fn into_new_record(self) -> employees::ActiveModel {
        employees::ActiveModel {
            employee_id: NotSet,
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone_number: Set(self.phone_number),
            designation: Set(self.designation),
            department: Set(self.department),
            salary: Set(self.salary),
            date_of_joining: Set(self.date_of_joining),
            status: Set(self.status),
        }
    }

    /// Wholesale-replace every non-key field of an existing record.
    fn apply_to(self, existing: employees::Model) -> employees::ActiveModel {
        let mut record = existing.into_active_model();
        record.first_name = Set(self.first_name);
        record.last_name = Set(self.last_name);
        record.email = Set(self.email);
        record.phone_number = Set(self.phone_number);
        record.designation = Set(self.designation);
        record.department = Set(self.department);
        record.salary = Set(self.salary);
        record.date_of_joining = Set(self.date_of_joining);
        record.status = Set(self.status);
        record
    }
}

/// Orchestrates the five CRUD operations against the injected store.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Persist a new employee. Any client-supplied identifier is discarded so
    /// the store always assigns a fresh one.
    pub async fn create_employee(&self, input: EmployeeInput) -> ApiResult<employees::Model> {
        Ok(self.store.save(input.into_new_record()).await?)
    }

    /// Persist a batch of employees in one all-or-nothing store call.
    /// Identifier assignment follows the order of the input list.
    pub async fn create_employees(
        &self,
        inputs: Vec<EmployeeInput>,
    ) -> ApiResult<Vec<employees::Model>> {
        let records = inputs
            .into_iter()
            .map(EmployeeInput::into_new_record)
            .collect();
        Ok(self.store.save_all(records).await?)
    }

    pub async fn get_employee_by_id(&self, id: i64) -> ApiResult<employees::Model> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(id))
    }

    pub async fn get_employees(&self) -> ApiResult<Vec<employees::Model>> {
        Ok(self.store.find_all().await?)
    }

    /// Replace every field of an existing employee with the incoming values
    /// and return the updated record. The identifier itself never changes.
    pub async fn update_employee(&self, input: EmployeeInput) -> ApiResult<employees::Model> {
        let id = input.employee_id.unwrap_or_default();
        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(id))?;
        Ok(self.store.save(input.apply_to(existing)).await?)
    }

    pub async fn delete_employee(&self, id: i64) -> ApiResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(ApiError::CannotDelete(id));
        }
        Ok(self.store.delete_by_id(id).await?)
    }
}
