use std::sync::Arc;

use api::service::{EmployeeInput, EmployeeService};
use api::store::DbEmployeeStore;
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

pub async fn setup_service() -> (DatabaseConnection, EmployeeService) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    bootstrap_sqlite(&db).await;
    let service = EmployeeService::new(Arc::new(DbEmployeeStore::new(db.clone())));
    (db, service)
}

pub async fn bootstrap_sqlite(db: &DatabaseConnection) {
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE employees (
            employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT,
            last_name TEXT,
            email TEXT,
            phone_number TEXT,
            designation TEXT,
            department TEXT,
            salary REAL,
            date_of_joining TEXT,
            status TEXT
        );
        "#,
    ))
    .await
    .unwrap();
}

pub fn sample_input(first: &str, last: &str) -> EmployeeInput {
    EmployeeInput {
        employee_id: None,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(format!("{}@ems.test", first.to_lowercase())),
        phone_number: Some("555-0100".to_string()),
        designation: Some("Engineer".to_string()),
        department: Some("R&D".to_string()),
        salary: Some(1000.0),
        date_of_joining: NaiveDate::from_ymd_opt(2023, 1, 1),
        status: Some("ACTIVE".to_string()),
    }
}
