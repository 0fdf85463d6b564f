use async_trait::async_trait;
use entity::employees;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionError,
    TransactionTrait, TryIntoModel,
};

/// Persistence seam for employee records. `save` inserts when the primary
/// key is unset and updates otherwise; `save_all` persists a batch in one
/// transaction, assigning identifiers in input order.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn save(&self, record: employees::ActiveModel) -> Result<employees::Model, DbErr>;

    async fn save_all(
        &self,
        records: Vec<employees::ActiveModel>,
    ) -> Result<Vec<employees::Model>, DbErr>;

    async fn find_by_id(&self, id: i64) -> Result<Option<employees::Model>, DbErr>;

    async fn find_all(&self) -> Result<Vec<employees::Model>, DbErr>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr>;

    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr>;
}

/// SeaORM-backed store over a shared database connection.
#[derive(Clone)]
pub struct DbEmployeeStore {
    db: DatabaseConnection,
}

impl DbEmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeStore for DbEmployeeStore {
    async fn save(&self, record: employees::ActiveModel) -> Result<employees::Model, DbErr> {
        record.save(&self.db).await?.try_into_model()
    }

    async fn save_all(
        &self,
        records: Vec<employees::ActiveModel>,
    ) -> Result<Vec<employees::Model>, DbErr> {
        self.db
            .transaction::<_, Vec<employees::Model>, DbErr>(|txn| {
                Box::pin(async move {
                    let mut saved = Vec::with_capacity(records.len());
                    for record in records {
                        saved.push(record.save(txn).await?.try_into_model()?);
                    }
                    Ok(saved)
                })
            })
            .await
            .map_err(flatten_transaction_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<employees::Model>, DbErr> {
        employees::Entity::find_by_id(id).one(&self.db).await
    }

    async fn find_all(&self) -> Result<Vec<employees::Model>, DbErr> {
        employees::Entity::find().all(&self.db).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = employees::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        employees::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

fn flatten_transaction_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(err) => err,
        TransactionError::Transaction(err) => err,
    }
}
