use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Employees {
    Table,
    EmployeeId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Designation,
    Department,
    Salary,
    DateOfJoining,
    Status,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::FirstName).string_len(128))
                    .col(ColumnDef::new(Employees::LastName).string_len(128))
                    .col(ColumnDef::new(Employees::Email).string_len(320))
                    .col(ColumnDef::new(Employees::PhoneNumber).string_len(64))
                    .col(ColumnDef::new(Employees::Designation).string_len(128))
                    .col(ColumnDef::new(Employees::Department).string_len(128))
                    .col(ColumnDef::new(Employees::Salary).double())
                    .col(ColumnDef::new(Employees::DateOfJoining).date())
                    .col(ColumnDef::new(Employees::Status).string_len(32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}
