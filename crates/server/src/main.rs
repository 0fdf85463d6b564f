use std::net::SocketAddr;
use std::sync::Arc;

use api::{service::EmployeeService, store::DbEmployeeStore};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use server::{config::AppConfig, http};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "ems-server", version, about = "Employee management service")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run HTTP server
    Serve {
        #[arg(long, env = "BIND", default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// Run migrations (up|down|reset)
    Migrate {
        #[arg(long, default_value = "up")]
        action: String,
    },
    /// Seed sample data
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load();
    let db = Database::connect(&config.database_url).await?;

    match cli.cmd {
        Cmd::Migrate { action } => {
            match action.as_str() {
                "up" => Migrator::up(&db, None).await?,
                "down" => Migrator::down(&db, None).await?,
                "reset" => Migrator::reset(&db).await?,
                _ => eprintln!("Unknown action: {} (use up|down|reset)", action),
            }
            Ok(())
        }
        Cmd::Seed => {
            Migrator::up(&db, None).await?;
            seed(&db).await?;
            Ok(())
        }
        Cmd::Serve { bind } => {
            Migrator::up(&db, None).await?;
            let service = EmployeeService::new(Arc::new(DbEmployeeStore::new(db.clone())));
            let state = http::AppState { db, service };
            let addr: SocketAddr = bind.parse()?;
            http::serve(addr, state, &config.cors_allowed_origins).await
        }
    }
}

async fn seed(db: &DatabaseConnection) -> anyhow::Result<()> {
    use entity::employees;
    use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

    let samples = [
        (
            "Ada",
            "Lovelace",
            "ada@ems.test",
            "555-0100",
            "Engineer",
            "R&D",
            95_000.0,
            "2021-03-01",
            "ACTIVE",
        ),
        (
            "Grace",
            "Hopper",
            "grace@ems.test",
            "555-0101",
            "Principal Engineer",
            "R&D",
            120_000.0,
            "2019-07-15",
            "ACTIVE",
        ),
        (
            "Edsger",
            "Dijkstra",
            "edsger@ems.test",
            "555-0102",
            "Researcher",
            "Algorithms",
            88_000.0,
            "2020-11-30",
            "INACTIVE",
        ),
    ];

    for (first, last, email, phone, designation, department, salary, joined, status) in samples {
        employees::ActiveModel {
            employee_id: NotSet,
            first_name: Set(Some(first.into())),
            last_name: Set(Some(last.into())),
            email: Set(Some(email.into())),
            phone_number: Set(Some(phone.into())),
            designation: Set(Some(designation.into())),
            department: Set(Some(department.into())),
            salary: Set(Some(salary)),
            date_of_joining: Set(Some(joined.parse::<NaiveDate>()?)),
            status: Set(Some(status.into())),
        }
        .insert(db)
        .await?;
    }

    info!("seed data inserted");
    Ok(())
}
