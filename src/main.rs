use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use employee_directory::config::Config;
use employee_directory::handlers::{self, file::UploadDir};
use employee_directory::store::{EmployeeStore, PgEmployeeStore};
use employee_directory::db;

fn startup_failure<E: std::fmt::Display>(context: &str, err: E) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Refuse to start without store credentials
    let config = Config::from_env().map_err(|err| startup_failure("Invalid configuration", err))?;

    let pool = db::create_pool(&config)
        .await
        .map_err(|err| startup_failure("Failed to connect to the database", err))?;
    db::ensure_schema(&pool)
        .await
        .map_err(|err| startup_failure("Failed to prepare the employees table", err))?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|err| startup_failure("Failed to create the upload directory", err))?;

    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));
    let store = web::Data::from(store);
    let upload_dir = web::Data::new(UploadDir(config.upload_dir.clone()));

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(upload_dir.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
