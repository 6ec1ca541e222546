use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use finbank::config;
use finbank::routes;
use finbank::store::Bank;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (host, port) = config::bind_address();

    // One store for the whole process; every worker shares it.
    let bank = web::Data::new(Bank::default());

    tracing::info!("listening on {host}:{port}");

    HttpServer::new(move || App::new().app_data(bank.clone()).configure(routes::config))
        .bind((host.as_str(), port))?
        .run()
        .await
}
