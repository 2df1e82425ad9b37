use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::Logger, web};
use clap::Parser;
use tracing::{info, warn};

use careerbridge::{
    api,
    cli::{Cli, Command},
    config::Config,
    db,
    logging,
    notify::{Mailer, SendGridNotifier},
    shutdown::ShutdownCoordinator,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    logging::init(&config.log_dir).expect("Failed to initialize logging");

    info!("Starting careerbridge");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Max database connections: {}", config.max_db_connections);

    let store = db::connect(&config)
        .await
        .expect("Failed to connect to database");

    // Tables are created on every start; already-applied migrations are skipped
    store
        .migrate()
        .await
        .expect("Failed to run database migrations");

    if cli.command() == Command::Migrate {
        store.close().await;
        info!("Migrations applied, exiting");
        return Ok(());
    }

    let mailer = match config.email_settings() {
        Some((api_key, from)) => {
            let notifier = SendGridNotifier::new(api_key).expect("Failed to build email client");
            info!("SendGrid configured, OTP emails will be sent from {}", from);
            Some(Mailer::new(Arc::new(notifier), from))
        }
        None => {
            warn!("SENDGRID_API_KEY or EMAIL_FROM not set: OTP emails disabled (OTP returned in response)");
            None
        }
    };

    let server_store = store.clone();
    let max_payload_size = config.max_payload_size;

    let server = HttpServer::new(move || {
        let store = server_store.clone();
        let mailer = mailer.clone();

        App::new()
            .wrap(Logger::default())
            .app_data(web::PayloadConfig::default().limit(max_payload_size))
            .configure(|cfg| api::configure(cfg, store, mailer, max_payload_size))
    });

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server = server.bind((config.host.as_str(), config.port))?.run();
    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, store)
        .wait_for_shutdown()
        .await
}
