use std::io::Error;
use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::mail_sender::ContactMailer;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let sender = configuration
            .email_client
            .sender()
            .map_err(anyhow::Error::msg)
            .context("Invalid source address for contact emails")?;
        let destination = configuration
            .email_client
            .destination()
            .map_err(anyhow::Error::msg)
            .context("Invalid recipient address for contact emails")?;
        let timeout = configuration.email_client.timeout();
        let email_client = EmailClient::new(
            sender,
            configuration.email_client.base_url,
            configuration.email_client.authorization_token,
            timeout,
        )
        .context("Failed to build the email client")?;
        let mailer = ContactMailer::new(email_client, destination);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let bound_addr = listener.local_addr()?;
        let payload_limit = configuration.application.max_payload_bytes;
        let server = run(listener, mailer, payload_limit)?;

        tracing::info!(%bound_addr, "Contact form server listening");
        Ok(Self {
            server,
            port: bound_addr.port(),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    mailer: ContactMailer,
    payload_limit: usize,
) -> Result<Server, Error> {
    // Shared across workers, built once at startup
    let mailer = web::Data::new(mailer);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(crate::routes::health_check))
            .route("/contact", web::post().to(crate::routes::contact))
            .app_data(web::Data::clone(&mailer))
            .app_data(web::PayloadConfig::new(payload_limit))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
