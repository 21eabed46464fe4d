use std::net::TcpListener;
use std::time::Duration;

use actix_web::{
    App, HttpServer,
    dev::Server,
    web::{self, Data},
};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_log::EmailLog;
use crate::routes::{SpaAssets, capture_email, health_check, serve_spa};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let email_log = EmailLog::new(configuration.email_log.path);
        let assets = SpaAssets::new(
            configuration.static_assets.root,
            configuration.static_assets.index_file,
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            email_log,
            assets,
            Duration::from_secs(configuration.application.request_timeout_seconds),
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_log: EmailLog,
    assets: SpaAssets,
    request_timeout: Duration,
) -> Result<Server, std::io::Error> {
    let email_log = Data::new(email_log);
    let assets = Data::new(assets);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/api/health", web::get().to(health_check))
            .route("/email", web::post().to(capture_email))
            // Everything else belongs to the SPA, whatever the method.
            .default_service(web::to(serve_spa))
            .app_data(email_log.clone())
            .app_data(assets.clone())
    })
    .client_request_timeout(request_timeout)
    .listen(listener)?
    .run();
    Ok(server)
}
