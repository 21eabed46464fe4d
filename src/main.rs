use launchlist::startup::Application;
use launchlist::{configuration::get_configuration, telemetry::*};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("launchlist".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    Application::build(configuration)?.run_until_stopped().await?;
    Ok(())
}
