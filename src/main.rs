use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use log::info;

use crate::api::cep;
use crate::config::Settings;
use crate::viacep::ViaCepClient;

mod api;
mod config;
mod viacep;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let settings = Settings::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let client = ViaCepClient::new(&settings)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    info!(
        "Forwarding lookups to {} (timeout: {}s)",
        client.base_url(),
        settings.timeout.as_secs()
    );
    info!("Listening on {}", settings.bind_address);

    let client = web::Data::new(client);
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .wrap(Logger::default())
            .configure(cep::configure)
    })
    .bind(settings.bind_address.as_str())?
    .run()
    .await
}
