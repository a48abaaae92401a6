use actix_web::{HttpResponse, web};
use log::error;

use crate::viacep::ViaCepClient;
use crate::viacep::error::LookupError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/consulta-cep/{cep}", web::get().to(consulta_cep));
}

pub async fn consulta_cep(
    cep: web::Path<String>,
    client: web::Data<ViaCepClient>
) -> Result<HttpResponse, LookupError> {
    let cep = cep.into_inner();

    match client.lookup(&cep).await {
        Ok(address) => Ok(HttpResponse::Ok().json(address)),
        Err(err) => {
            error!("Error while looking up cep {}: {}", cep, err);
            Err(err)
        },
    }
}
