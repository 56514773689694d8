/*
 * Responsibility
 * - GET / (welcome message + API version)
 */
use axum::Json;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub mensaje: &'static str,
    pub version: &'static str,
    pub fecha_hora: String,
}

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        mensaje: "Bienvenido a la API de Demostración",
        version: env!("CARGO_PKG_VERSION"),
        fecha_hora: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
    })
}
