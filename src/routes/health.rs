use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct Greeting {
    #[serde(rename = "Greetings")]
    pub greetings: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = Greeting),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<Greeting> {
    Json(Greeting {
        greetings: "Hello world".to_string(),
    })
}
