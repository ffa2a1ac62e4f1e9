//! Image-generation job service client.

use wallio_core::{GenerateRequest, GenerateResponse, GeneratorsResponse};

use super::http::{self, ApiError};

pub async fn get_generators() -> Result<Vec<String>, ApiError> {
    let response: GeneratorsResponse = http::get("/api/images/generators", &[]).await?;
    Ok(response.generators)
}

pub async fn generate_image(request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
    http::post("/api/images/generate", request).await
}

pub async fn get_generation_status(task_id: &str) -> Result<GenerateResponse, ApiError> {
    http::get(&format!("/api/images/status/{task_id}"), &[]).await
}
