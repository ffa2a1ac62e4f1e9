use wallio_core::Category;

use super::http::{self, ApiError};

pub async fn get_categories() -> Result<Vec<Category>, ApiError> {
    http::get("/api/categories", &[]).await
}
