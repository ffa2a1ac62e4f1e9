//! Wallpaper listing, preview info, adjacency, favorites, and admin
//! create/delete.

use wallio_core::{
    CreateWallpaperRequest, GalleryFilter, PreviewInfo, Wallpaper, WallpaperPage,
};

use super::http::{self, ApiError};

pub async fn get_wallpapers(
    filter: &GalleryFilter,
    limit: usize,
    offset: usize,
) -> Result<WallpaperPage, ApiError> {
    let mut query = filter.query_pairs();
    query.push(("limit", limit.to_string()));
    query.push(("offset", offset.to_string()));
    http::get("/api/wallpapers", &query).await
}

pub async fn get_next_wallpaper(
    id: i64,
    filter: &GalleryFilter,
) -> Result<PreviewInfo, ApiError> {
    http::get(&format!("/api/wallpapers/{id}/next"), &filter.query_pairs()).await
}

pub async fn get_previous_wallpaper(
    id: i64,
    filter: &GalleryFilter,
) -> Result<PreviewInfo, ApiError> {
    http::get(
        &format!("/api/wallpapers/{id}/previous"),
        &filter.query_pairs(),
    )
    .await
}

pub async fn get_similar_wallpapers(id: i64, limit: usize) -> Result<Vec<Wallpaper>, ApiError> {
    http::get(
        &format!("/api/wallpapers/{id}/similar"),
        &[("limit", limit.to_string())],
    )
    .await
}

pub async fn get_wallpaper_info(id: i64) -> Result<PreviewInfo, ApiError> {
    http::get(&format!("/api/wallpapers/{id}/info"), &[]).await
}

pub async fn create_wallpaper(request: &CreateWallpaperRequest) -> Result<Wallpaper, ApiError> {
    http::post("/api/wallpapers", request).await
}

pub async fn delete_wallpaper(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/wallpapers/{id}")).await
}

pub async fn add_favorite(id: i64) -> Result<(), ApiError> {
    http::post_unit(&format!("/api/wallpapers/{id}/favorite")).await
}

pub async fn remove_favorite(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("/api/wallpapers/{id}/favorite")).await
}

pub async fn get_favorites(limit: usize, offset: usize) -> Result<WallpaperPage, ApiError> {
    http::get(
        "/api/wallpapers/favorites",
        &[("limit", limit.to_string()), ("offset", offset.to_string())],
    )
    .await
}
