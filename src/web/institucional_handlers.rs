// src/web/institucional_handlers.rs
use crate::{
    error::AppResult,
    templates::{IndexPage, TermosPage},
};
use askama::Template;
use axum::response::{Html, IntoResponse, Response};

// GET /
pub async fn show_index() -> AppResult<Response> {
    Ok(Html(IndexPage.render()?).into_response())
}

// GET /termossete
pub async fn show_termos() -> AppResult<Response> {
    Ok(Html(TermosPage.render()?).into_response())
}
