//! 应用层

pub mod notes;
pub mod system;

use axum::{middleware, Router};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use notes::{repository::NoteRepository, service::NoteService};

#[derive(Clone)]
pub struct AppState {
    pub note_service: NoteService,
}

impl AppState {
    pub fn new(repository: Arc<dyn NoteRepository>, validate_input: bool) -> Self {
        Self {
            note_service: NoteService::new(repository).with_validation(validate_input),
        }
    }
}

/// 组装全部路由和中间件
///
/// 请求日志在最外层，CORS 预检响应也会带上 `x-request-id`。
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(system::routes())
        .merge(notes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
