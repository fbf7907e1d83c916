//! API 라우트 설정 모듈
//!
//! 공개 경로와 액세스 토큰이 필요한 경로를 구분하여 등록합니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `GET` | `/` | 선택 |
//! | `GET` | `/health` | 없음 |
//! | `POST` | `/api/register` | 없음 |
//! | `POST` | `/api/login` | 없음 |
//! | `POST` | `/api/token` | 없음 (리프레시 토큰을 본문으로 제출) |
//! | `POST` | `/api/logout` | 없음 (리프레시 토큰을 본문으로 제출) |
//! | `GET` | `/api/protected` | Bearer |
//! | `GET` | `/api/users` | Bearer |
//! | `GET` | `/api/users/me` | Bearer |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(token_service.clone())
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::domain::models::auth::OptionalUser;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(health_check);
    cfg.service(
        web::resource("/")
            .wrap(AuthMiddleware::optional())
            .route(web::get().to(index)),
    );

    configure_api_routes(cfg);
}

/// `/api` 하위 라우트를 설정합니다
///
/// 보호 경로는 리소스 단위로 인증 미들웨어를 감싸므로, 등록되지 않은 경로는 404 입니다.
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::token_handlers::refresh_token_handler)
            .service(handlers::token_handlers::logout_handler)
            // Protected
            .service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::users::protected)),
            )
            .service(
                web::resource("/users")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::users::list_users)),
            )
            .service(
                web::resource("/users/me")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::users::get_me)),
            ),
    );
}

/// JSON 본문 추출 실패를 `AppError::BadRequest` 응답 형식으로 변환합니다
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}

async fn index(user: OptionalUser) -> HttpResponse {
    let body = match user.0 {
        Some(user) => format!("Backend is running, {}", user.username),
        None => "Backend is running".to_string(),
    };
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body)
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[get("/health")]
async fn health_check(token_service: web::Data<crate::services::auth::TokenService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "active_refresh_tokens": token_service.active_refresh_tokens()
    }))
}
