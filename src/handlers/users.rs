//! # User HTTP Handlers
//!
//! 액세스 토큰이 필요한 엔드포인트입니다. 라우트 설정에서 리소스마다
//! `AuthMiddleware::required()`로 감싸 등록됩니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/protected` | 인증된 사용자 클레임 확인 |
//! | `GET` | `/api/users` | 사용자 목록 (비밀번호 제외) |
//! | `GET` | `/api/users/me` | 현재 사용자 정보 |

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::domain::dto::tokens::ApiResponse;
use crate::domain::dto::users::UserResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

pub async fn protected(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the protected endpoint!",
        "user": user
    }))
}

pub async fn list_users(user_service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = user_service
        .find_all()
        .await?
        .iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}

/// 현재 사용자 정보 조회
///
/// 토큰은 유효하지만 저장소에 사용자가 없으면 403 입니다.
pub async fn get_me(
    user: AuthenticatedUser,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let found = user_service
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| AppError::Forbidden(format!("user {} no longer exists", user.id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(&found))))
}
