//! Authentication HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트입니다. 두 경로 모두 성공 시 토큰 쌍을 발급합니다.
//!
//! - `POST /api/register` - 201 Created
//! - `POST /api/login` - 200 OK
use actix_web::{post, web, HttpResponse};
use crate::domain::dto::users::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.register(payload.into_inner()).await?;

    let tokens = token_service.issue_token_pair(&user).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.username, e);
        e
    })?;

    Ok(HttpResponse::Created().json(AuthResponse {
        user: UserResponse::from(&user),
        tokens,
    }))
}

#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.authenticate(&payload).await?;

    log::info!("로그인 성공 - 사용자: {}, ID: {}", user.username, user.id);

    let tokens = token_service.issue_token_pair(&user).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.username, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: UserResponse::from(&user),
        tokens,
    }))
}
