use actix_web::{post, web, HttpResponse};
use crate::domain::dto::tokens::{ApiResponse, LogoutRequest, RefreshTokenRequest};
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// 토큰 갱신 API 핸들러
///
/// 제출된 리프레시 토큰은 성공 여부와 관계없이 다시 사용할 수 없습니다.
#[post("/token")]
pub async fn refresh_token_handler(
    payload: web::Json<RefreshTokenRequest>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let token_pair = token_service.rotate_refresh_token(&payload.refresh_token)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(token_pair)))
}

/// 로그아웃 API 핸들러
///
/// 리프레시 토큰을 활성 목록에서 제거합니다. 알 수 없는 토큰이어도 성공입니다.
#[post("/logout")]
pub async fn logout_handler(
    payload: web::Json<LogoutRequest>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    token_service.revoke(&payload.refresh_token)?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()> {
        success: true,
        data: None,
        message: Some("logged out".to_string()),
    }))
}
