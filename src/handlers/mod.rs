//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 DTO로 받아 서비스에 위임하고, 결과를 `AppError` 매핑에 따라
//! 상태 코드로 변환합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   AuthMiddleware - Bearer 토큰 검증 (보호 경로)
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈)
//! ├─────────────────────────────────────────────┤
//!   Services - TokenService / UserService
//! ├─────────────────────────────────────────────┤
//!   Repositories - 활성 토큰 목록 / 사용자 저장소
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스 인스턴스는 `web::Data<T>` 추출자로 주입됩니다.
//!
//! ```rust,ignore
//! #[post("/token")]
//! pub async fn refresh_token_handler(
//!     payload: web::Json<RefreshTokenRequest>,
//!     token_service: web::Data<TokenService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let token_pair = token_service.rotate_refresh_token(&payload.refresh_token)?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::success(token_pair)))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 회원가입, 로그인
//! - [`token_handlers`] - 토큰 갱신, 로그아웃
//! - [`users`] - 보호된 사용자 엔드포인트

pub mod auth;
pub mod token_handlers;
pub mod users;
