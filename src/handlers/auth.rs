use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::jwt;
use crate::auth::middleware::{AuthenticatedUser, JwtSecret};
use crate::db::users as user_db;
use crate::error::ApiError;
use crate::models::users::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

/// POST /api/auth/signup — register a new account and return a fresh token.
pub async fn signup(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    if input.name.trim().len() < 2 || input.name.len() > 100 {
        return Err(ApiError::Validation(
            "name must be between 2 and 100 characters".to_string(),
        ));
    }
    if !input.email.contains('@') {
        return Err(ApiError::Validation("a valid email is required".to_string()));
    }
    if input.password.len() < 6 || input.password.len() > 100 {
        return Err(ApiError::Validation(
            "password must be between 6 and 100 characters".to_string(),
        ));
    }

    if user_db::find_by_email(db.get_ref(), &input.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("email is already registered".to_string()));
    }

    let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {e}")))?;

    let user = user_db::insert_user(db.get_ref(), input, password_hash).await?;

    let token = jwt::generate_token(user.id, &secret.get_ref().0)
        .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

/// POST /api/auth/login — exchange email + password for a token.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();

    // Unknown email and wrong password produce the same response, so a
    // caller cannot probe which addresses have accounts.
    let Some(user) = user_db::find_by_email(db.get_ref(), &input.email).await? else {
        return Err(ApiError::Unauthorized("invalid email or password".to_string()));
    };

    match bcrypt::verify(&input.password, &user.password_hash) {
        Ok(true) => {}
        _ => {
            return Err(ApiError::Unauthorized("invalid email or password".to_string()));
        }
    }

    let token = jwt::generate_token(user.id, &secret.get_ref().0)
        .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

/// GET /api/auth/me — return the currently authenticated user's profile.
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user.0)))
}
