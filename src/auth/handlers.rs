use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{
            AuthResponse, LoginRequest, MessageResponse, PublicAccount, RegisterRequest,
            VerifyResponse,
        },
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::Account,
        AuthAccount,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/verify-token", get(verify_token))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("register with missing fields");
        return Err(ApiError::Validation(
            "Email and password are required".into(),
        ));
    }

    if Account::find_by_email(&state.db, &payload.email)
        .await?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::DuplicateAccount);
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Store(e)
    })?;

    let account = Account::create(&state.db, &payload.email, &hash).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(account.id, &account.email)?;

    info!(account_id = %account.id, email = %account.email, "account registered");
    Ok(Json(AuthResponse {
        message: "Registration successful".into(),
        token,
        user: PublicAccount {
            id: account.id,
            email: account.email,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation(
            "Email and password are required".into(),
        ));
    }

    // Unknown email and wrong password return the identical error so the
    // response does not reveal which check failed.
    let account = match Account::find_by_email(&state.db, &payload.email).await? {
        Some(a) => a,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let ok = verify_password(&payload.password, &account.password_hash).map_err(|e| {
        error!(error = %e, "verify_password failed");
        ApiError::Store(e)
    })?;

    if !ok {
        warn!(email = %payload.email, account_id = %account.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(account.id, &account.email)?;

    info!(account_id = %account.id, email = %account.email, "account logged in");
    Ok(Json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: PublicAccount {
            id: account.id,
            email: account.email,
        },
    }))
}

/// Logout succeeds unconditionally for a valid token and invalidates
/// nothing server-side; the token stays usable until its expiry. Clients
/// drop their stored copy.
#[instrument(skip_all)]
pub async fn logout(AuthAccount(claims): AuthAccount) -> Json<MessageResponse> {
    info!(account_id = %claims.sub, "account logged out");
    Json(MessageResponse {
        message: "Logout successful".into(),
    })
}

#[instrument(skip_all)]
pub async fn verify_token(AuthAccount(claims): AuthAccount) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        user: PublicAccount {
            id: claims.sub,
            email: claims.email,
        },
    })
}
