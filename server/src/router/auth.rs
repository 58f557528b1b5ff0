use aide::{
    axum::{
        routing::{get_with, post_with},
        ApiRouter, IntoApiResponse,
    },
    transform::TransformOperation,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    Extension, Json,
};
use tower_sessions::Session;
use tracing::{info, warn};

use crate::{
    errors::{ErrorResponse, RestError, RestResult},
    model::{
        auth::{AccountResponse, LoginRequest, LoginResponse},
        user::User,
    },
    session::{end_session, require_user, start_session, CurrentSession},
    state::AppState,
};

async fn login(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoApiResponse {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => return RestError::from(rejection).into_response(),
    };

    match perform_login(&state, &session, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn perform_login(
    state: &AppState,
    session: &Session,
    request: LoginRequest,
) -> RestResult<LoginResponse> {
    match state
        .admin
        .check_username_password(&request.username, &request.password)
    {
        Ok(user) => {
            start_session(session, &user).await?;
            info!("User {} logged in", user.username);
            Ok(LoginResponse::default())
        }
        Err(e) => {
            warn!("Failed login attempt for {}", request.username);
            end_session(session).await?;
            Err(RestError::Authorization(e))
        }
    }
}

fn login_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Log in")
        .description("Starts a session and sets the `session` cookie")
        .tag("Auth")
        .response_with::<200, Json<LoginResponse>, _>(|res| res.example(LoginResponse::default()))
        .response_with::<401, Json<ErrorResponse>, _>(|res| {
            res.description("Wrong credentials").example(ErrorResponse {
                error: "Wrong credentials".to_string(),
            })
        })
        .response_with::<400, Json<ErrorResponse>, _>(|res| {
            res.description("Body is not a JSON login request")
        })
}

async fn logout(CurrentSession(session): CurrentSession) -> impl IntoApiResponse {
    match end_session(&session).await {
        Ok(()) => (StatusCode::OK, Json(LoginResponse::default())).into_response(),
        Err(e) => e.into_response(),
    }
}

fn logout_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Log out")
        .description("Ends the current session, if any")
        .tag("Auth")
        .response::<200, Json<LoginResponse>>()
}

async fn account(Extension(user): Extension<User>) -> impl IntoApiResponse {
    Json(AccountResponse { name: user.name })
}

fn account_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Current account")
        .tag("Auth")
        .response_with::<200, Json<AccountResponse>, _>(|res| {
            res.example(AccountResponse {
                name: "John".to_string(),
            })
        })
        .response_with::<401, Json<ErrorResponse>, _>(|res| res.description("Not authenticated"))
}

fn auth_routes_public() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/api/login", post_with(login, login_docs))
        .api_route("/api/logout", post_with(logout, logout_docs))
}

fn auth_routes_private() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/api/account", get_with(account, account_docs))
        .route_layer(middleware::from_fn(require_user))
}

pub fn auth_routes(_app_state: AppState) -> ApiRouter<AppState> {
    auth_routes_public().merge(auth_routes_private())
}
