use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::AppError;
use crate::models::{Employee, Role};
use crate::state::AppState;

/// Any roster member with a valid bearer token
pub struct AuthenticatedEmployee(pub Employee);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::MissingToken)?;

        let employee = state
            .attendance
            .employee_by_token(token)
            .await
            .ok_or(AppError::InvalidToken)?;

        Ok(Self(employee))
    }
}

/// An authenticated roster member holding the manager role. Gates the
/// reporting endpoints.
pub struct ManagerIdentity(pub Employee);

#[async_trait]
impl FromRequestParts<AppState> for ManagerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthenticatedEmployee(employee) =
            AuthenticatedEmployee::from_request_parts(parts, state).await?;

        if employee.role != Role::Manager {
            return Err(AppError::ManagerRequired);
        }

        Ok(Self(employee))
    }
}
