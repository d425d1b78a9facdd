//! Registration Handler
//!
//! Implements `POST /auth/register`.
//!
//! # Registration Process
//!
//! 1. Collect the multipart text fields and the optional `picture` file
//! 2. Validate the profile fields
//! 3. Reject duplicate emails
//! 4. Hash the password with bcrypt
//! 5. Store the picture (if any) under a generated asset name
//! 6. Create the user with zeroed counters and an empty friend list
//!
//! # Validation
//!
//! - `firstName`, `lastName`, `email` and `password` are required
//! - Email must contain '@' (basic validation)
//! - Password must be at least 8 characters long
//! - Email must be unique

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::body::Bytes;
use axum::response::Json;
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::handlers::types::UserView;
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::uploads;

/// Profile fields collected from the multipart body.
#[derive(Debug, Default)]
struct RegisterForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    location: Option<String>,
    occupation: Option<String>,
}

/// Registration handler.
///
/// Consumes a multipart body with the profile text fields and an optional
/// `picture` file field. Responds `201` with the public user view; the
/// password never appears in any response field.
pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let mut form = RegisterForm::default();
    let mut picture: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "firstName" => form.first_name = field.text().await?,
            "lastName" => form.last_name = field.text().await?,
            "email" => form.email = field.text().await?,
            "password" => form.password = field.text().await?,
            "location" => form.location = non_empty(field.text().await?),
            "occupation" => form.occupation = non_empty(field.text().await?),
            "picture" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let data = field.bytes().await?;
                if !file_name.is_empty() && !data.is_empty() {
                    picture = Some((file_name, data));
                }
            }
            // Unknown fields are drained and ignored.
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    validate(&form)?;

    tracing::info!("Registration request for {}", form.email);

    if get_user_by_email(&state.pool, &form.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", form.email);
        return Err(ApiError::Validation("email already registered".to_string()));
    }

    let password_hash = hash(&form.password, DEFAULT_COST)?;

    let picture_path = match picture {
        Some((file_name, data)) => {
            Some(uploads::store_picture(&state.assets_dir, &file_name, &data).await?)
        }
        None => None,
    };

    let user = create_user(
        &state.pool,
        NewUser {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password_hash,
            picture_path,
            location: form.location,
            occupation: form.occupation,
        },
    )
    .await
    .map_err(|e| {
        // UNIQUE constraint backstop for a registration racing the
        // duplicate check above.
        if e.to_string().to_lowercase().contains("unique") {
            ApiError::Validation("email already registered".to_string())
        } else {
            ApiError::Database(e)
        }
    })?;

    tracing::info!("User created: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, Json(UserView::from_user(user, Vec::new()))))
}

fn validate(form: &RegisterForm) -> Result<(), ApiError> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err(ApiError::Validation("first and last name are required".to_string()));
    }
    if !form.email.contains('@') {
        return Err(ApiError::Validation("invalid email format".to_string()));
    }
    if form.password.len() < 8 {
        return Err(ApiError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "password123".to_string(),
            location: None,
            occupation: None,
        }
    }

    #[test]
    fn test_validate_accepts_valid_form() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_name() {
        let mut form = valid_form();
        form.first_name = "  ".to_string();
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let mut form = valid_form();
        form.password = "short".to_string();
        assert!(validate(&form).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("".to_string()), None);
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("Paris".to_string()), Some("Paris".to_string()));
    }
}
