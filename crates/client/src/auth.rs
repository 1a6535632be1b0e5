//! Authentication payloads and pre-submit validation.
//!
//! Forms hold raw screen state; `validate()` is the only way to obtain a
//! request payload, so bad input is rejected before any network call.

use serde::{Deserialize, Serialize};

use stockline_core::{EntityId, UserId, ValidationError, form};

/// Minimum accepted password length at registration.
const MIN_PASSWORD_LEN: usize = 6;

/// Logged-in user as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_role() -> String {
    "user".to_string()
}

fn default_true() -> bool {
    true
}

/// The tenant the user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Successful login payload. The client does not store the token itself;
/// callers opt in via `ApiClient::set_credential`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
    pub organization: Organization,
}

/// Successful registration payload (no token; registration is followed by a
/// normal login).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
    pub organization: Organization,
}

/// `/auth/me` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub user: User,
    pub organization: Organization,
}

/// Raw login form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields are required; the password is sent exactly as typed.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let username = form::require_text("username", &self.username)?;
        if self.password.is_empty() {
            return Err(ValidationError::new("password", "is required"));
        }
        Ok(LoginRequest {
            username,
            password: self.password.clone(),
        })
    }
}

/// Typed login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Raw registration form state: a new organization plus its admin user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub organization_name: String,
    pub organization_email: String,
    pub organization_phone: String,
    pub organization_address: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterForm {
    /// Check required fields, then that the password matches its
    /// confirmation, then the minimum length. The first failure wins and
    /// blocks submission entirely.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let organization_name = form::require_text("organization_name", &self.organization_name)?;
        let organization_email =
            form::require_text("organization_email", &self.organization_email)?;
        let username = form::require_text("username", &self.username)?;
        let email = form::require_text("email", &self.email)?;
        let first_name = form::require_text("first_name", &self.first_name)?;
        let last_name = form::require_text("last_name", &self.last_name)?;

        if self.password.is_empty() {
            return Err(ValidationError::new("password", "is required"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::new("confirm_password", "passwords do not match"));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::new(
                "password",
                "must be at least 6 characters",
            ));
        }

        Ok(RegisterRequest {
            organization_name,
            organization_email,
            organization_phone: form::optional_text(&self.organization_phone),
            organization_address: form::optional_text(&self.organization_address),
            username,
            email,
            password: self.password.clone(),
            first_name,
            last_name,
        })
    }
}

/// Typed registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub organization_name: String,
    pub organization_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_address: Option<String>,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegisterForm {
        RegisterForm {
            organization_name: "Acme".into(),
            organization_email: "ops@acme.test".into(),
            username: "sam".into(),
            email: "sam@acme.test".into(),
            password: "pw123456".into(),
            confirm_password: "pw123456".into(),
            first_name: "Sam".into(),
            last_name: "Reyes".into(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn login_form_requires_both_fields() {
        let form = LoginForm {
            username: "sam".into(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().field, "password");

        let form = LoginForm {
            username: "  ".into(),
            password: "pw".into(),
        };
        assert_eq!(form.validate().unwrap_err().field, "username");
    }

    #[test]
    fn registration_validates_into_typed_payload() {
        let payload = filled_form().validate().unwrap();
        assert_eq!(payload.organization_name, "Acme");
        assert_eq!(payload.organization_phone, None);
    }

    #[test]
    fn password_mismatch_blocks_submission() {
        let mut form = filled_form();
        form.confirm_password = "different".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "confirm_password");
    }

    #[test]
    fn short_password_blocks_submission() {
        let mut form = filled_form();
        form.password = "pw1".into();
        form.confirm_password = "pw1".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "password");
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        let mut form = filled_form();
        form.password = "pw1".into();
        form.confirm_password = "pw2".into();
        assert_eq!(form.validate().unwrap_err().field, "confirm_password");
    }
}
