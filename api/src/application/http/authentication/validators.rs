use catalog_core::domain::{
    authentication::value_objects::{LoginInput, RegisterInput},
    user::entities::Role,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 1, max = 255, message = "The name must be between 1 and 255 characters."))]
    pub name: String,

    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 8, message = "The password must be at least 8 characters."))]
    pub password: String,

    /// Honored only when an admin is the caller.
    #[serde(default)]
    pub role: Option<Role>,
}

impl From<RegisterValidator> for RegisterInput {
    fn from(payload: RegisterValidator) -> Self {
        RegisterInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            role: payload.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

impl From<LoginValidator> for LoginInput {
    fn from(payload: LoginValidator) -> Self {
        LoginInput {
            email: payload.email,
            password: payload.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_register_rules() {
        let payload: RegisterValidator = serde_json::from_value(json!({
            "name": "",
            "email": "not-an-email",
            "password": "short"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_register_role_is_optional() {
        let payload: RegisterValidator = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "correct horse",
            "role": "admin"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(RegisterInput::from(payload).role, Some(Role::Admin));
    }

    #[test]
    fn test_unknown_role_does_not_deserialize() {
        let result = serde_json::from_value::<RegisterValidator>(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "correct horse",
            "role": "owner"
        }));

        assert!(result.is_err());
    }
}
