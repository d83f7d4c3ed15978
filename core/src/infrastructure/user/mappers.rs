use chrono::{TimeZone, Utc};

use crate::domain::user::entities::{User, UserCredentials};
use crate::entity::users::Model as UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            // the column is constrained to known roles; anything else gets no privileges
            role: model.role.parse().unwrap_or_default(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<UserModel> for UserCredentials {
    fn from(model: UserModel) -> Self {
        let password_hash = model.password.clone();
        UserCredentials {
            user: User::from(model),
            password_hash,
        }
    }
}
