use crate::domain::user::entities::Role;

pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
