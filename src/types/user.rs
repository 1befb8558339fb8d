use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RSignup {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_staff: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
}

#[derive(Serialize, Deserialize)]
pub struct UserRes {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserRes {
    fn from(u: entity::user::Model) -> Self {
        UserRes {
            id: u.id,
            username: u.username,
            email: u.email,
            is_staff: u.is_staff,
            is_active: u.is_active,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
}
