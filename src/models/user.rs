use serde::{Deserialize, Serialize};

/// Usuario tal y como lo serializa el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Campos editables del perfil propio. Los `None` no viajan en el PUT.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Parche de administración sobre otro usuario (rol y/o estado activo)
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct AdminUserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
