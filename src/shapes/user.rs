use sqlx::FromRow;

/// Login account. `password` holds a hash; hashing happens before it gets here.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
}
