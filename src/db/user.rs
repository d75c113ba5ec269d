use crate::db::database_service::DatabaseService;
use crate::{
    types::{error::AppError, user::DBUserCreate},
    utils::password,
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

fn hash_password(plain: &str) -> Result<String, AppError> {
    password::hash(plain).map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

/// Email and username are checked separately so the caller learns which one
/// collided. `exclude` skips the row being updated.
async fn ensure_unique<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    username: &str,
    exclude: Option<i32>,
) -> Result<(), AppError> {
    let mut by_email = User::find().filter(Column::Email.eq(email));
    let mut by_username = User::find().filter(Column::Username.eq(username));
    if let Some(id) = exclude {
        by_email = by_email.filter(Column::Id.ne(id));
        by_username = by_username.filter(Column::Id.ne(id));
    }

    if by_email.count(conn).await? > 0 {
        return Err(AppError::Conflict("Email Already Taken".into()));
    }
    if by_username.count(conn).await? > 0 {
        return Err(AppError::Conflict("Username Already Taken".into()));
    }
    Ok(())
}

impl DatabaseService {
    pub async fn get_all_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let hashed = hash_password(&payload.password)?;
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        ensure_unique(&txn, &payload.email, &payload.username, None).await?;

        let user = UserActive {
            username: Set(payload.username),
            email: Set(payload.email),
            password: Set(hashed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!("created user {}", user.id);
        Ok(user)
    }

    pub async fn update_user(&self, user_id: i32, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let hashed = hash_password(&payload.password)?;
        let txn = self.database_connection.begin().await?;

        let existing = User::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        ensure_unique(&txn, &payload.email, &payload.username, Some(user_id)).await?;

        let mut am: UserActive = existing.into();
        am.username = Set(payload.username);
        am.email = Set(payload.email);
        am.password = Set(hashed);
        am.updated_at = Set(Utc::now());
        let user = am.update(&txn).await?;

        txn.commit().await?;
        info!("updated user {}", user.id);
        Ok(user)
    }

    /// Returns the number of rows removed, 0 when the user did not exist.
    pub async fn delete_user(&self, user_id: i32) -> Result<u64, AppError> {
        let res = User::delete_by_id(user_id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected > 0 {
            info!("deleted user {user_id}");
        }
        Ok(res.rows_affected)
    }

    /// Sign-in: resolve the user by email and check the password.
    /// Unknown email and wrong password are indistinguishable.
    pub async fn authenticate(&self, email: &str, plain: &str) -> Result<UserModel, AppError> {
        let user = match self.get_user_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(AppError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        match password::verify(plain, &user.password) {
            Ok(true) => Ok(user),
            Ok(false) => Err(AppError::InvalidCredentials),
            Err(e) => Err(AppError::Internal(format!("stored hash unreadable: {e}"))),
        }
    }
}
