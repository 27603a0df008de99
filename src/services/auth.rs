//! Authentication service: logins, token issuing and password management

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::{AuthConfig, BootstrapAdminConfig},
    error::{AppError, AppResult},
    models::{
        admin::{Admin, CreateAdmin},
        user::{normalize_email, AccountKind, ChangePassword, Role, User, UserClaims},
    },
    repository::Repository,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Hash a password with a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored Argon2 hash.
/// A stored value that is not a PHC hash string never matches.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password is not a valid hash: {}", e);
            return Ok(false);
        }
    };
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Outcome of the per-request account lookup
fn check_account_status(active: Option<bool>) -> AppResult<()> {
    match active {
        Some(true) => Ok(()),
        Some(false) => Err(AppError::Authentication("Account is deactivated".to_string())),
        None => Err(AppError::Authentication("Account no longer exists".to_string())),
    }
}

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a faculty member by e-mail and return a JWT token
    pub async fn authenticate_faculty(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let email = normalize_email(email);
        let user = self
            .repository
            .users
            .get_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %email, "Faculty login rejected: unknown e-mail");
                AppError::Authentication(INVALID_CREDENTIALS.to_string())
            })?;

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!(email = %email, "Faculty login rejected: wrong password");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            tracing::warn!(email = %email, "Faculty login rejected: account deactivated");
            return Err(AppError::Authentication("Account is deactivated".to_string()));
        }

        self.repository.users.touch_last_login(user.id).await?;

        let token = self.issue_token(user.id, &user.email, &user.name, AccountKind::Faculty, user.role)?;
        tracing::info!(user_id = %user.id, "Faculty logged in");

        Ok((token, user))
    }

    /// Authenticate an administrator by e-mail and return a JWT token
    pub async fn authenticate_admin(&self, email: &str, password: &str) -> AppResult<(String, Admin)> {
        let email = normalize_email(email);
        let admin = self
            .repository
            .admins
            .get_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %email, "Admin login rejected: unknown e-mail");
                AppError::Authentication(INVALID_CREDENTIALS.to_string())
            })?;

        if !verify_password(password, &admin.password_hash)? {
            tracing::warn!(email = %email, "Admin login rejected: wrong password");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        if !admin.is_active {
            tracing::warn!(email = %email, "Admin login rejected: account deactivated");
            return Err(AppError::Authentication("Account is deactivated".to_string()));
        }

        self.repository.admins.touch_last_login(admin.id).await?;

        let token = self.issue_token(admin.id, &admin.email, &admin.name, AccountKind::Admin, Role::Admin)?;
        tracing::info!(admin_id = %admin.id, "Admin logged in");

        Ok((token, admin))
    }

    /// Reject tokens whose account has been deactivated or removed since they were issued
    pub async fn ensure_active(&self, claims: &UserClaims) -> AppResult<()> {
        let active = match claims.account {
            AccountKind::Faculty => self.repository.users.is_active(claims.sub).await?,
            AccountKind::Admin => self.repository.admins.is_active(claims.sub).await?,
        };
        let status = check_account_status(active);
        if status.is_err() {
            tracing::warn!(account_id = %claims.sub, "Token rejected: account inactive");
        }
        status
    }

    /// Sign a token for an identity
    pub fn issue_token(
        &self,
        id: Uuid,
        email: &str,
        name: &str,
        account: AccountKind,
        role: Role,
    ) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: id,
            email: email.to_string(),
            name: name.to_string(),
            account,
            role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Change the password of a logged-in faculty member
    pub async fn change_password(&self, user_id: Uuid, data: &ChangePassword) -> AppResult<()> {
        let user = self.repository.users.get_by_id(user_id).await?;

        if !verify_password(&data.current_password, &user.password_hash)? {
            return Err(AppError::Authentication("Current password is incorrect".to_string()));
        }

        let new_hash = hash_password(&data.new_password)?;
        self.repository.users.update_password(user_id, &new_hash).await?;
        tracing::info!(user_id = %user_id, "Password changed");

        Ok(())
    }

    /// Create the configured administrator unless an admin with that e-mail exists.
    /// Returns whether an account was created.
    pub async fn ensure_bootstrap_admin(&self, bootstrap: &BootstrapAdminConfig) -> AppResult<bool> {
        let email = normalize_email(&bootstrap.email);
        if self.repository.admins.get_by_email(&email).await?.is_some() {
            return Ok(false);
        }

        let data = CreateAdmin {
            admin_id: None,
            name: bootstrap.name.clone(),
            email: email.clone(),
            password: bootstrap.password.clone(),
            position: Some("Administrator".to_string()),
            branch: None,
        };
        let password_hash = hash_password(&data.password)?;
        self.repository.admins.create(&data, &email, &password_hash).await?;
        tracing::info!(email = %email, "Bootstrap administrator created");

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("s3cret!", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a).unwrap());
        assert!(verify_password("same", &b).unwrap());
    }

    #[test]
    fn test_non_argon2_stored_value_does_not_match() {
        assert!(!verify_password("admin123", "admin123").unwrap());
        assert!(!verify_password("", "").unwrap());
    }

    #[test]
    fn test_account_status() {
        assert!(check_account_status(Some(true)).is_ok());
        assert!(matches!(check_account_status(Some(false)), Err(AppError::Authentication(_))));
        assert!(matches!(check_account_status(None), Err(AppError::Authentication(_))));
    }
}
