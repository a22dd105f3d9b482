//! Authentication service with signup, login, and token issuance

use std::sync::Arc;
use tracing::{info, warn};
use validator::ValidateEmail;

use wheelbase_security::jwt::JwtService;
use wheelbase_security::password::PasswordService;
use wheelbase_shared::constants::MIN_PASSWORD_LENGTH;

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use crate::repositories::UserRepository;

/// Authentication service for the signup/login flow
pub struct AuthService<R: UserRepository> {
    user_repo: Arc<R>,
    jwt_secret: String,
    token_expiry: i64,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(user_repo: Arc<R>, jwt_secret: String, token_expiry: i64) -> Self {
        Self {
            user_repo,
            jwt_secret,
            token_expiry,
        }
    }

    /// Register a new user. Signup does NOT log the user in; no token is
    /// issued here.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupResult, DomainError> {
        info!("Signup attempt for email: {}", email);

        // 1. Validate input
        if name.trim().is_empty() || !email.validate_email() || password.len() < MIN_PASSWORD_LENGTH
        {
            warn!("Signup failed: invalid input for: {}", email);
            return Err(DomainError::ValidationError("Invalid input.".to_string()));
        }

        // 2. Check if email already exists
        if self.user_repo.find_by_email(email).await?.is_some() {
            warn!("Signup failed: email already exists: {}", email);
            return Err(DomainError::DuplicateEmail);
        }

        // 3. Hash password
        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        // 4. Save to the credential store. A concurrent signup with the same
        //    email can pass the check above; the unique index maps that
        //    insert back to DuplicateEmail.
        let user = self
            .user_repo
            .create(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!("Signup successful for: {}", email);

        Ok(SignupResult {
            user: UserInfo::from(&user),
        })
    }

    /// Login with email and password. On success mints a session token
    /// embedding the user's identity.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for email: {}", email);

        // 1. Validate input
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::ValidationError(
                "All fields are required.".to_string(),
            ));
        }

        // 2. Find user by email. Unknown email and wrong password must be
        //    indistinguishable to the caller.
        let user = self.user_repo.find_by_email(email).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", email);
            DomainError::InvalidCredentials
        })?;

        // 3. Verify password
        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", email);
            return Err(DomainError::InvalidCredentials);
        }

        // 4. Mint session token
        let jwt_service = JwtService::new(self.jwt_secret.clone(), self.token_expiry);
        let token = jwt_service
            .issue(user.id, &user.email)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Login successful for: {}", email);

        Ok(LoginResult {
            user: UserInfo::from(&user),
            token,
        })
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserInfo,
    pub token: String,
}

/// Result of successful signup
#[derive(Debug, Clone)]
pub struct SignupResult {
    pub user: UserInfo,
}

/// User info returned in auth responses
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn stored_user(id: i32, email: &str, password: &str) -> User {
        User {
            id,
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: PasswordService::hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn service(repo: MockUserRepository) -> AuthService<MockUserRepository> {
        AuthService::new(Arc::new(repo), "test-secret".to_string(), 3600)
    }

    #[tokio::test]
    async fn signup_succeeds_for_unused_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@x.com"))
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u| u.email == "a@x.com" && u.name == "Alice" && u.password_hash != "secret123")
            .returning(|u| {
                Ok(User {
                    id: 1,
                    name: u.name.clone(),
                    email: u.email.clone(),
                    password_hash: u.password_hash.clone(),
                    created_at: Utc::now(),
                })
            });

        let result = service(repo)
            .signup("Alice", "a@x.com", "secret123")
            .await
            .unwrap();
        assert_eq!(result.user.email, "a@x.com");
    }

    #[tokio::test]
    async fn signup_rejects_duplicate_email_regardless_of_password() {
        for password in ["secret123", "another-password"] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email()
                .returning(|email| Ok(Some(stored_user(1, email, "whatever-1"))));

            let err = service(repo)
                .signup("Alice", "a@x.com", password)
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::DuplicateEmail));
        }
    }

    #[tokio::test]
    async fn signup_rejects_invalid_input() {
        let cases = [
            ("", "a@x.com", "secret123"),
            ("Alice", "not-an-email", "secret123"),
            ("Alice", "a@x.com", "short"),
        ];
        for (name, email, password) in cases {
            let repo = MockUserRepository::new();
            let err = service(repo).signup(name, email, password).await.unwrap_err();
            match err {
                DomainError::ValidationError(msg) => assert_eq!(msg, "Invalid input."),
                other => panic!("expected ValidationError, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn login_succeeds_and_token_carries_identity() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("a@x.com"))
            .returning(|email| Ok(Some(stored_user(7, email, "secret123"))));

        let result = service(repo).login("a@x.com", "secret123").await.unwrap();
        assert_eq!(result.user.id, 7);

        let claims = JwtService::new("test-secret".to_string(), 3600)
            .verify(&result.token)
            .unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        // Unknown email
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        let unknown = service(repo)
            .login("nobody@x.com", "secret123")
            .await
            .unwrap_err();

        // Wrong password
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(1, email, "secret123"))));
        let wrong = service(repo)
            .login("a@x.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(unknown.to_string(), "Invalid credentials.");
    }

    #[tokio::test]
    async fn login_rejects_missing_fields() {
        let repo = MockUserRepository::new();
        let err = service(repo).login("", "").await.unwrap_err();
        match err {
            DomainError::ValidationError(msg) => assert_eq!(msg, "All fields are required."),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
