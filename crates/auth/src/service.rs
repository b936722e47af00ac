//! Registration and login

use minibank_core::ids;
use minibank_ledger::User;
use minibank_store::SharedStore;

use crate::error::AuthError;
use crate::password;
use crate::validate;

/// Authentication service over the shared store's user index.
pub struct AuthService {
    store: SharedStore,
}

impl AuthService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// Validates every field, refuses duplicate usernames, hashes the
    /// password and persists the user. On any failure nothing is stored.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        full_name: &str,
        email: &str,
    ) -> Result<User, AuthError> {
        if !validate::is_valid_username(username) {
            return Err(AuthError::InvalidUsername);
        }
        if !validate::is_valid_password(password) {
            return Err(AuthError::InvalidPassword);
        }
        if !validate::is_valid_full_name(full_name) {
            return Err(AuthError::InvalidFullName);
        }
        if !validate::is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let mut store = self.store.lock().expect("store lock poisoned");
        if store.users.username_exists(username) {
            return Err(AuthError::UsernameTaken(username.to_owned()));
        }

        let user = User::new(
            ids::user_id(),
            username,
            password::hash_password(password),
            full_name,
            email,
        );
        store.users.save(user.clone())?;
        tracing::debug!(user_id = user.user_id(), username, "registered user");
        Ok(user)
    }

    /// Verify credentials and return the user.
    ///
    /// A missing user and a wrong password are indistinguishable to the
    /// caller.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if validate::is_blank(username) || validate::is_blank(password) {
            return Err(AuthError::InvalidCredentials);
        }

        let store = self.store.lock().expect("store lock poisoned");
        let user = store
            .users
            .find_by_username(username)
            .ok_or(AuthError::InvalidCredentials)?;

        if password::verify_password(password, user.password_hash()) {
            Ok(user.clone())
        } else {
            tracing::warn!(username, "failed login attempt");
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn user_by_id(&self, user_id: &str) -> Option<User> {
        let store = self.store.lock().expect("store lock poisoned");
        store.users.find_by_id(user_id).cloned()
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        let store = self.store.lock().expect("store lock poisoned");
        store.users.find_by_username(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibank_store::LedgerStore;

    fn service() -> AuthService {
        AuthService::new(LedgerStore::shared())
    }

    #[test]
    fn register_then_login() {
        let auth = service();
        let user = auth
            .register("alice_01", "hunter22", "Alice Smith", "alice@example.com")
            .unwrap();
        assert!(user.user_id().starts_with("USER_"));
        // The stored hash is not the plaintext.
        assert_ne!(user.password_hash(), "hunter22");

        let logged_in = auth.login("alice_01", "hunter22").unwrap();
        assert_eq!(logged_in.user_id(), user.user_id());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let auth = service();
        auth.register("alice_01", "hunter22", "Alice Smith", "alice@example.com")
            .unwrap();
        assert!(matches!(
            auth.login("alice_01", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody99", "hunter22"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let auth = service();
        auth.register("alice_01", "hunter22", "Alice Smith", "alice@example.com")
            .unwrap();
        assert!(matches!(
            auth.register("alice_01", "other_pw", "Other Alice", "a2@example.com"),
            Err(AuthError::UsernameTaken(_))
        ));
    }

    #[test]
    fn invalid_fields_are_rejected_before_touching_the_store() {
        let auth = service();
        assert!(matches!(
            auth.register("ab", "hunter22", "Alice Smith", "alice@example.com"),
            Err(AuthError::InvalidUsername)
        ));
        assert!(matches!(
            auth.register("alice_01", "short", "Alice Smith", "alice@example.com"),
            Err(AuthError::InvalidPassword)
        ));
        assert!(matches!(
            auth.register("alice_01", "hunter22", "Alice Smith", "not-an-email"),
            Err(AuthError::InvalidEmail)
        ));
        assert!(auth.user_by_username("alice_01").is_none());
    }
}
