//! User index - user id to user, with a derived username lookup

use minibank_ledger::User;
use std::collections::HashMap;

use crate::error::StoreError;

/// Users keyed by user id. Username lookups scan the map; user counts
/// stay far too small for that to matter here.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: HashMap<String, User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Fails if the id is already taken.
    pub fn save(&mut self, user: User) -> Result<(), StoreError> {
        if self.users.contains_key(user.user_id()) {
            return Err(StoreError::DuplicateUser(user.user_id().to_owned()));
        }
        self.users.insert(user.user_id().to_owned(), user);
        Ok(())
    }

    pub fn find_by_id(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username() == username)
    }

    /// Replace an existing user. Fails if the id is absent.
    pub fn update(&mut self, user: User) -> Result<(), StoreError> {
        if !self.users.contains_key(user.user_id()) {
            return Err(StoreError::UserNotFound(user.user_id().to_owned()));
        }
        self.users.insert(user.user_id().to_owned(), user);
        Ok(())
    }

    pub fn delete(&mut self, user_id: &str) -> Result<(), StoreError> {
        self.users
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_owned()))
    }

    pub fn exists(&self, user_id: &str) -> bool {
        self.users.contains_key(user_id)
    }

    pub fn username_exists(&self, username: &str) -> bool {
        self.users.values().any(|u| u.username() == username)
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn clear(&mut self) {
        self.users.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str) -> User {
        User::new(id, username, "hash", "Some Name", "user@example.com")
    }

    #[test]
    fn save_and_lookup_by_id_and_username() {
        let mut repo = UserRepository::new();
        repo.save(user("USER_1", "alice")).unwrap();
        assert!(repo.exists("USER_1"));
        assert!(repo.username_exists("alice"));
        assert_eq!(
            repo.find_by_username("alice").unwrap().user_id(),
            "USER_1"
        );
        assert!(repo.find_by_username("bob").is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut repo = UserRepository::new();
        repo.save(user("USER_1", "alice")).unwrap();
        assert!(matches!(
            repo.save(user("USER_1", "other")),
            Err(StoreError::DuplicateUser(_))
        ));
        // Original survives.
        assert_eq!(repo.find_by_id("USER_1").unwrap().username(), "alice");
    }

    #[test]
    fn update_requires_existing_id() {
        let mut repo = UserRepository::new();
        assert!(repo.update(user("USER_1", "alice")).is_err());
        repo.save(user("USER_1", "alice")).unwrap();
        let mut updated = user("USER_1", "alice");
        updated.set_email("new@example.com");
        repo.update(updated).unwrap();
        assert_eq!(
            repo.find_by_id("USER_1").unwrap().email(),
            "new@example.com"
        );
    }

    #[test]
    fn delete_does_not_cascade() {
        // Deleting a user only touches the user index; any accounts it
        // owned stay wherever they are stored.
        let mut repo = UserRepository::new();
        let mut u = user("USER_1", "alice");
        u.add_account("ACC1");
        repo.save(u).unwrap();
        repo.delete("USER_1").unwrap();
        assert_eq!(repo.count(), 0);
    }
}
