use std::sync::Arc;
use tokio::sync::Mutex;

use crate::store::models::User;

#[derive(Debug, Default)]
struct Records {
    users: Vec<User>,
    // Last id handed out; never reused after deletions
    last_id: u64,
}

/// Process-lifetime user list, kept in insertion order.
///
/// Cloning the store yields another handle to the same records.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    records: Arc<Mutex<Records>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<User> {
        self.records.lock().await.users.clone()
    }

    /// Appends a user under the next id of the store's counter.
    pub async fn create(&self, username: String) -> User {
        let mut records = self.records.lock().await;
        records.last_id += 1;

        let user = User {
            id: records.last_id,
            username,
        };
        records.users.push(user.clone());
        user
    }

    pub async fn get(&self, id: u64) -> Option<User> {
        let records = self.records.lock().await;
        records.users.iter().find(|user| user.id == id).cloned()
    }

    /// Removes the user with `id`, returning it if it existed.
    pub async fn delete(&self, id: u64) -> Option<User> {
        let mut records = self.records.lock().await;
        let index = records.users.iter().position(|user| user.id == id)?;
        Some(records.users.remove(index))
    }

    /// Drops every record and restarts ids at 1.
    pub async fn reset(&self) {
        let mut records = self.records.lock().await;
        records.users.clear();
        records.last_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = UserStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = UserStore::new();

        let alice = store.create("alice".to_string()).await;
        let bob = store.create("bob".to_string()).await;

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(store.list().await, vec![alice, bob]);
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_allowed() {
        let store = UserStore::new();
        store.create("alice".to_string()).await;
        store.create("alice".to_string()).await;

        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let store = UserStore::new();
        let alice = store.create("alice".to_string()).await;

        assert_eq!(store.get(alice.id).await, Some(alice.clone()));
        assert_eq!(store.get(42).await, None);

        assert_eq!(store.delete(alice.id).await, Some(alice.clone()));
        assert_eq!(store.get(alice.id).await, None);
        assert_eq!(store.delete(alice.id).await, None);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = UserStore::new();
        store.create("alice".to_string()).await;
        let bob = store.create("bob".to_string()).await;

        store.delete(1).await;
        let carol = store.create("carol".to_string()).await;

        // Deleting a non-tail record must not make the next id collide with bob
        assert_eq!(carol.id, 3);
        let ids: Vec<u64> = store.list().await.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![bob.id, carol.id]);
    }

    #[tokio::test]
    async fn test_reset_clears_records_and_counter() {
        let store = UserStore::new();
        store.create("alice".to_string()).await;
        store.create("bob".to_string()).await;

        store.reset().await;
        assert!(store.list().await.is_empty());

        let user = store.create("carol".to_string()).await;
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = UserStore::new();
        let handle = store.clone();

        handle.create("alice".to_string()).await;
        assert_eq!(store.list().await.len(), 1);
    }
}
