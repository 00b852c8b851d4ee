//! Admin-console state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console gates itself on a role check performed after mount, which is
//! an advisory UI affordance only; the backend's row-level rules are the real
//! authorization boundary. User rows here are seeded mock data — operator
//! actions against them mutate this list and nothing else. Only the pricing
//! editor (`plans`) and the site-settings toggles touch anything beyond local
//! state.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::SiteSettings;

/// One row in the admin user table (mock data).
#[derive(Clone, Debug, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub plan: String,
    pub is_active: bool,
    /// ISO 8601 date the account was created.
    pub joined: String,
}

/// Admin console state: gate, user table, search, operator toggles.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    /// `None` until the post-mount role check settles.
    pub authorized: Option<bool>,
    pub users: Vec<AdminUser>,
    pub search: String,
    pub site: SiteSettings,
    pub site_saving: bool,
}

impl AdminState {
    /// Seed the mock user table shown in the console.
    pub fn seed_mock_users(&mut self) {
        if !self.users.is_empty() {
            return;
        }
        self.users = vec![
            mock_user("u-1001", "ada", "ada@example.com", "pro", true, "2025-11-02"),
            mock_user("u-1002", "grace", "grace@example.com", "free", true, "2025-12-18"),
            mock_user("u-1003", "linus", "linus@example.com", "team", true, "2026-01-05"),
            mock_user("u-1004", "margaret", "margaret@example.com", "free", false, "2026-02-21"),
            mock_user("u-1005", "dennis", "dennis@example.com", "pro", true, "2026-03-14"),
        ];
    }

    /// Rows matching the current search, by username or email substring.
    #[must_use]
    pub fn visible_users(&self) -> Vec<&AdminUser> {
        let needle = self.search.trim().to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || u.username.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Flip a user's active flag (mock rows only). Returns whether a row matched.
    pub fn toggle_user_active(&mut self, id: &str) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_active = !user.is_active;
                true
            }
            None => false,
        }
    }

    /// Remove a user row (mock rows only). Returns whether a row matched.
    pub fn delete_user(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}

fn mock_user(id: &str, username: &str, email: &str, plan: &str, is_active: bool, joined: &str) -> AdminUser {
    AdminUser {
        id: id.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        plan: plan.to_owned(),
        is_active,
        joined: joined.to_owned(),
    }
}
