// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User registry operations.

use crate::MemoryStore;
use worklink_domain::{NewUser, User, UserRole, UserUpdate};

impl MemoryStore {
    /// Returns the user with the given id, if present.
    #[must_use]
    pub fn user(&self, id: i64) -> Option<User> {
        self.users.get(&id).cloned()
    }

    /// Returns the user with the given username, if present.
    ///
    /// Usernames are unique; this is the lookup the identity seam and the
    /// registration duplicate check rely on.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Creates a user, assigning its id and derived-field defaults.
    ///
    /// A new user has no rating and a review count of zero; both are
    /// recomputed only as a side effect of review creation.
    pub fn create_user(&mut self, new_user: NewUser) -> User {
        let id: i64 = Self::next_id(&mut self.user_id_counter);
        let user = User {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            email: new_user.email,
            full_name: new_user.full_name,
            role: new_user.role,
            location: new_user.location,
            bio: new_user.bio,
            phone: new_user.phone,
            skills: new_user.skills,
            avatar: new_user.avatar,
            rating: None,
            review_count: 0,
            title: new_user.title,
        };
        self.users.insert(id, user.clone());
        user
    }

    /// Merges the provided fields into the stored user.
    ///
    /// Returns the updated snapshot, or `None` if no such user exists.
    pub fn update_user(&mut self, id: i64, updates: UserUpdate) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        if let Some(email) = updates.email {
            user.email = email;
        }
        if let Some(full_name) = updates.full_name {
            user.full_name = full_name;
        }
        if let Some(location) = updates.location {
            user.location = Some(location);
        }
        if let Some(bio) = updates.bio {
            user.bio = Some(bio);
        }
        if let Some(phone) = updates.phone {
            user.phone = Some(phone);
        }
        if let Some(skills) = updates.skills {
            user.skills = skills;
        }
        if let Some(avatar) = updates.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(title) = updates.title {
            user.title = Some(title);
        }
        Some(user.clone())
    }

    /// Returns all users with the worker role, in id order.
    #[must_use]
    pub fn workers(&self) -> Vec<User> {
        self.users
            .values()
            .filter(|user| user.role == UserRole::Worker)
            .cloned()
            .collect()
    }

    /// Returns up to `limit` workers ordered by rating, best first.
    ///
    /// Workers without a rating sort as rating 0; ties break by id
    /// ascending (insertion order).
    #[must_use]
    pub fn top_rated_workers(&self, limit: usize) -> Vec<User> {
        let mut workers: Vec<User> = self.workers();
        workers.sort_by(|a, b| {
            b.rating
                .unwrap_or(0)
                .cmp(&a.rating.unwrap_or(0))
                .then_with(|| a.id.cmp(&b.id))
        });
        workers.truncate(limit);
        workers
    }
}
