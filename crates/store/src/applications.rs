// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application registry operations.

use crate::MemoryStore;
use time::OffsetDateTime;
use worklink_domain::{
    Application, ApplicationQuery, ApplicationStatus, ApplicationUpdate, NewApplication,
};

/// Sorts applications newest-first by creation time, ties by id ascending.
fn newest_first(applications: &mut [Application]) {
    applications.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl MemoryStore {
    /// Returns the application with the given id, if present.
    #[must_use]
    pub fn application(&self, id: i64) -> Option<Application> {
        self.applications.get(&id).cloned()
    }

    /// Returns all applications matching the query, newest first.
    #[must_use]
    pub fn applications(&self, query: &ApplicationQuery) -> Vec<Application> {
        let mut applications: Vec<Application> = self
            .applications
            .values()
            .filter(|application| query.matches(application))
            .cloned()
            .collect();
        newest_first(&mut applications);
        applications
    }

    /// Creates an application, assigning its id, timestamp, and status.
    ///
    /// Every application starts `pending`. Uniqueness of the (job, worker)
    /// pair is the rule layer's responsibility.
    pub fn create_application(&mut self, new_application: NewApplication) -> Application {
        let id: i64 = Self::next_id(&mut self.application_id_counter);
        let application = Application {
            id,
            job_id: new_application.job_id,
            worker_id: new_application.worker_id,
            cover_letter: new_application.cover_letter,
            status: ApplicationStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
        };
        self.applications.insert(id, application.clone());
        application
    }

    /// Merges the provided fields into the stored application.
    ///
    /// Transition legality is the rule layer's responsibility. Returns the
    /// updated snapshot, or `None` if no such application exists.
    pub fn update_application(
        &mut self,
        id: i64,
        updates: ApplicationUpdate,
    ) -> Option<Application> {
        let application = self.applications.get_mut(&id)?;
        if let Some(status) = updates.status {
            application.status = status;
        }
        Some(application.clone())
    }

    /// Returns all applications submitted by the given worker, newest first.
    #[must_use]
    pub fn worker_applications(&self, worker_id: i64) -> Vec<Application> {
        self.applications(&ApplicationQuery {
            worker_id: Some(worker_id),
            ..ApplicationQuery::default()
        })
    }

    /// Returns all applications for the given job, newest first.
    #[must_use]
    pub fn job_applications(&self, job_id: i64) -> Vec<Application> {
        self.applications(&ApplicationQuery {
            job_id: Some(job_id),
            ..ApplicationQuery::default()
        })
    }
}
