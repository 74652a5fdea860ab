// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job registry operations.

use crate::MemoryStore;
use time::OffsetDateTime;
use worklink_domain::{Job, JobQuery, JobStatus, JobUpdate, NewJob};

/// Sorts jobs newest-first by creation time, ties by id ascending.
fn newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl MemoryStore {
    /// Returns the job with the given id, if present.
    #[must_use]
    pub fn job(&self, id: i64) -> Option<Job> {
        self.jobs.get(&id).cloned()
    }

    /// Returns all jobs matching the query, newest first.
    #[must_use]
    pub fn jobs(&self, query: &JobQuery) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .jobs
            .values()
            .filter(|job| query.matches(job))
            .cloned()
            .collect();
        newest_first(&mut jobs);
        jobs
    }

    /// Creates a job, assigning its id, creation timestamp, and status.
    ///
    /// Every job starts `open`; any status the caller supplied upstream is
    /// ignored by construction, since the insert payload carries none.
    pub fn create_job(&mut self, new_job: NewJob) -> Job {
        let id: i64 = Self::next_id(&mut self.job_id_counter);
        let job = Job {
            id,
            employer_id: new_job.employer_id,
            title: new_job.title,
            description: new_job.description,
            location: new_job.location,
            job_type: new_job.job_type,
            service_type: new_job.service_type,
            rate: new_job.rate,
            skills: new_job.skills,
            status: JobStatus::Open,
            created_at: OffsetDateTime::now_utc(),
        };
        self.jobs.insert(id, job.clone());
        job
    }

    /// Merges the provided fields into the stored job.
    ///
    /// Transition legality for status changes is the rule layer's
    /// responsibility; this operation stores whatever it is given.
    /// Returns the updated snapshot, or `None` if no such job exists.
    pub fn update_job(&mut self, id: i64, updates: JobUpdate) -> Option<Job> {
        let job = self.jobs.get_mut(&id)?;
        if let Some(title) = updates.title {
            job.title = title;
        }
        if let Some(description) = updates.description {
            job.description = description;
        }
        if let Some(location) = updates.location {
            job.location = location;
        }
        if let Some(job_type) = updates.job_type {
            job.job_type = job_type;
        }
        if let Some(service_type) = updates.service_type {
            job.service_type = service_type;
        }
        if let Some(rate) = updates.rate {
            job.rate = rate;
        }
        if let Some(skills) = updates.skills {
            job.skills = skills;
        }
        if let Some(status) = updates.status {
            job.status = status;
        }
        Some(job.clone())
    }

    /// Advances a job from `open` to `in_progress` if it is still open.
    ///
    /// Returns whether the transition fired, and `None` if no such job
    /// exists. Safe to call repeatedly; only the first call on an open job
    /// has any effect.
    pub fn start_job(&mut self, id: i64) -> Option<bool> {
        let job = self.jobs.get_mut(&id)?;
        Some(job.try_start())
    }

    /// Returns all jobs posted by the given employer, newest first.
    #[must_use]
    pub fn employer_jobs(&self, employer_id: i64) -> Vec<Job> {
        self.jobs(&JobQuery {
            employer_id: Some(employer_id),
            ..JobQuery::default()
        })
    }
}
