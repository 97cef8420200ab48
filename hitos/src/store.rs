use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::instrument;

use crate::{
    seed_milestones, Milestone, MilestoneId, MilestoneUpdate, ProjectInfo, SettingsError,
    StoreError,
};

/// Owns the ordered milestone catalogue and the project configuration.
///
/// Records are only ever edited in place: there is no insertion, deletion or
/// undo.
#[derive(Debug, Clone)]
pub struct MilestoneStore {
    milestones: Vec<Milestone>,
    project: ProjectInfo,
}

impl MilestoneStore {
    pub fn new(project: ProjectInfo, milestones: Vec<Milestone>) -> Self {
        Self {
            milestones,
            project,
        }
    }

    /// Store holding the Icon Bay Torres catalogue.
    pub fn seeded(project: ProjectInfo) -> Self {
        let milestones = seed_milestones();
        tracing::debug!(count = milestones.len(), "seeded milestone store");
        Self::new(project, milestones)
    }

    /// All milestones in seed order.
    pub fn get_all(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn get(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    pub fn project_info(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn set_project_info(&mut self, project: ProjectInfo) -> Result<(), SettingsError> {
        project.validate()?;
        self.project = project;
        Ok(())
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for milestone in &self.milestones {
            if !categories.contains(&milestone.category.as_str()) {
                categories.push(&milestone.category);
            }
        }
        categories
    }

    /// Replaces the editable fields of milestone `id`.
    ///
    /// The whole update is validated against the project duration before
    /// anything is written, so a rejected update leaves the record untouched.
    #[instrument(skip(self, update))]
    pub fn update(
        &mut self,
        id: MilestoneId,
        update: MilestoneUpdate,
    ) -> Result<&Milestone, StoreError> {
        let duration_months = self.project.duration_months;
        let Some(milestone) = self.milestones.iter_mut().find(|m| m.id == id) else {
            tracing::warn!("update rejected: unknown milestone");
            return Err(StoreError::NotFound(id));
        };

        if let Err(err) = update.validate(duration_months) {
            tracing::warn!(error = %err, "update rejected");
            return Err(err.into());
        }

        milestone.apply(update);
        tracing::debug!(
            progress = milestone.progress_percent,
            actual_month = ?milestone.actual_month,
            "milestone updated"
        );
        Ok(milestone)
    }
}

/// Cloneable handle to one store shared between sessions.
///
/// Every access goes through a single mutex, so concurrent updates to the
/// same milestone are last-write-wins.
#[derive(Debug, Clone)]
pub struct SharedMilestoneStore {
    store: Arc<Mutex<MilestoneStore>>,
}

impl SharedMilestoneStore {
    pub fn new(store: MilestoneStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Point-in-time copy for rendering and metrics.
    pub fn snapshot(&self) -> MilestoneStore {
        self.lock().clone()
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        self.lock().get_all().to_vec()
    }

    pub fn project_info(&self) -> ProjectInfo {
        self.lock().project_info().clone()
    }

    pub fn set_project_info(&self, project: ProjectInfo) -> Result<(), SettingsError> {
        self.lock().set_project_info(project)
    }

    pub fn update(&self, id: MilestoneId, update: MilestoneUpdate) -> Result<Milestone, StoreError> {
        self.lock().update(id, update).cloned()
    }

    // Updates validate before writing any field, so a poisoned store is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, MilestoneStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
