//! Change-request use-case service: submission and the approval trail.

use crate::model::budget::Amount;
use crate::model::change::{
    ChangeRequest, ChangeRequestComment, ChangeRequestId, ChangeRequestStatus,
    ImpactAssessment,
};
use crate::model::common::Priority;
use crate::model::project::ProjectId;
use crate::repo::change_repo::ChangeRequestRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeServiceError {
    MissingField(&'static str),
    NotFound(ChangeRequestId),
}

impl Display for ChangeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is blank: {field}"),
            Self::NotFound(id) => write!(f, "change request not found: {id}"),
        }
    }
}

impl Error for ChangeServiceError {}

impl From<RepoError> for ChangeServiceError {
    fn from(value: RepoError) -> Self {
        let RepoError::NotFound(id) = value;
        Self::NotFound(id)
    }
}

/// Input of the new-request form.
#[derive(Debug, Clone)]
pub struct NewChangeRequest {
    pub title: String,
    pub description: String,
    pub project_id: ProjectId,
    pub priority: Priority,
    pub impact_cost: Amount,
    pub impact_timeline_days: i32,
    pub impact_scope: String,
}

/// Facade over the change-request repository.
pub struct ChangeRequestService<'a> {
    repo: &'a mut ChangeRequestRepository,
}

impl<'a> ChangeRequestService<'a> {
    pub fn new(repo: &'a mut ChangeRequestRepository) -> Self {
        Self { repo }
    }

    /// Submits a request in `pending` state.
    pub fn submit(
        &mut self,
        draft: NewChangeRequest,
        requested_by: impl Into<String>,
        today: Date,
    ) -> Result<ChangeRequestId, ChangeServiceError> {
        if draft.title.trim().is_empty() {
            return Err(ChangeServiceError::MissingField("title"));
        }
        if draft.description.trim().is_empty() {
            return Err(ChangeServiceError::MissingField("description"));
        }
        Ok(self.repo.create(ChangeRequest {
            id: Uuid::new_v4(),
            project_id: draft.project_id,
            title: draft.title,
            description: draft.description,
            requested_by: requested_by.into(),
            request_date: today,
            status: ChangeRequestStatus::Pending,
            priority: draft.priority,
            impact: ImpactAssessment {
                cost: draft.impact_cost,
                timeline_days: draft.impact_timeline_days,
                scope: draft.impact_scope,
            },
            approved_by: None,
            approval_date: None,
            implementation_date: None,
            comments: Vec::new(),
        }))
    }

    /// Approves the request, stamping approver and date.
    pub fn approve(
        &mut self,
        id: ChangeRequestId,
        approver: impl Into<String>,
        today: Date,
    ) -> Result<(), ChangeServiceError> {
        let approver = approver.into();
        Ok(self.repo.update(id, |request| {
            request.status = ChangeRequestStatus::Approved;
            request.approved_by = Some(approver);
            request.approval_date = Some(today);
        })?)
    }

    /// Rejects the request; any earlier approval stamp is cleared.
    pub fn reject(&mut self, id: ChangeRequestId) -> Result<(), ChangeServiceError> {
        Ok(self.repo.update(id, |request| {
            request.status = ChangeRequestStatus::Rejected;
            request.approved_by = None;
            request.approval_date = None;
        })?)
    }

    /// Marks an approved request as implemented.
    pub fn mark_implemented(
        &mut self,
        id: ChangeRequestId,
        today: Date,
    ) -> Result<(), ChangeServiceError> {
        Ok(self.repo.update(id, |request| {
            request.status = ChangeRequestStatus::Implemented;
            request.implementation_date = Some(today);
        })?)
    }

    pub fn add_comment(
        &mut self,
        id: ChangeRequestId,
        author: impl Into<String>,
        content: impl Into<String>,
        at: OffsetDateTime,
    ) -> Result<(), ChangeServiceError> {
        let comment = ChangeRequestComment {
            id: Uuid::new_v4(),
            author: author.into(),
            content: content.into(),
            timestamp: at,
        };
        Ok(self.repo.update(id, |request| request.comments.push(comment))?)
    }
}
