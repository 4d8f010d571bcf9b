//! Filesystem rider profile repository.
//!
//! One JSON document per submission, grouped by rider:
//! `{base_dir}/profiles/{user_id}/{submission_id}.json`

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, UserId};
use crate::domain::questionnaire::ProfileSubmission;
use crate::ports::RiderProfileRepository;

/// JSON-file-backed repository rooted at a base directory.
pub struct FsRiderProfileRepository {
    base_dir: PathBuf,
}

impl FsRiderProfileRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join("profiles")
    }

    fn user_dir(&self, user_id: &UserId) -> PathBuf {
        self.profiles_dir().join(encode_user_dir(user_id))
    }

    fn file_path(&self, submission: &ProfileSubmission) -> PathBuf {
        self.user_dir(&submission.user_id)
            .join(format!("{}.json", submission.id))
    }

    async fn read_submission(path: &Path) -> Result<ProfileSubmission, DomainError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| storage_error("Failed to read submission", path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| storage_error("Corrupt submission file", path, e))
    }

    /// Every submission stored under `dir`, oldest first.
    async fn read_dir_submissions(dir: &Path) -> Result<Vec<ProfileSubmission>, DomainError> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("Failed to list directory", dir, e)),
        };

        let mut submissions = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_error("Failed to list directory", dir, e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                submissions.push(Self::read_submission(&path).await?);
            }
        }
        submissions.sort_by_key(|s| s.submitted_at);
        Ok(submissions)
    }
}

/// Directory name for a rider.
///
/// User ids come from outside, so every byte outside `[A-Za-z0-9-_@]` is
/// percent-encoded. `%` and `.` are always encoded: the mapping stays
/// injective and no id can become `.`, `..` or a path separator.
fn encode_user_dir(user_id: &UserId) -> String {
    let mut name = String::with_capacity(user_id.as_str().len());
    for byte in user_id.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'@') {
            name.push(char::from(byte));
        } else {
            name.push_str(&format!("%{:02X}", byte));
        }
    }
    name
}

fn storage_error(context: &str, path: &Path, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("{}: {}", context, err))
        .with_detail("path", path.display().to_string())
}

#[async_trait]
impl RiderProfileRepository for FsRiderProfileRepository {
    async fn save(&self, submission: &ProfileSubmission) -> Result<(), DomainError> {
        let file_path = self.file_path(submission);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("Failed to create directory", parent, e))?;
        }

        let content = serde_json::to_string_pretty(submission)
            .map_err(|e| storage_error("Failed to serialize submission", &file_path, e))?;

        // Write to a temporary file and rename so readers never see a partial document
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| storage_error("Failed to write temporary file", &temp_path, e))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| storage_error("Failed to rename file", &file_path, e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<ProfileSubmission>, DomainError> {
        let root = self.profiles_dir();
        let mut users = match fs::read_dir(&root).await {
            Ok(users) => users,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("Failed to list directory", &root, e)),
        };

        let file_name = format!("{}.json", id);
        while let Some(user_dir) = users
            .next_entry()
            .await
            .map_err(|e| storage_error("Failed to list directory", &root, e))?
        {
            let candidate = user_dir.path().join(&file_name);
            let exists = fs::try_exists(&candidate)
                .await
                .map_err(|e| storage_error("Failed to check submission file", &candidate, e))?;
            if exists {
                return Self::read_submission(&candidate).await.map(Some);
            }
        }
        Ok(None)
    }

    async fn find_official(&self, user_id: &UserId) -> Result<Option<ProfileSubmission>, DomainError> {
        Ok(self
            .list_by_user(user_id)
            .await?
            .into_iter()
            .find(|s| s.is_official))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProfileSubmission>, DomainError> {
        Self::read_dir_submissions(&self.user_dir(user_id)).await
    }
}
