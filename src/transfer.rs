use tracing::info;

use crate::error::{Error, Result};
use crate::github::{self, GithubClient};
use crate::huggingface::HfClient;
use crate::progress::Reporter;
use crate::validation;

/// Everything one invocation needs; built once from user input and never
/// mutated after validation passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub source_url: String,
    pub token: String,
    pub repo_name: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferState {
    Idle,
    Validating,
    Transferring,
    Success,
    Error,
}

/// Observational pipeline status; the pipeline itself never reads it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferStatus {
    pub state: TransferState,
    pub message: String,
}

pub struct Transfer<'a> {
    request: TransferRequest,
    github: GithubClient,
    hub: HfClient,
    reporter: &'a dyn Reporter,
    status: TransferStatus,
}

impl<'a> Transfer<'a> {
    pub fn new(
        request: TransferRequest,
        github: GithubClient,
        hub: HfClient,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            request,
            github,
            hub,
            reporter,
            status: TransferStatus {
                state: TransferState::Idle,
                message: String::new(),
            },
        }
    }

    pub fn status(&self) -> &TransferStatus {
        &self.status
    }

    /// Runs the whole pipeline: validate, create the destination repository,
    /// list and fetch the source files, upload them one at a time, and
    /// finally patch the description when one was given. Halts on the first
    /// failure; files already uploaded are left in place.
    pub async fn run(&mut self) -> Result<()> {
        self.status.state = TransferState::Validating;
        self.report("Validating inputs...");

        if let Err(error) = validation::validate(&self.request, &self.github, &self.hub).await {
            self.fail(&error);
            return Err(error);
        }

        self.status.state = TransferState::Transferring;

        match self.execute().await {
            Ok(()) => {
                self.status.state = TransferState::Success;
                self.report("Repository transfer completed successfully!");
                Ok(())
            }
            Err(error) => {
                self.fail(&error);
                Err(error)
            }
        }
    }

    async fn execute(&mut self) -> Result<()> {
        let (owner, name) = github::parse_source_url(&self.request.source_url)?;

        self.report("Creating repository on Hugging Face...");
        self.hub.create_repo(&self.request.repo_name).await?;

        self.report("Fetching files from GitHub...");
        let blobs = self.github.list_blobs(&owner, &name).await?;
        let files = self.github.fetch_files(&blobs).await?;

        info!(files = files.len(), "fetched source tree");

        let total = files.len();
        for (uploaded, file) in files.iter().enumerate() {
            self.hub.upload_file(&self.request.repo_name, file).await?;
            self.report(&format!("Uploaded {}/{} files", uploaded + 1, total));
        }

        if let Some(description) = self.request.description.clone() {
            self.report("Updating repository description...");
            self.hub
                .update_description(&self.request.repo_name, &description)
                .await?;
        }

        Ok(())
    }

    fn report(&mut self, message: &str) {
        self.status.message = message.to_string();
        self.reporter.update(message);
    }

    // Failures are returned to the caller, not pushed through the reporter.
    fn fail(&mut self, error: &Error) {
        self.status = TransferStatus {
            state: TransferState::Error,
            message: error.to_string(),
        };
    }
}
