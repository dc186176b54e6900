use crate::error::{Error, Result};
use crate::github::{self, GithubClient};
use crate::huggingface::HfClient;
use crate::transfer::TransferRequest;

/// Result of one precondition check. Each check produces its own outcome so
/// a front-end can surface per-field feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    fn valid(message: &str) -> Self {
        Self {
            valid: true,
            message: message.to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Pure shape check; makes no network calls.
pub fn check_source_url(url: &str) -> ValidationOutcome {
    match github::parse_source_url(url) {
        Ok(_) => ValidationOutcome::valid("Valid GitHub repository URL"),
        Err(_) => ValidationOutcome::invalid("Invalid GitHub URL format"),
    }
}

pub async fn check_source_repo(
    github: &GithubClient,
    owner: &str,
    name: &str,
) -> Result<ValidationOutcome> {
    if github.repo_is_public(owner, name).await? {
        Ok(ValidationOutcome::valid("Valid GitHub repository"))
    } else {
        Ok(ValidationOutcome::invalid(
            "Repository not found or not public",
        ))
    }
}

pub async fn check_token(hub: &HfClient) -> Result<ValidationOutcome> {
    if hub.token_is_valid().await? {
        Ok(ValidationOutcome::valid("Valid Hugging Face token"))
    } else {
        Ok(ValidationOutcome::invalid("Invalid Hugging Face token"))
    }
}

pub async fn check_repo_availability(hub: &HfClient, name: &str) -> Result<ValidationOutcome> {
    if hub.repo_exists(name).await? {
        Ok(ValidationOutcome::invalid(
            "Repository name already taken on Hugging Face",
        ))
    } else {
        Ok(ValidationOutcome::valid("Repository name is available"))
    }
}

/// Runs the four precondition checks, short-circuiting on the first failure.
/// No side effects; nothing is created until every check passes.
pub async fn validate(
    request: &TransferRequest,
    github_client: &GithubClient,
    hub: &HfClient,
) -> Result<()> {
    let shape = check_source_url(&request.source_url);
    if !shape.valid {
        return Err(Error::InvalidInput(shape.message));
    }

    let (owner, name) = github::parse_source_url(&request.source_url)?;

    let existence = check_source_repo(github_client, &owner, &name).await?;
    if !existence.valid {
        return Err(Error::NotFound(existence.message));
    }

    let token = check_token(hub).await?;
    if !token.valid {
        return Err(Error::Unauthorized(token.message));
    }

    let availability = check_repo_availability(hub, &request.repo_name).await?;
    if !availability.valid {
        return Err(Error::Conflict(availability.message));
    }

    Ok(())
}
