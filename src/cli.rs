use clap::Parser;

use crate::transfer::TransferRequest;

#[derive(Parser)]
#[clap(
    name = "gh-to-hf",
    version,
    about = "Transfer a GitHub repository to Hugging Face Hub"
)]
pub struct Args {
    /// GitHub repository URL
    #[clap(short, long)]
    github: String,

    /// Hugging Face API token
    #[clap(short, long)]
    token: String,

    /// Target repository name on Hugging Face
    #[clap(short, long)]
    repo: String,

    /// Repository description
    #[clap(short, long)]
    description: Option<String>,
}

impl From<Args> for TransferRequest {
    fn from(args: Args) -> Self {
        TransferRequest {
            source_url: args.github,
            token: args.token,
            repo_name: args.repo,
            description: args.description,
        }
    }
}

pub fn run() -> TransferRequest {
    Args::parse().into()
}
