use gh_to_hf::cli;
use gh_to_hf::github::GithubClient;
use gh_to_hf::huggingface::HfClient;
use gh_to_hf::progress::ConsoleReporter;
use gh_to_hf::transfer::Transfer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(error) = run().await {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let request = cli::run();

    let github = GithubClient::new();
    let hub = HfClient::new(request.token.clone());
    let reporter = ConsoleReporter;

    let mut transfer = Transfer::new(request, github, hub, &reporter);
    transfer.run().await?;

    Ok(())
}
