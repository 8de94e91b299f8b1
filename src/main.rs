use clap::Parser;
use dreamlayer_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Routes => {
            cli::routes::run();
            Ok(())
        }
    }
}
