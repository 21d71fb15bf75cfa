use crate::prelude::*;
use clap::Parser;

mod analyze;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch text from developer Q&A and commit-log APIs and run cleanup flows over it"
)]
pub struct App {
    #[clap(flatten)]
    options: analyze::Options,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DEVTEXT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    analyze::run(app.options, app.global).await
}
