use crate::report::{
    run_petitioner_report, run_respondent_report, PetitionerReportArgs, RespondentReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rakshak::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rakshak",
    about = "Litigation pressure analysis over court-case records",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the litigation pressure report for a respondent
    Respondent(RespondentReportArgs),
    /// Print the filing profile of a petitioner
    Petitioner(PetitionerReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Respondent(args) => run_respondent_report(args),
        Command::Petitioner(args) => run_petitioner_report(args),
    }
}
