use clap::{Parser, Subcommand};
use colored::Colorize;
use survey_results::{sample, FetchError, SurveyResultProvider};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a survey result from a resource location.
    Fetch {
        /// http(s) URL, file:// URL, or plain file path.
        location: String,
        /// Print the payload and fail loudly instead of reducing the
        /// outcome to a log line.
        #[clap(long)]
        strict: bool,
    },
    /// Print the built-in sample result as JSON.
    Sample,
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("no other subscriber installed");

    let opts = Opts::parse();

    match opts.command {
        Command::Fetch { location, strict } => {
            let provider = SurveyResultProvider::new(location);
            if strict {
                if let Err(error) = fetch_strict(&provider).await {
                    eprintln!("{} {}", "Fetch failed:".red(), error);
                    std::process::exit(1);
                }
            } else {
                provider.fetch_remote_result().await;
            }
        }
        Command::Sample => {
            print_result(&sample::sample_result());
        }
    }
}

async fn fetch_strict(provider: &SurveyResultProvider) -> Result<(), FetchError> {
    let result = provider.fetch_result().await?;
    println!(
        "{} {} ({} rounds)",
        "Fetched".green(),
        result.title.bold(),
        result.votes.len()
    );
    print_result(&result);
    Ok(())
}

fn print_result(result: &survey_results::SurveyResult) {
    let json = serde_json::to_string_pretty(result).expect("survey results serialize");
    println!("{}", json);
}
