use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use month_grid::cache::ActivityCache;
use month_grid::Month;
use month_grid::MonthGridBuilder;


#[derive(Parser, Debug)]
#[command(name = "month")]
#[command(about = "Print the day grid of a month, with the activities of each day")]
struct Cli {
    /// Activity cache file (JSON)
    cache: PathBuf,

    /// Month to display (YYYY-MM). Defaults to the current month
    #[arg(value_parser = parse_month)]
    month: Option<Month>,

    /// Print the grid as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn parse_month(s: &str) -> Result<Month, String> {
    s.parse::<Month>().map_err(|err| err.to_string())
}


#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let month = match cli.month {
        Some(m) => m,
        None => Month::containing(Utc::now().date_naive())?,
    };

    let cache = match ActivityCache::from_file(&cli.cache) {
        Ok(cache) => cache,
        Err(err) => {
            log::warn!("Invalid cache file: {}. Using an empty cache", err);
            ActivityCache::new(&cli.cache)
        }
    };

    let builder = MonthGridBuilder::new(cache);
    let days = builder.build(&month).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else {
        month_grid::utils::print_month(&month, &days);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arguments() {
        let cli = Cli::try_parse_from(&["month", "cache.json", "2024-02", "--json"]).unwrap();
        assert_eq!(cli.cache, PathBuf::from("cache.json"));
        assert_eq!(cli.month, Some(Month::new(2024, 2).unwrap()));
        assert!(cli.json);

        let cli = Cli::try_parse_from(&["month", "cache.json"]).unwrap();
        assert_eq!(cli.month, None);
        assert!(cli.json == false);
    }

    #[test]
    fn reject_bad_arguments() {
        // Mistyped flag
        assert!(Cli::try_parse_from(&["month", "cache.json", "2024-02", "--jsno"]).is_err());
        // Extra positional argument
        assert!(Cli::try_parse_from(&["month", "cache.json", "2024-02", "extra-arg"]).is_err());
        // Invalid month
        assert!(Cli::try_parse_from(&["month", "cache.json", "2024-13"]).is_err());
        // Missing cache file
        assert!(Cli::try_parse_from(&["month"]).is_err());
        // --help is not silently ignored
        let err = Cli::try_parse_from(&["month", "--help", "cache.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
