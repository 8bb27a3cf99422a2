use clap::Parser;

use crate::error::Result;
use crate::model::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// URL to request (must start with "http")
    #[arg(value_parser = parse_url)]
    url: String,

    /// Number of processes to utilize
    #[arg(short = 'p', long = "processes", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    processes: u32,

    /// Number of requests per process
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    requests: u32,

    /// Print each response body
    #[arg(short, long)]
    verbose: bool,
}

fn parse_url(s: &str) -> std::result::Result<String, String> {
    if s.starts_with("http") {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not an http(s) URL"))
    }
}

/// Builds a [`Config`] from the full argument list, program name first.
///
/// Help and version requests come back as [`crate::ThorError::Usage`] too;
/// [`crate::ThorError::exit_code`] tells them apart from real mistakes.
pub fn configure<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    // `-help` was accepted by the old script; clap would read it as `-h -e -l -p`.
    let args = args.into_iter().map(|arg| {
        let arg: String = arg.into();
        if arg == "-help" {
            "--help".to_string()
        } else {
            arg
        }
    });

    let args = Args::try_parse_from(args)?;

    Ok(Config {
        url: args.url,
        workers: args.processes,
        requests: args.requests,
        verbose: args.verbose,
    })
}
