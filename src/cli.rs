use std::path::PathBuf;
use std::process;

use getopts::Options;
use tokio::time::Duration;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/bigfoott/ScrapedDuck/data/events.min.json";

pub struct Args {
    pub source_url: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "o",
        "output-dir",
        "Directory the feed files are written to [Default: docs]",
        "DIR",
    );
    opts.optopt(
        "s",
        "source-url",
        "Upstream JSON event feed to fetch [Default: ScrapedDuck events feed]",
        "URL",
    );
    opts.optopt(
        "t",
        "timeout",
        "Timeout for the upstream fetch [Default: 30]",
        "SECONDS",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let source_url = matches
        .opt_str("source-url")
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());

    let output_dir = match matches.opt_get_default("output-dir", PathBuf::from("docs")) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Provided value for option 'output-dir' is invalid: {err}");
            process::exit(1);
        }
    };

    let timeout = match matches.opt_get_default("timeout", 30) {
        Ok(secs) => Duration::from_secs(secs),
        Err(err) => {
            eprintln!("Provided value for option 'timeout' is invalid: {err}");
            process::exit(1);
        }
    };

    Args {
        source_url,
        output_dir,
        timeout,
    }
}
