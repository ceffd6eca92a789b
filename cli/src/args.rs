//! Command-line surface of `req`.

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use req_core::{HttpMethod, RequestSpec};

#[derive(Parser, Debug)]
#[command(name = "req", author, version, about = "Minimalist HTTP client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// When to colorize output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send GET request
    Get(RequestArgs),
    /// Send POST request
    Post(RequestArgs),
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Target URL, including scheme
    pub url: String,

    /// JSON data for request body
    #[arg(short, long)]
    pub data: Option<String>,

    /// Custom headers (e.g. -H 'Authorization: Bearer token')
    #[arg(short = 'H', long = "header", value_name = "KEY: VALUE")]
    pub headers: Vec<String>,
}

impl Command {
    pub fn method(&self) -> HttpMethod {
        match self {
            Command::Get(_) => HttpMethod::Get,
            Command::Post(_) => HttpMethod::Post,
        }
    }

    fn args(&self) -> &RequestArgs {
        match self {
            Command::Get(args) | Command::Post(args) => args,
        }
    }

    pub fn to_spec(&self) -> RequestSpec {
        let args = self.args();
        RequestSpec {
            method: self.method(),
            url: args.url.clone(),
            body: args.data.clone(),
            headers: args.headers.clone(),
        }
    }
}
