use std::net::SocketAddr;

use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::LogLevel;

use self::log::LogStyle;

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug, Parser)]
#[command(name = "Blog API", version)]
/// The blog GraphQL API server
pub struct Args {
    /// Address the server listens on. Defaults to 127.0.0.1:4000.
    #[arg(short, long, env = "BLOG_API_LISTEN_ADDRESS")]
    pub listen_address: Option<SocketAddr>,
    /// Set the logging level
    #[arg(long = "log", env = "BLOG_API_LOG", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
    /// Set the style of log output
    #[arg(long, env = "BLOG_API_LOG_STYLE", default_value_t = LogStyle::Text)]
    log_style: LogStyle,
}

pub(crate) fn parse() -> Args {
    Args::parse()
}

impl Args {
    pub(crate) fn log_format<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer();

        match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if atty::is(atty::Stream::Stdout) => layer.with_ansi(true).boxed(),
            // for server logs, colors are off
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}
