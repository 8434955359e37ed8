use tracing_subscriber::EnvFilter;

use crate::args::Args;

pub(crate) fn init(args: &Args) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = EnvFilter::new(args.log_level.as_filter_str());

    tracing_subscriber::registry()
        .with(args.log_format())
        .with(env_filter)
        .init();
}
