#![cfg_attr(test, allow(unused_crate_dependencies))]

use clap::crate_version;
use mimalloc::MiMalloc;
use tokio::runtime;

use blog_server::ServerConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod telemetry;

const THREAD_NAME: &str = "blog-api";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        telemetry::init(&args);

        tracing::info!("Blog API {}", crate_version!());

        let config = ServerConfig {
            listen_addr: args.listen_address,
            store: blog_engine::Store::demo().into_shared(),
        };

        blog_server::serve(config).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
