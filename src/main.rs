use anyhow::Result;
use cosmos_swap::config::SwapConfig;
use cosmos_swap::trader::Trader;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "cosmos_swap")]
struct Cli {
    /// Path to config file
    #[structopt(short, long, default_value = "swap.toml")]
    config: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();
    let cfg = SwapConfig::from_file(&args.config)?;

    let trader = Trader::new(cfg)?;
    if let Err(e) = trader.run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
