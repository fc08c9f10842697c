use anyhow::Result;
use env_logger::Env;
use std::env;

use sales_aggregator::config::Config;
use sales_aggregator::data;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        },
    };

    data::run(&config)?;

    Ok(())
}
