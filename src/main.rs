use std::io;

use anyhow::Result;
use chrono::Local;

use lucky_draw::{
    cli::{Cli, Parser},
    rand::RandomImpl,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    lucky_draw::run(
        &cli,
        &RandomImpl,
        Local::now().naive_local(),
        &mut io::stdout().lock(),
    )
}
