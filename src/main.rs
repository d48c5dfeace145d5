use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tetris_stack::cli_options::GameArgs;
use tetris_stack::menu;
use tetris_stack_core::session::Session;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = GameArgs::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(args.log_level))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let seed = args.seed_or_now();
    info!(seed, "starting session");

    let mut session = Session::from_seed(seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut session, stdin.lock(), &mut stdout.lock(), args.format)
}
