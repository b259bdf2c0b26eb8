//! This crate contains the source code for the binary for the game fifteen.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use fifteen::{logging, App, Config, Session};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    logging::init(&config)?;
    let session = Session::new(config.build_board()?);

    let mut terminal = ratatui::init();
    let result = App::new(session).run(&mut terminal);
    ratatui::restore();

    result
}
