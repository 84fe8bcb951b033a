use anyhow::Result;
use clap::Parser;

use insight_create::cli::{Cli, normalize};
use insight_create::{creation, util};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: read, validate, sanitize, and persist or emit
  creation::process_creation(&cfg)
}
