// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, stdin/stdout plumbing, and man page rendering
// role: utilities/helpers
// inputs: Path-like strings ("-" means stdin/stdout); clap CommandFactory
// outputs: Canonicalized paths, file/stream contents, man page text
// side_effects: read_input consumes stdin; write_output writes files or stdout
// invariants: write_output always terminates the payload with a single newline
// errors: IO errors bubble with the offending path in context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// Read a whole input source: a file path, or stdin when `src` is "-".
pub fn read_input(src: &str) -> Result<String> {
  if src == "-" {
    let mut buf = String::new();
    std::io::stdin()
      .read_to_string(&mut buf)
      .context("reading stdin")?;
    return Ok(buf);
  }

  std::fs::read_to_string(src).with_context(|| format!("reading {src}"))
}

/// Write rendered output to a file path, or stdout when `dest` is "-".
pub fn write_output(dest: &str, rendered: &str) -> Result<()> {
  if dest == "-" {
    println!("{rendered}");
    return Ok(());
  }

  std::fs::write(dest, format!("{rendered}\n")).with_context(|| format!("writing {dest}"))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
