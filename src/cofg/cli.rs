//! CLI argument parsing
//!
//! Positional `BROWSER` and `GREP` keep the historical `server chrome <grep> --verbose` call
//! shape used by the test scripts; `--ip`/`--port`/`--root` override the config file.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
  version = env!("VERSION"),
  about = "Serves the current directory on port 8888 and opens a browser on the test results page",
  long_about
)]
pub(crate) struct Args {
  /// Browser to launch: `chrome`, `IE`, or any executable name
  pub(crate) browser: Option<String>,
  /// Test filter, forwarded to the results page as `?grep=`
  pub(crate) grep: Option<String>,
  /// Log every request
  #[arg(long)]
  pub(crate) verbose: bool,
  #[arg(long)]
  pub(crate) ip: Option<String>,
  #[arg(long)]
  pub(crate) port: Option<u16>,
  /// Directory to serve instead of the current one
  #[arg(long)]
  pub(crate) root: Option<String>,
}
