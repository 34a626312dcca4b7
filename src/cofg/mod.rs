pub(crate) mod cli;
pub(crate) mod config;

/// Merge CLI overrides into loaded config.
///
/// WHY: Preserve file-based config as baseline; explicit CLI flags have higher precedence.
/// `--verbose` only ever switches request logging on, never off.
/// 中文：以設定檔為基礎，命令列參數覆寫對應欄位。
pub(crate) fn build_config_from_cli(mut s: config::Cofg, cli: &cli::Args) -> config::Cofg {
  if let Some(ip) = &cli.ip {
    s.addrs.ip = ip.to_string();
  }
  if let Some(port) = cli.port {
    s.addrs.port = port;
  }
  if let Some(root) = &cli.root {
    s.fs.root_path = root.to_string();
  }
  if cli.verbose {
    s.middleware.logger.enabling = true;
  }
  s
}
