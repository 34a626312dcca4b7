//! Configuration (Cofg)
//!
//! WHY: The served root and the verbosity used to be ambient process state (current directory,
//! a global flag). Here they live in one immutable value built at startup and handed to every
//! request through `web::Data`, so handlers and tests see exactly the configuration they were
//! given.
//!
//! Layering: built-in `cofg.yaml` → `./cofg.yaml` (optional) → environment
//! (`WEB_TEST_SERVER__FS__ROOT_PATH=...`) → CLI flags (see `super::build_config_from_cli`).
//!
//! 中文：設定值於啟動時建立一次，之後以 `web::Data` 明確傳入處理流程，不再依賴全域狀態。

use std::path::{ Path, PathBuf };

use nest_struct::nest_struct;

use crate::error::AppResult;

pub(crate) const BUILD_COFG: &str = include_str!("cofg.yaml");
pub(crate) const ENV_PREFIX: &str = "WEB_TEST_SERVER";

#[nest_struct]
#[derive(PartialEq, Clone, Debug, serde::Deserialize)]
pub(crate) struct Cofg {
  pub(crate) addrs: nest! {
    /// Server IP address (e.g., 127.0.0.1)
    pub(crate) ip: String,
    /// Server port, 8888 unless overridden
    pub(crate) port: u16,
  },
  pub(crate) server: nest! {
    /// Largest accepted POST body in bytes
    pub(crate) max_body_size: usize,
  },
  pub(crate) middleware: nest! {
    /// Enable Compress middleware
    pub(crate) compress: bool,
    pub(crate) logger: nest! {
      /// Enable request logging
      pub(crate) enabling: bool,
      /// Logger output format
      pub(crate) format: String
    }
  },
  pub(crate) fs: nest! {
    /// Root that request paths are joined onto
    pub(crate) root_path: String,
    /// Path segment `?resolve` answers are cut at
    pub(crate) resolve_marker: String,
    /// Reject request paths outside `root_path`
    pub(crate) confine_to_root: bool,
    /// Directory DELETE removes the whole tree
    pub(crate) recursive_delete: bool,
  },
  pub(crate) browser: nest! {
    /// Page opened in the browser, relative to the server root URL
    pub(crate) results_page: String,
  },
}

#[cfg(test)]
impl Default for Cofg {
  fn default() -> Self {
    Self::new_from_str(BUILD_COFG).unwrap_or_else(|e| panic!("built-in cofg.yaml: {e}"))
  }
}

impl Cofg {
  /// Load the full layered configuration (built-in → `./cofg.yaml` → env).
  pub(crate) fn load() -> AppResult<Self> {
    let cofg = config::Config::builder()
      .add_source(config::File::from_str(BUILD_COFG, config::FileFormat::Yaml))
      .add_source(config::File::with_name("./cofg.yaml").required(false))
      .add_source(
        config::Environment::with_prefix(ENV_PREFIX)
          .prefix_separator("__")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize::<Self>()?;
    Ok(cofg)
  }

  // Accept any owned source type that implements `config::Source`, layered over the
  // built-in defaults so partial files only need the keys they change.
  pub(crate) fn new_from_source<T>(source: T) -> AppResult<Self>
  where
    T: config::Source + Send + Sync + 'static,
  {
    let cofg = config::Config::builder()
      .add_source(config::File::from_str(BUILD_COFG, config::FileFormat::Yaml))
      .add_source(source)
      .build()?
      .try_deserialize::<Self>()?;
    Ok(cofg)
  }

  pub(crate) fn new_from_str(data_str: &str) -> AppResult<Self> {
    Self::new_from_source(config::File::from_str(data_str, config::FileFormat::Yaml))
  }

  /// Pin `fs.root_path` to an absolute path, relative roots are taken against the current
  /// working directory once, here.
  pub(crate) fn with_absolute_root(mut self) -> AppResult<Self> {
    let root = Path::new(&self.fs.root_path);
    let abs = if root.is_absolute() {
      root.to_path_buf()
    } else {
      std::env::current_dir()?.join(root)
    };
    self.fs.root_path = crate::http_ext::fold_path(&abs).display().to_string();
    Ok(self)
  }

  pub(crate) fn root(&self) -> PathBuf {
    PathBuf::from(&self.fs.root_path)
  }

  /// `http://localhost:<port>/<results_page>`, with `?grep=` when a filter is given.
  pub(crate) fn results_url(&self, grep: Option<&str>) -> String {
    use percent_encoding::{ NON_ALPHANUMERIC, utf8_percent_encode };

    let page = self.browser.results_page.trim_start_matches('/');
    let mut url = format!("http://localhost:{}/{page}", self.addrs.port);
    if let Some(grep) = grep.filter(|g| !g.is_empty()) {
      url.push_str("?grep=");
      url.extend(utf8_percent_encode(grep, NON_ALPHANUMERIC));
    }
    url
  }
}

impl std::fmt::Display for CofgAddrs {
  /// Format the address as `IP:Port`.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.ip, self.port)
  }
}

impl std::net::ToSocketAddrs for CofgAddrs {
  type Iter = std::vec::IntoIter<std::net::SocketAddr>;

  fn to_socket_addrs(&self) -> std::io::Result<Self::Iter> {
    std::net::ToSocketAddrs::to_socket_addrs(&(self.ip.as_str(), self.port))
  }
}
