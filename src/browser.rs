//! Browser launcher
//!
//! Opens the results page in the browser named on the command line. Known browsers are looked
//! up at their usual install location first; anything else (or a browser missing from that
//! location) is handed to the OS by name.

use std::path::{ Path, PathBuf };
use std::process::{ Child, Command };

use log::{ info, warn };

use crate::error::AppResult;

const IE_PATH: &str = "C:/Program Files/Internet Explorer/iexplore.exe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Browser {
  Chrome,
  Ie,
  Other(String),
}

impl Browser {
  pub(crate) fn from_name(name: &str) -> Self {
    if name.eq_ignore_ascii_case("chrome") {
      Browser::Chrome
    } else if name.eq_ignore_ascii_case("ie") {
      Browser::Ie
    } else {
      warn!("Invalid command line arguments. Got {name} but expected chrome, IE or nothing.");
      Browser::Other(name.to_string())
    }
  }

  pub(crate) fn name(&self) -> &str {
    match self {
      Browser::Chrome => "chrome",
      Browser::Ie => "IE",
      Browser::Other(name) => name,
    }
  }

  /// Usual install location on this platform, if there is one.
  pub(crate) fn default_path(&self) -> Option<&'static str> {
    match self {
      Browser::Chrome => {
        if cfg!(windows) {
          Some("C:/Program Files (x86)/Google/Chrome/Application/chrome.exe")
        } else if cfg!(target_os = "macos") {
          Some("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome")
        } else if cfg!(target_os = "linux") {
          Some("/opt/google/chrome/chrome")
        } else {
          warn!(
            "default Chrome location is unknown for platform '{}'",
            std::env::consts::OS
          );
          None
        }
      }
      Browser::Ie => Some(IE_PATH),
      Browser::Other(_) => None,
    }
  }

  /// Executable to spawn: the default path when `exists` says it is there, else the name.
  pub(crate) fn executable_with(&self, exists: impl Fn(&Path) -> bool) -> PathBuf {
    match self.default_path() {
      Some(p) if exists(Path::new(p)) => PathBuf::from(p),
      _ => PathBuf::from(self.name()),
    }
  }

  pub(crate) fn executable(&self) -> PathBuf {
    self.executable_with(Path::exists)
  }
}

/// Spawn `browser` on `url`, sharing this process's stdio.
pub(crate) fn launch(browser: &Browser, url: &str) -> AppResult<Child> {
  let exe = browser.executable();
  info!("Using browser: {}", exe.display());
  let child = Command::new(&exe).arg(url).spawn()?;
  Ok(child)
}
