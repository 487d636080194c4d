use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{Result, ShowcaseError};

/// How long the desktop opener gets before we give up on it
pub const OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Program and leading args that hand a URL to the desktop.
/// The URL always goes last as its own argument, never through a shell.
#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("rundll32", &["url.dll,FileProtocolHandler"]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Full argument list for the opener
fn opener_args(url: &str) -> Vec<&str> {
    let (_, lead) = OPENER;
    lead.iter().copied().chain(std::iter::once(url)).collect()
}

/// Open a map or website link in the user's browser
pub async fn open_url(url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ShowcaseError::EmptyUrl);
    }

    let (program, _) = OPENER;
    tracing::debug!("Opening {} with {}", url, program);

    // The opener usually forks the browser and exits; output is discarded
    // so it cannot scribble over the TUI. A hung opener is killed when the
    // timeout drops the child.
    let mut cmd = Command::new(program);
    cmd.args(opener_args(url))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    match timeout(OPEN_TIMEOUT, cmd.status()).await {
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(ShowcaseError::Opener(format!("{} exited with {}", program, status))),
        Ok(Err(e)) => Err(ShowcaseError::Opener(format!("{}: {}", program, e))),
        Err(_) => Err(ShowcaseError::Opener(format!("{} timed out", program))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_rejected() {
        assert!(matches!(open_url("").await, Err(ShowcaseError::EmptyUrl)));
        assert!(matches!(open_url("   ").await, Err(ShowcaseError::EmptyUrl)));
    }

    #[test]
    fn test_url_with_query_stays_one_argument() {
        let url = "https://maps.google.com/?q=tiki&hl=en&z=15";
        let args = opener_args(url);

        assert_eq!(args.last(), Some(&url));
        assert_eq!(args.iter().filter(|a| a.contains('&')).count(), 1);
        assert!(!args.iter().any(|a| a.eq_ignore_ascii_case("/C")));
    }
}
