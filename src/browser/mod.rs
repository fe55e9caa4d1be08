use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// Opens the system's default browser at the given URL. Fire-and-forget:
/// the server keeps running whether or not a browser actually opened.
pub fn open(url: &str) {
    let (program, args) = opener(url);

    let spawned = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => info!("opening browser at {}", url),
        Err(err) => warn!("could not open browser: {}", err),
    }
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> (&'static str, Vec<String>) {
    ("open", vec![url.to_string()])
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> (&'static str, Vec<String>) {
    // The first quoted argument to `start` is the window title.
    (
        "cmd",
        vec![
            "/C".to_string(),
            "start".to_string(),
            String::new(),
            url.to_string(),
        ],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> (&'static str, Vec<String>) {
    ("xdg-open", vec![url.to_string()])
}
