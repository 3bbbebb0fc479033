//! Build script for vgc-site
//!
//! - `BUILD_VERSION`: appended to asset URLs so a deploy busts browser caches
//! - `STYLESHEET`: `style.min.css` when a release build minified the CSS

use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const CSS_DIR: &str = "../../public/css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}/style.css");
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    let version = git_revision().unwrap_or_else(build_timestamp);
    println!("cargo:rustc-env=BUILD_VERSION={version}");

    let stylesheet = if cfg!(debug_assertions) {
        "style.css"
    } else {
        release_stylesheet(Path::new(CSS_DIR))
    };
    println!("cargo:rustc-env=STYLESHEET={stylesheet}");
}

/// Short hash of HEAD, if this is a git checkout.
fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn build_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or_else(|_| "dev".to_string(), |d| format!("{:x}", d.as_secs()))
}

fn release_stylesheet(css_dir: &Path) -> &'static str {
    match minify(css_dir) {
        Ok(()) => "style.min.css",
        Err(reason) => {
            println!("cargo:warning=serving unminified style.css: {reason}");
            "style.css"
        }
    }
}

/// Writes `style.min.css` next to `style.css`.
fn minify(css_dir: &Path) -> Result<(), String> {
    use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

    let source = std::fs::read_to_string(css_dir.join("style.css")).map_err(|e| e.to_string())?;
    let mut sheet = StyleSheet::parse(&source, ParserOptions::default()).map_err(|e| e.to_string())?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| e.to_string())?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;
    std::fs::write(css_dir.join("style.min.css"), printed.code).map_err(|e| e.to_string())
}
