use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::SiteConfig;

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing config files, and
/// aborts if the database directory is unusable.
pub fn run(config: &SiteConfig) {
    info!("Folio boot check starting...");

    let (warnings, errors) = check(config);

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Defaults are in effect.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// Returns (warnings, errors).
pub fn check(config: &SiteConfig) -> (u32, u32) {
    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Database directory ──────────────────────────
    if let Some(dir) = config.database_dir() {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }

        // ── 2. Database directory writable ─────────────
        if path.exists() {
            let test_file = path.join(".write_test");
            match fs::write(&test_file, "test") {
                Ok(_) => {
                    let _ = fs::remove_file(&test_file);
                }
                Err(e) => {
                    error!("  Database directory not writable: {}", e);
                    errors += 1;
                }
            }
        }
    }

    // ── 3. Config files ────────────────────────────────
    let site_config = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "folio.toml".to_string());
    if !Path::new(&site_config).exists() {
        warn!("  {} not found, using default site config", site_config);
        warnings += 1;
    }
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default server config");
        warnings += 1;
    }

    (warnings, errors)
}
