use crate::stats::TransformStats;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// Install the global subscriber. `RUST_LOG` overrides the default filter.
    pub fn init() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("glsl_minify=info"));

        // A second init (tests, embedding hosts) keeps the first subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub fn build_start(file_count: usize, markers: &[String]) {
        info!("🔨 GLSL Minify");
        info!("═══════════════════════════════════════");
        info!("📁 Sources: {}", file_count);
        info!("🏷️  Markers: {}", markers.join(", "));
    }

    pub fn processing_file(name: &str) {
        debug!("⚡ Processing: {}", name);
    }

    pub fn file_written(path: &str) {
        debug!("📝 Wrote {}", path);
    }

    pub fn build_complete(file_count: usize, stats: &TransformStats, build_time: std::time::Duration) {
        info!("");
        info!("📊 Statistics:");
        info!("  • Files processed: {}", file_count);
        info!("  • Literals minified: {}", stats.literals_minified);
        info!("  • {}", stats);
        info!("  • Time: {:.2?}", build_time);
        info!("");
        info!("✅ Done");
    }

    pub fn info(msg: &str) {
        info!("{}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
