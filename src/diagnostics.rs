//! Diagnostics sink.
//!
//! The crate reports through the [`log`] facade under the target
//! [`LOG_TARGET`]; whichever logger the application installs receives the
//! messages. On Android, [`init_platform_logging`] routes them to logcat.

/// Log target used by every message this crate emits.
pub const LOG_TARGET: &str = "jni_glue";

/// Installs the platform logger, once.
///
/// On Android this sends `log` records to logcat under `tag`. On other
/// targets it does nothing: install `env_logger` or any other `log` backend
/// from the application instead.
#[cfg(target_os = "android")]
pub fn init_platform_logging(tag: &str) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(tag),
    );
    log::debug!(target: LOG_TARGET, "android logger installed with tag {tag}");
}

#[cfg(not(target_os = "android"))]
pub fn init_platform_logging(_tag: &str) {}
