//! Common imports for native libraries.
//!
//! Kept small: the registry, the environment handle and the raw bindings.

pub use crate::diagnostics;
pub use crate::env::{JniEnv, LocalRef};
pub use crate::error::Error;
pub use crate::export_jni_onload;
pub use crate::forward;
pub use crate::runtime::{AttachGuard, ClassLookup, Runtime, RuntimeConfig};
pub use crate::sys::jni;
#[cfg(feature = "embed")]
pub use crate::embed::{EmbeddedVm, VmLauncher};
