//! # jni-glue
//!
//! Raw JNI bindings for native Rust libraries loaded into a Java VM, plus a
//! small registry that hands every thread its `JNIEnv`.
//!
//! - [`forward`]: one `unsafe fn` per JNI table entry, a literal
//!   one-to-one call through the environment's function table
//! - [`runtime`]: stores the `JavaVM`, attaches native threads on demand
//!   and resolves classes through a cached application class loader
//! - [`export_jni_onload!`]: generates the `JNI_OnLoad` symbol that wires
//!   the two together
//!
//! ## Quick Start
//!
//! **Cargo.toml:**
//! ```toml
//! [lib]
//! crate-type = ["cdylib"]
//!
//! [dependencies]
//! jni-glue = "0.3"
//! ```
//!
//! **src/lib.rs:**
//! ```rust,ignore
//! use jni_glue::prelude::*;
//!
//! fn init(runtime: &'static Runtime) -> Result<(), Error> {
//!     diagnostics::init_platform_logging("my-lib");
//!     runtime.setup_class_loader("com/example/Bridge")
//! }
//!
//! export_jni_onload!(init);
//!
//! #[no_mangle]
//! pub extern "system" fn Java_com_example_Bridge_sum(
//!     env: *mut jni::JNIEnv,
//!     _class: jni::jclass,
//!     values: jni::jintArray,
//! ) -> jni::jint {
//!     unsafe {
//!         let len = forward::get_array_length(env, values);
//!         let mut buf = vec![0; len as usize];
//!         forward::get_int_array_region(env, values, 0, len, buf.as_mut_ptr());
//!         buf.iter().sum()
//!     }
//! }
//! ```
//!
//! Native threads that call back into Java get their environment from the
//! registry:
//!
//! ```rust,ignore
//! std::thread::spawn(|| -> Result<(), jni_glue::Error> {
//!     let guard = jni_glue::runtime::attach_scoped()?;
//!     let cls = jni_glue::find_class("com/example/Callbacks")?;
//!     // ...
//!     Ok(())
//! });
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Your native library                      │
//! │      export_jni_onload!(init), Java_* functions          │
//! ├─────────────────────────────────────────────────────────┤
//! │              Registry (runtime module)                   │
//! │   Runtime, RuntimeConfig, AttachGuard, find_class        │
//! ├──────────────────────────────┬──────────────────────────┤
//! │   env::JniEnv, LocalRef      │  forward::* (236 slots)  │
//! │   typed helpers              │  one call per entry      │
//! ├──────────────────────────────┴──────────────────────────┤
//! │              Raw FFI Bindings (sys module)               │
//! │   sys::jni - types, JNINativeInterface_, JavaVM table    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sys::jni`] | Raw JNI types and function tables |
//! | [`forward`] | Forwarding functions, no checks |
//! | [`runtime`] | VM registry and class-loader cache |
//! | [`env`] | `JniEnv` handle and `LocalRef` guard |
//! | [`error`] | Registry errors |
//! | [`diagnostics`] | Log target and Android logcat setup |
//! | `embed` | Launching a JVM from Rust (feature `embed`) |
//!
//! ## Version Compatibility
//!
//! | JDK Version | JNI Functions | Notes |
//! |-------------|---------------|-------|
//! | 8           | 232           | Baseline |
//! | 9           | 233           | +GetModule |
//! | 21          | 234           | +IsVirtualThread |
//! | 24          | 235           | +GetStringUTFLengthAsLong |
//!
//! Calling a slot newer than the running VM is undefined behavior; check
//! [`forward::get_version`] first.

pub mod diagnostics;
pub mod env;
pub mod error;
pub mod forward;
pub mod prelude;
pub mod runtime;
pub mod sys;

// Implementation module (use `env` for the public API)
#[doc(hidden)]
pub mod jni_wrapper;

#[cfg(feature = "embed")]
pub mod embed;

pub use crate::env::{JniEnv, LocalRef};
pub use crate::error::{Error, Result};
pub use crate::runtime::{
    attach_scoped, detach_current_thread, find_class, get_env, get_vm, global, needs_detach, set_vm,
    setup_class_loader, AttachGuard, ClassLookup, Runtime, RuntimeConfig, ThreadEnv,
};
pub use crate::sys::jni;

/// Exports `JNI_OnLoad` for a native library.
///
/// The generated function stores the VM in the process-wide [`Runtime`],
/// runs the optional initializer and returns the runtime's configured JNI
/// version (`JNI_VERSION_1_6` unless a runtime was [`runtime::install`]ed
/// first). An initializer error makes `JNI_OnLoad` return `JNI_ERR`, which
/// fails `System.loadLibrary` on the Java side.
///
/// The initializer is any `fn(&'static Runtime) -> jni_glue::Result<()>`:
///
/// ```rust,ignore
/// use jni_glue::{export_jni_onload, Runtime};
///
/// fn init(runtime: &'static Runtime) -> jni_glue::Result<()> {
///     runtime.setup_class_loader("com/example/Bridge")
/// }
///
/// export_jni_onload!(init);
/// ```
///
/// `export_jni_onload!()` only stores the VM.
#[macro_export]
macro_rules! export_jni_onload {
    () => {
        $crate::export_jni_onload!(|_runtime: &'static $crate::Runtime| -> $crate::Result<()> { Ok(()) });
    };
    ($init:expr) => {
        #[no_mangle]
        pub unsafe extern "system" fn JNI_OnLoad(
            vm: *mut $crate::sys::jni::JavaVM,
            _reserved: *mut std::ffi::c_void,
        ) -> $crate::sys::jni::jint {
            $crate::runtime::on_load(vm, $init)
        }
    };
}
