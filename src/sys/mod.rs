//! Raw FFI definitions mirroring `jni.h`.
//!
//! Nothing in here adds behavior: these are the exact C layouts the host VM
//! hands to native code.

pub mod jni;
