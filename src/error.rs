//! Errors reported by the runtime registry.
//!
//! The forwarding layer in [`crate::forward`] never produces these: it hands
//! back whatever the VM returned. Only the helpers that make a decision
//! (attach, detach, class-loader lookups) report an [`Error`].

use std::ffi::NulError;
use std::fmt;

use crate::sys::jni;

/// Errors returned by [`crate::Runtime`] and the process-wide helpers.
#[derive(Debug)]
pub enum Error {
    /// No VM handle has been stored yet.
    NoVirtualMachine,
    /// `GetEnv` refused the configured JNI version. The thread is left as it was.
    UnsupportedVersion(jni::jint),
    /// `AttachCurrentThread` returned a non-OK status.
    AttachFailed(jni::jint),
    /// `DetachCurrentThread` returned a non-OK status.
    DetachFailed(jni::jint),
    /// A class, method or thread name contained an interior NUL byte.
    InvalidName(NulError),
    /// The VM could not resolve the named class.
    ClassNotFound(String),
    /// `GetMethodID` returned null.
    MethodNotFound { name: String, sig: String },
    /// The root class handed to `setup_class_loader` has no class loader.
    NullClassLoader(String),
    /// `find_class` was called before `setup_class_loader`.
    ClassLoaderNotReady,
    /// `setup_class_loader` was called a second time.
    ClassLoaderAlreadySet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoVirtualMachine => write!(f, "no Java VM has been registered"),
            Error::UnsupportedVersion(code) => {
                write!(f, "GetEnv rejected the requested JNI version (JNI error {code})")
            }
            Error::AttachFailed(code) => write!(f, "failed to attach current thread to the VM (JNI error {code})"),
            Error::DetachFailed(code) => write!(f, "failed to detach current thread from the VM (JNI error {code})"),
            Error::InvalidName(e) => write!(f, "invalid name (NUL byte): {e}"),
            Error::ClassNotFound(name) => write!(f, "class not found: {name}"),
            Error::MethodNotFound { name, sig } => write!(f, "method not found: {name}{sig}"),
            Error::NullClassLoader(name) => write!(f, "class {name} has no class loader"),
            Error::ClassLoaderNotReady => write!(f, "class loader has not been set up"),
            Error::ClassLoaderAlreadySet => write!(f, "class loader is already set up"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidName(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NulError> for Error {
    fn from(value: NulError) -> Self {
        Error::InvalidName(value)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
