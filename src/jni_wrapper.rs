//! Thread-bound handle around a raw `JNIEnv` pointer.
//!
//! [`JniEnv`] is what the runtime registry hands out. It carries the raw
//! pointer for use with [`crate::forward`] and a handful of typed helpers
//! for the lookups the registry itself performs. Every helper goes through
//! the forwarding layer; none of them clears a pending exception.
//!
//! # Example
//!
//! ```rust,ignore
//! use jni_glue::{forward, JniEnv};
//!
//! let env: JniEnv = jni_glue::get_env()?;
//! let cls = env.find_class("java/lang/System")?;
//! let version = unsafe { forward::get_version(env.raw()) };
//!
//! if env.exception_check() {
//!     env.exception_describe();
//!     env.exception_clear();
//! }
//! ```

use std::ffi::CString;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::forward;
use crate::sys::jni;

/// Handle to the JNI environment of the current thread.
///
/// # Thread Safety
///
/// A `JniEnv` is only valid on the thread it was obtained on and is neither
/// `Send` nor `Sync`. Other threads get their own through
/// [`crate::Runtime::get_env`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JniEnv {
    env: *mut jni::JNIEnv,
    _not_send: PhantomData<*mut ()>,
}

impl JniEnv {
    /// Wraps a raw environment pointer.
    ///
    /// # Safety
    ///
    /// The pointer must be a valid `JNIEnv` for the calling thread.
    pub unsafe fn from_raw(env: *mut jni::JNIEnv) -> Self {
        JniEnv {
            env,
            _not_send: PhantomData,
        }
    }

    /// Returns the raw pointer, for use with [`crate::forward`].
    pub fn raw(&self) -> *mut jni::JNIEnv {
        self.env
    }

    /// Returns the JNI version implemented by the VM.
    pub fn get_version(&self) -> jni::jint {
        unsafe { forward::get_version(self.env) }
    }

    // =========================================================================
    // Classes and methods
    // =========================================================================

    /// Finds a class through the default `FindClass` path.
    ///
    /// The name uses '/' as package separator (e.g. "java/lang/String").
    pub fn find_class(&self, name: &str) -> Result<jni::jclass> {
        let c_name = CString::new(name)?;
        let cls = unsafe { forward::find_class(self.env, c_name.as_ptr()) };
        if cls.is_null() {
            Err(Error::ClassNotFound(name.to_string()))
        } else {
            Ok(cls)
        }
    }

    /// Gets the class of an object.
    pub fn get_object_class(&self, obj: jni::jobject) -> jni::jclass {
        unsafe { forward::get_object_class(self.env, obj) }
    }

    /// Gets the method ID of an instance method.
    pub fn get_method_id(&self, cls: jni::jclass, name: &str, sig: &str) -> Result<jni::jmethodID> {
        let c_name = CString::new(name)?;
        let c_sig = CString::new(sig)?;
        let mid = unsafe { forward::get_method_id(self.env, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        if mid.is_null() {
            Err(Error::MethodNotFound {
                name: name.to_string(),
                sig: sig.to_string(),
            })
        } else {
            Ok(mid)
        }
    }

    /// Calls an instance method returning an object. May return null.
    pub fn call_object_method(
        &self,
        obj: jni::jobject,
        method_id: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> jni::jobject {
        unsafe { forward::call_object_method_a(self.env, obj, method_id, args.as_ptr()) }
    }

    /// Checks if two references refer to the same object.
    pub fn is_same_object(&self, a: jni::jobject, b: jni::jobject) -> bool {
        unsafe { forward::is_same_object(self.env, a, b) != jni::JNI_FALSE }
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Creates a Java string from modified UTF-8.
    ///
    /// Returns null if the VM could not allocate the string.
    pub fn new_string_utf(&self, s: &str) -> Result<jni::jstring> {
        let c_str = CString::new(s)?;
        Ok(unsafe { forward::new_string_utf(self.env, c_str.as_ptr()) })
    }

    // =========================================================================
    // References
    // =========================================================================

    /// Creates a global reference. Global references outlive this thread.
    pub fn new_global_ref(&self, obj: jni::jobject) -> jni::jobject {
        unsafe { forward::new_global_ref(self.env, obj) }
    }

    /// Deletes a global reference.
    pub fn delete_global_ref(&self, obj: jni::jobject) {
        unsafe { forward::delete_global_ref(self.env, obj) }
    }

    /// Deletes a local reference.
    pub fn delete_local_ref(&self, obj: jni::jobject) {
        unsafe { forward::delete_local_ref(self.env, obj) }
    }

    // =========================================================================
    // Exceptions
    // =========================================================================

    /// Checks if an exception is pending.
    pub fn exception_check(&self) -> bool {
        unsafe { forward::exception_check(self.env) != jni::JNI_FALSE }
    }

    /// Clears any pending exception.
    pub fn exception_clear(&self) {
        unsafe { forward::exception_clear(self.env) }
    }

    /// Prints the pending exception and its stack trace to stderr.
    pub fn exception_describe(&self) {
        unsafe { forward::exception_describe(self.env) }
    }
}

/// Deletes a local reference when dropped.
///
/// ```rust,ignore
/// let cls = LocalRef::new(&env, env.find_class("java/lang/String")?);
/// // cls is deleted when it goes out of scope
/// ```
pub struct LocalRef<'a> {
    env: &'a JniEnv,
    obj: jni::jobject,
}

impl<'a> LocalRef<'a> {
    pub fn new(env: &'a JniEnv, obj: jni::jobject) -> Self {
        LocalRef { env, obj }
    }

    pub fn get(&self) -> jni::jobject {
        self.obj
    }

    /// Gives up ownership without deleting the reference.
    pub fn into_inner(self) -> jni::jobject {
        let obj = self.obj;
        std::mem::forget(self);
        obj
    }
}

impl Drop for LocalRef<'_> {
    fn drop(&mut self) {
        if !self.obj.is_null() {
            self.env.delete_local_ref(self.obj);
        }
    }
}
