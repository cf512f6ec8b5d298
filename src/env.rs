//! Environment handles.
//!
//! [`JniEnv`] wraps the raw per-thread `JNIEnv` pointer. Obtain one from the
//! runtime registry rather than building it by hand:
//!
//! ```rust,ignore
//! use jni_glue::prelude::*;
//!
//! fn on_worker_thread(runtime: &Runtime) -> Result<(), Error> {
//!     // Attaches this thread if the VM does not know it yet and detaches
//!     // again when the guard drops.
//!     let guard = runtime.attach_scoped()?;
//!     let env = guard.env();
//!
//!     let cls = LocalRef::new(&env, env.find_class("java/lang/Thread")?);
//!     let _ = env.get_method_id(cls.get(), "getName", "()Ljava/lang/String;")?;
//!     Ok(())
//! }
//! ```
//!
//! [`LocalRef`] deletes a local reference when it goes out of scope. There is
//! no global-reference guard: global references created by the registry live
//! for the rest of the process.

mod jni_impl {
    pub use crate::jni_wrapper::{JniEnv, LocalRef};
}

pub use jni_impl::{JniEnv, LocalRef};
