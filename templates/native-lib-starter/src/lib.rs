//! Backing library for:
//!
//! ```java
//! package com.example;
//!
//! public class Bridge {
//!     static { System.loadLibrary("my_native_lib"); }
//!     public static native int sum(int[] values);
//!     public static native void startWorker();
//! }
//!
//! public class Callbacks {
//!     public static void onWorkerDone(int result) { ... }
//! }
//! ```

use std::ffi::CString;

use jni_glue::prelude::*;

fn init(runtime: &'static Runtime) -> Result<(), Error> {
    diagnostics::init_platform_logging("my_native_lib");
    runtime.setup_class_loader("com/example/Bridge")
}

export_jni_onload!(init);

#[no_mangle]
pub extern "system" fn Java_com_example_Bridge_sum(
    env: *mut jni::JNIEnv,
    _class: jni::jclass,
    values: jni::jintArray,
) -> jni::jint {
    unsafe {
        let len = forward::get_array_length(env, values);
        let mut buf = vec![0; len as usize];
        forward::get_int_array_region(env, values, 0, len, buf.as_mut_ptr());
        buf.iter().fold(0, |acc: jni::jint, v| acc.wrapping_add(*v))
    }
}

#[no_mangle]
pub extern "system" fn Java_com_example_Bridge_startWorker(_env: *mut jni::JNIEnv, _class: jni::jclass) {
    std::thread::spawn(|| {
        if let Err(e) = report_back(42) {
            log::error!("worker could not call back into Java: {e}");
        }
    });
}

/// Runs on a native thread: attaches for the duration of the call.
fn report_back(result: jni::jint) -> Result<(), Error> {
    let guard = jni_glue::runtime::attach_scoped()?;
    let env = guard.env();

    // FindClass would only see system classes on this thread
    let callbacks = LocalRef::new(&env, jni_glue::find_class("com/example/Callbacks")?);
    let name = CString::new("onWorkerDone")?;
    let sig = CString::new("(I)V")?;
    unsafe {
        let method = forward::get_static_method_id(env.raw(), callbacks.get(), name.as_ptr(), sig.as_ptr());
        if method.is_null() {
            env.exception_clear();
            return Err(Error::MethodNotFound {
                name: "onWorkerDone".into(),
                sig: "(I)V".into(),
            });
        }
        forward::call_static_void_method_a(env.raw(), callbacks.get(), method, &jni::jvalue { i: result });
    }
    if env.exception_check() {
        env.exception_describe();
        env.exception_clear();
    }
    Ok(())
}
