//! One freestanding function per JNI entry point.
//!
//! Every function here takes the environment pointer followed by the entry
//! point's own arguments, performs exactly one indirect call through the
//! function table and returns the result untouched. There is no null
//! checking, no bounds checking, and no exception handling: a pending
//! exception after any call is the caller's to observe and clear.
//!
//! Names are the snake_case form of the table slot (`GetIntArrayRegion` is
//! [`get_int_array_region`]). The C-variadic slots and the `va_list` (`...V`)
//! slots are not forwarded; the `...A` variants take a `jvalue` array instead.
//!
//! ```rust,ignore
//! use jni_glue::forward;
//!
//! let env = jni_glue::get_env()?.raw();
//! unsafe {
//!     let arr = forward::new_int_array(env, 3);
//!     forward::set_int_array_region(env, arr, 0, 3, [1, 2, 3].as_ptr());
//!     if forward::exception_check(env) != 0 {
//!         forward::exception_clear(env);
//!     }
//! }
//! ```
//!
//! # Safety
//!
//! All functions are `unsafe`: `env` must be a valid `JNIEnv` for the calling
//! thread, and every handle and buffer argument must satisfy the JNI
//! specification for that entry point.

#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

use std::ffi::c_void;
use std::os::raw::c_char;

use crate::sys::jni::*;

macro_rules! forward {
    ($(
        $(#[$attr:meta])*
        fn $name:ident => $slot:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        $(
            $(#[$attr])*
            #[inline]
            pub unsafe fn $name(env: *mut JNIEnv $(, $arg: $ty)*) $(-> $ret)? {
                $crate::jni_call!(env, $slot $(, $arg)*)
            }
        )*
    };
}

// Version and class definition

forward! {
    /// Returns the version of the native method interface.
    fn get_version => GetVersion() -> jint;
    fn define_class => DefineClass(name: *const c_char, loader: jobject, buf: *const jbyte, len: jsize) -> jclass;
    /// Looks a class up through the loader of the calling native method,
    /// or the system loader on threads the VM did not create.
    fn find_class => FindClass(name: *const c_char) -> jclass;
}

// Reflection and hierarchy

forward! {
    fn from_reflected_method => FromReflectedMethod(method: jobject) -> jmethodID;
    fn from_reflected_field => FromReflectedField(field: jobject) -> jfieldID;
    fn to_reflected_method => ToReflectedMethod(cls: jclass, method_id: jmethodID, is_static: jboolean) -> jobject;
    fn get_superclass => GetSuperclass(sub: jclass) -> jclass;
    fn is_assignable_from => IsAssignableFrom(sub: jclass, sup: jclass) -> jboolean;
    fn to_reflected_field => ToReflectedField(cls: jclass, field_id: jfieldID, is_static: jboolean) -> jobject;
}

// Exceptions

forward! {
    fn throw => Throw(obj: jthrowable) -> jint;
    fn throw_new => ThrowNew(clazz: jclass, msg: *const c_char) -> jint;
    fn exception_occurred => ExceptionOccurred() -> jthrowable;
    fn exception_describe => ExceptionDescribe();
    fn exception_clear => ExceptionClear();
    /// Does not return.
    fn fatal_error => FatalError(msg: *const c_char);
    fn exception_check => ExceptionCheck() -> jboolean;
}

// References and local frames

forward! {
    fn push_local_frame => PushLocalFrame(capacity: jint) -> jint;
    fn pop_local_frame => PopLocalFrame(result: jobject) -> jobject;
    fn new_global_ref => NewGlobalRef(lobj: jobject) -> jobject;
    fn delete_global_ref => DeleteGlobalRef(gref: jobject);
    fn delete_local_ref => DeleteLocalRef(obj: jobject);
    fn is_same_object => IsSameObject(obj1: jobject, obj2: jobject) -> jboolean;
    fn new_local_ref => NewLocalRef(ref_: jobject) -> jobject;
    fn ensure_local_capacity => EnsureLocalCapacity(capacity: jint) -> jint;
    fn new_weak_global_ref => NewWeakGlobalRef(obj: jobject) -> jweak;
    fn delete_weak_global_ref => DeleteWeakGlobalRef(ref_: jweak);
    fn get_object_ref_type => GetObjectRefType(obj: jobject) -> jobjectRefType;
}

// Objects

forward! {
    fn alloc_object => AllocObject(clazz: jclass) -> jobject;
    fn new_object_a => NewObjectA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jobject;
    fn get_object_class => GetObjectClass(obj: jobject) -> jclass;
    fn is_instance_of => IsInstanceOf(obj: jobject, clazz: jclass) -> jboolean;
}

// Instance methods

forward! {
    fn get_method_id => GetMethodID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jmethodID;
    fn call_object_method_a => CallObjectMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jobject;
    fn call_boolean_method_a => CallBooleanMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jboolean;
    fn call_byte_method_a => CallByteMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jbyte;
    fn call_char_method_a => CallCharMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jchar;
    fn call_short_method_a => CallShortMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jshort;
    fn call_int_method_a => CallIntMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jint;
    fn call_long_method_a => CallLongMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jlong;
    fn call_float_method_a => CallFloatMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jfloat;
    fn call_double_method_a => CallDoubleMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue) -> jdouble;
    fn call_void_method_a => CallVoidMethodA(obj: jobject, method_id: jmethodID, args: *const jvalue);
}

// Non-virtual instance methods

forward! {
    fn call_nonvirtual_object_method_a => CallNonvirtualObjectMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jobject;
    fn call_nonvirtual_boolean_method_a => CallNonvirtualBooleanMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jboolean;
    fn call_nonvirtual_byte_method_a => CallNonvirtualByteMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jbyte;
    fn call_nonvirtual_char_method_a => CallNonvirtualCharMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jchar;
    fn call_nonvirtual_short_method_a => CallNonvirtualShortMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jshort;
    fn call_nonvirtual_int_method_a => CallNonvirtualIntMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jint;
    fn call_nonvirtual_long_method_a => CallNonvirtualLongMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jlong;
    fn call_nonvirtual_float_method_a => CallNonvirtualFloatMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jfloat;
    fn call_nonvirtual_double_method_a => CallNonvirtualDoubleMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jdouble;
    fn call_nonvirtual_void_method_a => CallNonvirtualVoidMethodA(obj: jobject, clazz: jclass, method_id: jmethodID, args: *const jvalue);
}

// Instance fields

forward! {
    fn get_field_id => GetFieldID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jfieldID;
    fn get_object_field => GetObjectField(obj: jobject, field_id: jfieldID) -> jobject;
    fn get_boolean_field => GetBooleanField(obj: jobject, field_id: jfieldID) -> jboolean;
    fn get_byte_field => GetByteField(obj: jobject, field_id: jfieldID) -> jbyte;
    fn get_char_field => GetCharField(obj: jobject, field_id: jfieldID) -> jchar;
    fn get_short_field => GetShortField(obj: jobject, field_id: jfieldID) -> jshort;
    fn get_int_field => GetIntField(obj: jobject, field_id: jfieldID) -> jint;
    fn get_long_field => GetLongField(obj: jobject, field_id: jfieldID) -> jlong;
    fn get_float_field => GetFloatField(obj: jobject, field_id: jfieldID) -> jfloat;
    fn get_double_field => GetDoubleField(obj: jobject, field_id: jfieldID) -> jdouble;
    fn set_object_field => SetObjectField(obj: jobject, field_id: jfieldID, val: jobject);
    fn set_boolean_field => SetBooleanField(obj: jobject, field_id: jfieldID, val: jboolean);
    fn set_byte_field => SetByteField(obj: jobject, field_id: jfieldID, val: jbyte);
    fn set_char_field => SetCharField(obj: jobject, field_id: jfieldID, val: jchar);
    fn set_short_field => SetShortField(obj: jobject, field_id: jfieldID, val: jshort);
    fn set_int_field => SetIntField(obj: jobject, field_id: jfieldID, val: jint);
    fn set_long_field => SetLongField(obj: jobject, field_id: jfieldID, val: jlong);
    fn set_float_field => SetFloatField(obj: jobject, field_id: jfieldID, val: jfloat);
    fn set_double_field => SetDoubleField(obj: jobject, field_id: jfieldID, val: jdouble);
}

// Static methods

forward! {
    fn get_static_method_id => GetStaticMethodID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jmethodID;
    fn call_static_object_method_a => CallStaticObjectMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jobject;
    fn call_static_boolean_method_a => CallStaticBooleanMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jboolean;
    fn call_static_byte_method_a => CallStaticByteMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jbyte;
    fn call_static_char_method_a => CallStaticCharMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jchar;
    fn call_static_short_method_a => CallStaticShortMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jshort;
    fn call_static_int_method_a => CallStaticIntMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jint;
    fn call_static_long_method_a => CallStaticLongMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jlong;
    fn call_static_float_method_a => CallStaticFloatMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jfloat;
    fn call_static_double_method_a => CallStaticDoubleMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue) -> jdouble;
    fn call_static_void_method_a => CallStaticVoidMethodA(clazz: jclass, method_id: jmethodID, args: *const jvalue);
}

// Static fields

forward! {
    fn get_static_field_id => GetStaticFieldID(clazz: jclass, name: *const c_char, sig: *const c_char) -> jfieldID;
    fn get_static_object_field => GetStaticObjectField(clazz: jclass, field_id: jfieldID) -> jobject;
    fn get_static_boolean_field => GetStaticBooleanField(clazz: jclass, field_id: jfieldID) -> jboolean;
    fn get_static_byte_field => GetStaticByteField(clazz: jclass, field_id: jfieldID) -> jbyte;
    fn get_static_char_field => GetStaticCharField(clazz: jclass, field_id: jfieldID) -> jchar;
    fn get_static_short_field => GetStaticShortField(clazz: jclass, field_id: jfieldID) -> jshort;
    fn get_static_int_field => GetStaticIntField(clazz: jclass, field_id: jfieldID) -> jint;
    fn get_static_long_field => GetStaticLongField(clazz: jclass, field_id: jfieldID) -> jlong;
    fn get_static_float_field => GetStaticFloatField(clazz: jclass, field_id: jfieldID) -> jfloat;
    fn get_static_double_field => GetStaticDoubleField(clazz: jclass, field_id: jfieldID) -> jdouble;
    fn set_static_object_field => SetStaticObjectField(clazz: jclass, field_id: jfieldID, value: jobject);
    fn set_static_boolean_field => SetStaticBooleanField(clazz: jclass, field_id: jfieldID, value: jboolean);
    fn set_static_byte_field => SetStaticByteField(clazz: jclass, field_id: jfieldID, value: jbyte);
    fn set_static_char_field => SetStaticCharField(clazz: jclass, field_id: jfieldID, value: jchar);
    fn set_static_short_field => SetStaticShortField(clazz: jclass, field_id: jfieldID, value: jshort);
    fn set_static_int_field => SetStaticIntField(clazz: jclass, field_id: jfieldID, value: jint);
    fn set_static_long_field => SetStaticLongField(clazz: jclass, field_id: jfieldID, value: jlong);
    fn set_static_float_field => SetStaticFloatField(clazz: jclass, field_id: jfieldID, value: jfloat);
    fn set_static_double_field => SetStaticDoubleField(clazz: jclass, field_id: jfieldID, value: jdouble);
}

// Strings

forward! {
    fn new_string => NewString(unicode: *const jchar, len: jsize) -> jstring;
    fn get_string_length => GetStringLength(string: jstring) -> jsize;
    fn get_string_chars => GetStringChars(string: jstring, is_copy: *mut jboolean) -> *const jchar;
    fn release_string_chars => ReleaseStringChars(string: jstring, chars: *const jchar);
    fn new_string_utf => NewStringUTF(utf: *const c_char) -> jstring;
    fn get_string_utf_length => GetStringUTFLength(string: jstring) -> jsize;
    fn get_string_utf_chars => GetStringUTFChars(string: jstring, is_copy: *mut jboolean) -> *const c_char;
    fn release_string_utf_chars => ReleaseStringUTFChars(string: jstring, chars: *const c_char);
    fn get_string_region => GetStringRegion(string: jstring, start: jsize, len: jsize, buf: *mut jchar);
    fn get_string_utf_region => GetStringUTFRegion(string: jstring, start: jsize, len: jsize, buf: *mut c_char);
    /// The VM may block garbage collection until the matching release.
    fn get_string_critical => GetStringCritical(string: jstring, is_copy: *mut jboolean) -> *const jchar;
    fn release_string_critical => ReleaseStringCritical(string: jstring, cstring: *const jchar);
    /// JNI 24+. Older VMs have no slot 235.
    fn get_string_utf_length_as_long => GetStringUTFLengthAsLong(string: jstring) -> jlong;
}

// Object arrays

forward! {
    fn get_array_length => GetArrayLength(array: jarray) -> jsize;
    fn new_object_array => NewObjectArray(len: jsize, clazz: jclass, init: jobject) -> jobjectArray;
    fn get_object_array_element => GetObjectArrayElement(array: jobjectArray, index: jsize) -> jobject;
    fn set_object_array_element => SetObjectArrayElement(array: jobjectArray, index: jsize, val: jobject);
}

// Primitive array allocation

forward! {
    fn new_boolean_array => NewBooleanArray(len: jsize) -> jbooleanArray;
    fn new_byte_array => NewByteArray(len: jsize) -> jbyteArray;
    fn new_char_array => NewCharArray(len: jsize) -> jcharArray;
    fn new_short_array => NewShortArray(len: jsize) -> jshortArray;
    fn new_int_array => NewIntArray(len: jsize) -> jintArray;
    fn new_long_array => NewLongArray(len: jsize) -> jlongArray;
    fn new_float_array => NewFloatArray(len: jsize) -> jfloatArray;
    fn new_double_array => NewDoubleArray(len: jsize) -> jdoubleArray;
}

// Primitive array elements (pinned or copied)

forward! {
    fn get_boolean_array_elements => GetBooleanArrayElements(array: jbooleanArray, is_copy: *mut jboolean) -> *mut jboolean;
    fn get_byte_array_elements => GetByteArrayElements(array: jbyteArray, is_copy: *mut jboolean) -> *mut jbyte;
    fn get_char_array_elements => GetCharArrayElements(array: jcharArray, is_copy: *mut jboolean) -> *mut jchar;
    fn get_short_array_elements => GetShortArrayElements(array: jshortArray, is_copy: *mut jboolean) -> *mut jshort;
    fn get_int_array_elements => GetIntArrayElements(array: jintArray, is_copy: *mut jboolean) -> *mut jint;
    fn get_long_array_elements => GetLongArrayElements(array: jlongArray, is_copy: *mut jboolean) -> *mut jlong;
    fn get_float_array_elements => GetFloatArrayElements(array: jfloatArray, is_copy: *mut jboolean) -> *mut jfloat;
    fn get_double_array_elements => GetDoubleArrayElements(array: jdoubleArray, is_copy: *mut jboolean) -> *mut jdouble;
    fn release_boolean_array_elements => ReleaseBooleanArrayElements(array: jbooleanArray, elems: *mut jboolean, mode: jint);
    fn release_byte_array_elements => ReleaseByteArrayElements(array: jbyteArray, elems: *mut jbyte, mode: jint);
    fn release_char_array_elements => ReleaseCharArrayElements(array: jcharArray, elems: *mut jchar, mode: jint);
    fn release_short_array_elements => ReleaseShortArrayElements(array: jshortArray, elems: *mut jshort, mode: jint);
    fn release_int_array_elements => ReleaseIntArrayElements(array: jintArray, elems: *mut jint, mode: jint);
    fn release_long_array_elements => ReleaseLongArrayElements(array: jlongArray, elems: *mut jlong, mode: jint);
    fn release_float_array_elements => ReleaseFloatArrayElements(array: jfloatArray, elems: *mut jfloat, mode: jint);
    fn release_double_array_elements => ReleaseDoubleArrayElements(array: jdoubleArray, elems: *mut jdouble, mode: jint);
}

// Primitive array regions

forward! {
    fn get_boolean_array_region => GetBooleanArrayRegion(array: jbooleanArray, start: jsize, len: jsize, buf: *mut jboolean);
    fn get_byte_array_region => GetByteArrayRegion(array: jbyteArray, start: jsize, len: jsize, buf: *mut jbyte);
    fn get_char_array_region => GetCharArrayRegion(array: jcharArray, start: jsize, len: jsize, buf: *mut jchar);
    fn get_short_array_region => GetShortArrayRegion(array: jshortArray, start: jsize, len: jsize, buf: *mut jshort);
    fn get_int_array_region => GetIntArrayRegion(array: jintArray, start: jsize, len: jsize, buf: *mut jint);
    fn get_long_array_region => GetLongArrayRegion(array: jlongArray, start: jsize, len: jsize, buf: *mut jlong);
    fn get_float_array_region => GetFloatArrayRegion(array: jfloatArray, start: jsize, len: jsize, buf: *mut jfloat);
    fn get_double_array_region => GetDoubleArrayRegion(array: jdoubleArray, start: jsize, len: jsize, buf: *mut jdouble);
    fn set_boolean_array_region => SetBooleanArrayRegion(array: jbooleanArray, start: jsize, len: jsize, buf: *const jboolean);
    fn set_byte_array_region => SetByteArrayRegion(array: jbyteArray, start: jsize, len: jsize, buf: *const jbyte);
    fn set_char_array_region => SetCharArrayRegion(array: jcharArray, start: jsize, len: jsize, buf: *const jchar);
    fn set_short_array_region => SetShortArrayRegion(array: jshortArray, start: jsize, len: jsize, buf: *const jshort);
    fn set_int_array_region => SetIntArrayRegion(array: jintArray, start: jsize, len: jsize, buf: *const jint);
    fn set_long_array_region => SetLongArrayRegion(array: jlongArray, start: jsize, len: jsize, buf: *const jlong);
    fn set_float_array_region => SetFloatArrayRegion(array: jfloatArray, start: jsize, len: jsize, buf: *const jfloat);
    fn set_double_array_region => SetDoubleArrayRegion(array: jdoubleArray, start: jsize, len: jsize, buf: *const jdouble);
}

// Critical (zero-copy) array access

forward! {
    /// No other JNI call may be made until the matching release.
    fn get_primitive_array_critical => GetPrimitiveArrayCritical(array: jarray, is_copy: *mut jboolean) -> *mut c_void;
    fn release_primitive_array_critical => ReleasePrimitiveArrayCritical(array: jarray, carray: *mut c_void, mode: jint);
}

// Natives, monitors and the VM

forward! {
    fn register_natives => RegisterNatives(clazz: jclass, methods: *const JNINativeMethod, n_methods: jint) -> jint;
    fn unregister_natives => UnregisterNatives(clazz: jclass) -> jint;
    fn monitor_enter => MonitorEnter(obj: jobject) -> jint;
    fn monitor_exit => MonitorExit(obj: jobject) -> jint;
    fn get_java_vm => GetJavaVM(vm: *mut *mut JavaVM) -> jint;
}

// Direct buffers, modules, threads

forward! {
    fn new_direct_byte_buffer => NewDirectByteBuffer(address: *mut c_void, capacity: jlong) -> jobject;
    fn get_direct_buffer_address => GetDirectBufferAddress(buf: jobject) -> *mut c_void;
    fn get_direct_buffer_capacity => GetDirectBufferCapacity(buf: jobject) -> jlong;
    /// JNI 9+.
    fn get_module => GetModule(clazz: jclass) -> jobject;
    /// JNI 21+.
    fn is_virtual_thread => IsVirtualThread(obj: jobject) -> jboolean;
}
