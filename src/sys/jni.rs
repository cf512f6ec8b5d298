// jni-glue/src/sys/jni.rs
//
// Raw JNI ABI: the types, constants and function tables of jni.h.
//
// The JNINativeInterface_ slot order is fixed by the JDK and only ever grows
// at the end (GetModule in 9, IsVirtualThread in 21, GetStringUTFLengthAsLong
// in 24). Slot numbers are noted on every group so the layout can be checked
// against the header at a glance.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::ffi::c_void;
use std::os::raw::c_char;

// -----------------------------------------------------------------------------
// Primitive types
// -----------------------------------------------------------------------------

pub type jint = i32;
pub type jlong = i64;
pub type jbyte = i8;
pub type jboolean = u8;
pub type jchar = u16;
pub type jshort = i16;
pub type jfloat = f32;
pub type jdouble = f64;
pub type jsize = jint;

// -----------------------------------------------------------------------------
// Reference types
// -----------------------------------------------------------------------------

pub type jobject = *mut c_void;
pub type jclass = jobject;
pub type jstring = jobject;
pub type jarray = jobject;
pub type jthrowable = jobject;
pub type jweak = jobject;

pub type jobjectArray = jarray;
pub type jbooleanArray = jarray;
pub type jbyteArray = jarray;
pub type jcharArray = jarray;
pub type jshortArray = jarray;
pub type jintArray = jarray;
pub type jlongArray = jarray;
pub type jfloatArray = jarray;
pub type jdoubleArray = jarray;

pub type jmethodID = *mut c_void;
pub type jfieldID = *mut c_void;

#[repr(C)]
#[derive(Copy, Clone)]
pub union jvalue {
    pub z: jboolean,
    pub b: jbyte,
    pub c: jchar,
    pub s: jshort,
    pub i: jint,
    pub j: jlong,
    pub f: jfloat,
    pub d: jdouble,
    pub l: jobject,
}

// -----------------------------------------------------------------------------
// Constants
// -----------------------------------------------------------------------------

pub const JNI_OK: jint = 0;
pub const JNI_ERR: jint = -1;
pub const JNI_EDETACHED: jint = -2;
pub const JNI_EVERSION: jint = -3;
pub const JNI_ENOMEM: jint = -4;
pub const JNI_EEXIST: jint = -5;
pub const JNI_EINVAL: jint = -6;

pub const JNI_TRUE: jboolean = 1;
pub const JNI_FALSE: jboolean = 0;

/// Release modes for `Release<Type>ArrayElements` and `ReleasePrimitiveArrayCritical`.
pub const JNI_COMMIT: jint = 1;
pub const JNI_ABORT: jint = 2;

pub const JNI_VERSION_1_1: jint = 0x00010001;
pub const JNI_VERSION_1_2: jint = 0x00010002;
pub const JNI_VERSION_1_4: jint = 0x00010004;
pub const JNI_VERSION_1_6: jint = 0x00010006;
pub const JNI_VERSION_1_8: jint = 0x00010008;
pub const JNI_VERSION_9: jint = 0x00090000;
pub const JNI_VERSION_10: jint = 0x000a0000;
pub const JNI_VERSION_19: jint = 0x00130000;
pub const JNI_VERSION_20: jint = 0x00140000;
pub const JNI_VERSION_21: jint = 0x00150000;
pub const JNI_VERSION_24: jint = 0x00180000;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum jobjectRefType {
    JNIInvalidRefType = 0,
    JNILocalRefType = 1,
    JNIGlobalRefType = 2,
    JNIWeakGlobalRefType = 3,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct JNINativeMethod {
    pub name: *const c_char,
    pub signature: *const c_char,
    pub fnPtr: *mut c_void,
}

/// Stand-in for the platform `va_list`. The `...V` slots are laid out but
/// never called from Rust; use the `...A` variants.
pub type va_list = *mut c_void;

/// A C-variadic slot. Present only to keep the table layout.
pub type variadic = *mut c_void;

// -----------------------------------------------------------------------------
// Function shapes shared by whole families of slots
// -----------------------------------------------------------------------------

pub type CallMethodA<R> =
    unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject, methodID: jmethodID, args: *const jvalue) -> R;
pub type CallMethodV<R> =
    unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject, methodID: jmethodID, args: va_list) -> R;
pub type CallNonvirtualMethodA<R> = unsafe extern "system" fn(
    env: *mut JNIEnv,
    obj: jobject,
    clazz: jclass,
    methodID: jmethodID,
    args: *const jvalue,
) -> R;
pub type CallNonvirtualMethodV<R> = unsafe extern "system" fn(
    env: *mut JNIEnv,
    obj: jobject,
    clazz: jclass,
    methodID: jmethodID,
    args: va_list,
) -> R;
pub type CallStaticMethodA<R> =
    unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass, methodID: jmethodID, args: *const jvalue) -> R;
pub type CallStaticMethodV<R> =
    unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass, methodID: jmethodID, args: va_list) -> R;

pub type GetField<T> = unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject, fieldID: jfieldID) -> T;
pub type SetField<T> = unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject, fieldID: jfieldID, val: T);
pub type GetStaticField<T> = unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass, fieldID: jfieldID) -> T;
pub type SetStaticField<T> =
    unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass, fieldID: jfieldID, value: T);

pub type NewArray = unsafe extern "system" fn(env: *mut JNIEnv, len: jsize) -> jarray;
pub type GetArrayElements<T> =
    unsafe extern "system" fn(env: *mut JNIEnv, array: jarray, isCopy: *mut jboolean) -> *mut T;
pub type ReleaseArrayElements<T> =
    unsafe extern "system" fn(env: *mut JNIEnv, array: jarray, elems: *mut T, mode: jint);
pub type GetArrayRegion<T> =
    unsafe extern "system" fn(env: *mut JNIEnv, array: jarray, start: jsize, len: jsize, buf: *mut T);
pub type SetArrayRegion<T> =
    unsafe extern "system" fn(env: *mut JNIEnv, array: jarray, start: jsize, len: jsize, buf: *const T);

pub type MemberId<Id> = unsafe extern "system" fn(
    env: *mut JNIEnv,
    clazz: jclass,
    name: *const c_char,
    sig: *const c_char,
) -> Id;

// -----------------------------------------------------------------------------
// JNINativeInterface_: the per-thread function table (236 slots)
// -----------------------------------------------------------------------------

#[repr(C)]
pub struct JNINativeInterface_ {
    // 0-3
    pub reserved0: *mut c_void,
    pub reserved1: *mut c_void,
    pub reserved2: *mut c_void,
    pub reserved3: *mut c_void,

    // 4-6
    pub GetVersion: unsafe extern "system" fn(env: *mut JNIEnv) -> jint,
    pub DefineClass: unsafe extern "system" fn(
        env: *mut JNIEnv,
        name: *const c_char,
        loader: jobject,
        buf: *const jbyte,
        len: jsize,
    ) -> jclass,
    pub FindClass: unsafe extern "system" fn(env: *mut JNIEnv, name: *const c_char) -> jclass,

    // 7-12
    pub FromReflectedMethod: unsafe extern "system" fn(env: *mut JNIEnv, method: jobject) -> jmethodID,
    pub FromReflectedField: unsafe extern "system" fn(env: *mut JNIEnv, field: jobject) -> jfieldID,
    pub ToReflectedMethod: unsafe extern "system" fn(
        env: *mut JNIEnv,
        cls: jclass,
        methodID: jmethodID,
        isStatic: jboolean,
    ) -> jobject,
    pub GetSuperclass: unsafe extern "system" fn(env: *mut JNIEnv, sub: jclass) -> jclass,
    pub IsAssignableFrom: unsafe extern "system" fn(env: *mut JNIEnv, sub: jclass, sup: jclass) -> jboolean,
    pub ToReflectedField: unsafe extern "system" fn(
        env: *mut JNIEnv,
        cls: jclass,
        fieldID: jfieldID,
        isStatic: jboolean,
    ) -> jobject,

    // 13-18
    pub Throw: unsafe extern "system" fn(env: *mut JNIEnv, obj: jthrowable) -> jint,
    pub ThrowNew: unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass, msg: *const c_char) -> jint,
    pub ExceptionOccurred: unsafe extern "system" fn(env: *mut JNIEnv) -> jthrowable,
    pub ExceptionDescribe: unsafe extern "system" fn(env: *mut JNIEnv),
    pub ExceptionClear: unsafe extern "system" fn(env: *mut JNIEnv),
    pub FatalError: unsafe extern "system" fn(env: *mut JNIEnv, msg: *const c_char),

    // 19-26
    pub PushLocalFrame: unsafe extern "system" fn(env: *mut JNIEnv, capacity: jint) -> jint,
    pub PopLocalFrame: unsafe extern "system" fn(env: *mut JNIEnv, result: jobject) -> jobject,
    pub NewGlobalRef: unsafe extern "system" fn(env: *mut JNIEnv, lobj: jobject) -> jobject,
    pub DeleteGlobalRef: unsafe extern "system" fn(env: *mut JNIEnv, gref: jobject),
    pub DeleteLocalRef: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject),
    pub IsSameObject: unsafe extern "system" fn(env: *mut JNIEnv, obj1: jobject, obj2: jobject) -> jboolean,
    pub NewLocalRef: unsafe extern "system" fn(env: *mut JNIEnv, ref_: jobject) -> jobject,
    pub EnsureLocalCapacity: unsafe extern "system" fn(env: *mut JNIEnv, capacity: jint) -> jint,

    // 27-33
    pub AllocObject: unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass) -> jobject,
    pub NewObject: variadic,
    pub NewObjectV: CallStaticMethodV<jobject>,
    pub NewObjectA: CallStaticMethodA<jobject>,
    pub GetObjectClass: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject) -> jclass,
    pub IsInstanceOf: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject, clazz: jclass) -> jboolean,
    pub GetMethodID: MemberId<jmethodID>,

    // 34-63
    pub CallObjectMethod: variadic,
    pub CallObjectMethodV: CallMethodV<jobject>,
    pub CallObjectMethodA: CallMethodA<jobject>,
    pub CallBooleanMethod: variadic,
    pub CallBooleanMethodV: CallMethodV<jboolean>,
    pub CallBooleanMethodA: CallMethodA<jboolean>,
    pub CallByteMethod: variadic,
    pub CallByteMethodV: CallMethodV<jbyte>,
    pub CallByteMethodA: CallMethodA<jbyte>,
    pub CallCharMethod: variadic,
    pub CallCharMethodV: CallMethodV<jchar>,
    pub CallCharMethodA: CallMethodA<jchar>,
    pub CallShortMethod: variadic,
    pub CallShortMethodV: CallMethodV<jshort>,
    pub CallShortMethodA: CallMethodA<jshort>,
    pub CallIntMethod: variadic,
    pub CallIntMethodV: CallMethodV<jint>,
    pub CallIntMethodA: CallMethodA<jint>,
    pub CallLongMethod: variadic,
    pub CallLongMethodV: CallMethodV<jlong>,
    pub CallLongMethodA: CallMethodA<jlong>,
    pub CallFloatMethod: variadic,
    pub CallFloatMethodV: CallMethodV<jfloat>,
    pub CallFloatMethodA: CallMethodA<jfloat>,
    pub CallDoubleMethod: variadic,
    pub CallDoubleMethodV: CallMethodV<jdouble>,
    pub CallDoubleMethodA: CallMethodA<jdouble>,
    pub CallVoidMethod: variadic,
    pub CallVoidMethodV: CallMethodV<()>,
    pub CallVoidMethodA: CallMethodA<()>,

    // 64-93
    pub CallNonvirtualObjectMethod: variadic,
    pub CallNonvirtualObjectMethodV: CallNonvirtualMethodV<jobject>,
    pub CallNonvirtualObjectMethodA: CallNonvirtualMethodA<jobject>,
    pub CallNonvirtualBooleanMethod: variadic,
    pub CallNonvirtualBooleanMethodV: CallNonvirtualMethodV<jboolean>,
    pub CallNonvirtualBooleanMethodA: CallNonvirtualMethodA<jboolean>,
    pub CallNonvirtualByteMethod: variadic,
    pub CallNonvirtualByteMethodV: CallNonvirtualMethodV<jbyte>,
    pub CallNonvirtualByteMethodA: CallNonvirtualMethodA<jbyte>,
    pub CallNonvirtualCharMethod: variadic,
    pub CallNonvirtualCharMethodV: CallNonvirtualMethodV<jchar>,
    pub CallNonvirtualCharMethodA: CallNonvirtualMethodA<jchar>,
    pub CallNonvirtualShortMethod: variadic,
    pub CallNonvirtualShortMethodV: CallNonvirtualMethodV<jshort>,
    pub CallNonvirtualShortMethodA: CallNonvirtualMethodA<jshort>,
    pub CallNonvirtualIntMethod: variadic,
    pub CallNonvirtualIntMethodV: CallNonvirtualMethodV<jint>,
    pub CallNonvirtualIntMethodA: CallNonvirtualMethodA<jint>,
    pub CallNonvirtualLongMethod: variadic,
    pub CallNonvirtualLongMethodV: CallNonvirtualMethodV<jlong>,
    pub CallNonvirtualLongMethodA: CallNonvirtualMethodA<jlong>,
    pub CallNonvirtualFloatMethod: variadic,
    pub CallNonvirtualFloatMethodV: CallNonvirtualMethodV<jfloat>,
    pub CallNonvirtualFloatMethodA: CallNonvirtualMethodA<jfloat>,
    pub CallNonvirtualDoubleMethod: variadic,
    pub CallNonvirtualDoubleMethodV: CallNonvirtualMethodV<jdouble>,
    pub CallNonvirtualDoubleMethodA: CallNonvirtualMethodA<jdouble>,
    pub CallNonvirtualVoidMethod: variadic,
    pub CallNonvirtualVoidMethodV: CallNonvirtualMethodV<()>,
    pub CallNonvirtualVoidMethodA: CallNonvirtualMethodA<()>,

    // 94-112
    pub GetFieldID: MemberId<jfieldID>,
    pub GetObjectField: GetField<jobject>,
    pub GetBooleanField: GetField<jboolean>,
    pub GetByteField: GetField<jbyte>,
    pub GetCharField: GetField<jchar>,
    pub GetShortField: GetField<jshort>,
    pub GetIntField: GetField<jint>,
    pub GetLongField: GetField<jlong>,
    pub GetFloatField: GetField<jfloat>,
    pub GetDoubleField: GetField<jdouble>,
    pub SetObjectField: SetField<jobject>,
    pub SetBooleanField: SetField<jboolean>,
    pub SetByteField: SetField<jbyte>,
    pub SetCharField: SetField<jchar>,
    pub SetShortField: SetField<jshort>,
    pub SetIntField: SetField<jint>,
    pub SetLongField: SetField<jlong>,
    pub SetFloatField: SetField<jfloat>,
    pub SetDoubleField: SetField<jdouble>,

    // 113-143
    pub GetStaticMethodID: MemberId<jmethodID>,
    pub CallStaticObjectMethod: variadic,
    pub CallStaticObjectMethodV: CallStaticMethodV<jobject>,
    pub CallStaticObjectMethodA: CallStaticMethodA<jobject>,
    pub CallStaticBooleanMethod: variadic,
    pub CallStaticBooleanMethodV: CallStaticMethodV<jboolean>,
    pub CallStaticBooleanMethodA: CallStaticMethodA<jboolean>,
    pub CallStaticByteMethod: variadic,
    pub CallStaticByteMethodV: CallStaticMethodV<jbyte>,
    pub CallStaticByteMethodA: CallStaticMethodA<jbyte>,
    pub CallStaticCharMethod: variadic,
    pub CallStaticCharMethodV: CallStaticMethodV<jchar>,
    pub CallStaticCharMethodA: CallStaticMethodA<jchar>,
    pub CallStaticShortMethod: variadic,
    pub CallStaticShortMethodV: CallStaticMethodV<jshort>,
    pub CallStaticShortMethodA: CallStaticMethodA<jshort>,
    pub CallStaticIntMethod: variadic,
    pub CallStaticIntMethodV: CallStaticMethodV<jint>,
    pub CallStaticIntMethodA: CallStaticMethodA<jint>,
    pub CallStaticLongMethod: variadic,
    pub CallStaticLongMethodV: CallStaticMethodV<jlong>,
    pub CallStaticLongMethodA: CallStaticMethodA<jlong>,
    pub CallStaticFloatMethod: variadic,
    pub CallStaticFloatMethodV: CallStaticMethodV<jfloat>,
    pub CallStaticFloatMethodA: CallStaticMethodA<jfloat>,
    pub CallStaticDoubleMethod: variadic,
    pub CallStaticDoubleMethodV: CallStaticMethodV<jdouble>,
    pub CallStaticDoubleMethodA: CallStaticMethodA<jdouble>,
    pub CallStaticVoidMethod: variadic,
    pub CallStaticVoidMethodV: CallStaticMethodV<()>,
    pub CallStaticVoidMethodA: CallStaticMethodA<()>,

    // 144-162
    pub GetStaticFieldID: MemberId<jfieldID>,
    pub GetStaticObjectField: GetStaticField<jobject>,
    pub GetStaticBooleanField: GetStaticField<jboolean>,
    pub GetStaticByteField: GetStaticField<jbyte>,
    pub GetStaticCharField: GetStaticField<jchar>,
    pub GetStaticShortField: GetStaticField<jshort>,
    pub GetStaticIntField: GetStaticField<jint>,
    pub GetStaticLongField: GetStaticField<jlong>,
    pub GetStaticFloatField: GetStaticField<jfloat>,
    pub GetStaticDoubleField: GetStaticField<jdouble>,
    pub SetStaticObjectField: SetStaticField<jobject>,
    pub SetStaticBooleanField: SetStaticField<jboolean>,
    pub SetStaticByteField: SetStaticField<jbyte>,
    pub SetStaticCharField: SetStaticField<jchar>,
    pub SetStaticShortField: SetStaticField<jshort>,
    pub SetStaticIntField: SetStaticField<jint>,
    pub SetStaticLongField: SetStaticField<jlong>,
    pub SetStaticFloatField: SetStaticField<jfloat>,
    pub SetStaticDoubleField: SetStaticField<jdouble>,

    // 163-170
    pub NewString: unsafe extern "system" fn(env: *mut JNIEnv, unicode: *const jchar, len: jsize) -> jstring,
    pub GetStringLength: unsafe extern "system" fn(env: *mut JNIEnv, str: jstring) -> jsize,
    pub GetStringChars:
        unsafe extern "system" fn(env: *mut JNIEnv, str: jstring, isCopy: *mut jboolean) -> *const jchar,
    pub ReleaseStringChars: unsafe extern "system" fn(env: *mut JNIEnv, str: jstring, chars: *const jchar),
    pub NewStringUTF: unsafe extern "system" fn(env: *mut JNIEnv, utf: *const c_char) -> jstring,
    pub GetStringUTFLength: unsafe extern "system" fn(env: *mut JNIEnv, str: jstring) -> jsize,
    pub GetStringUTFChars:
        unsafe extern "system" fn(env: *mut JNIEnv, str: jstring, isCopy: *mut jboolean) -> *const c_char,
    pub ReleaseStringUTFChars: unsafe extern "system" fn(env: *mut JNIEnv, str: jstring, chars: *const c_char),

    // 171-174
    pub GetArrayLength: unsafe extern "system" fn(env: *mut JNIEnv, array: jarray) -> jsize,
    pub NewObjectArray:
        unsafe extern "system" fn(env: *mut JNIEnv, len: jsize, clazz: jclass, init: jobject) -> jobjectArray,
    pub GetObjectArrayElement:
        unsafe extern "system" fn(env: *mut JNIEnv, array: jobjectArray, index: jsize) -> jobject,
    pub SetObjectArrayElement:
        unsafe extern "system" fn(env: *mut JNIEnv, array: jobjectArray, index: jsize, val: jobject),

    // 175-182
    pub NewBooleanArray: NewArray,
    pub NewByteArray: NewArray,
    pub NewCharArray: NewArray,
    pub NewShortArray: NewArray,
    pub NewIntArray: NewArray,
    pub NewLongArray: NewArray,
    pub NewFloatArray: NewArray,
    pub NewDoubleArray: NewArray,

    // 183-190
    pub GetBooleanArrayElements: GetArrayElements<jboolean>,
    pub GetByteArrayElements: GetArrayElements<jbyte>,
    pub GetCharArrayElements: GetArrayElements<jchar>,
    pub GetShortArrayElements: GetArrayElements<jshort>,
    pub GetIntArrayElements: GetArrayElements<jint>,
    pub GetLongArrayElements: GetArrayElements<jlong>,
    pub GetFloatArrayElements: GetArrayElements<jfloat>,
    pub GetDoubleArrayElements: GetArrayElements<jdouble>,

    // 191-198
    pub ReleaseBooleanArrayElements: ReleaseArrayElements<jboolean>,
    pub ReleaseByteArrayElements: ReleaseArrayElements<jbyte>,
    pub ReleaseCharArrayElements: ReleaseArrayElements<jchar>,
    pub ReleaseShortArrayElements: ReleaseArrayElements<jshort>,
    pub ReleaseIntArrayElements: ReleaseArrayElements<jint>,
    pub ReleaseLongArrayElements: ReleaseArrayElements<jlong>,
    pub ReleaseFloatArrayElements: ReleaseArrayElements<jfloat>,
    pub ReleaseDoubleArrayElements: ReleaseArrayElements<jdouble>,

    // 199-206
    pub GetBooleanArrayRegion: GetArrayRegion<jboolean>,
    pub GetByteArrayRegion: GetArrayRegion<jbyte>,
    pub GetCharArrayRegion: GetArrayRegion<jchar>,
    pub GetShortArrayRegion: GetArrayRegion<jshort>,
    pub GetIntArrayRegion: GetArrayRegion<jint>,
    pub GetLongArrayRegion: GetArrayRegion<jlong>,
    pub GetFloatArrayRegion: GetArrayRegion<jfloat>,
    pub GetDoubleArrayRegion: GetArrayRegion<jdouble>,

    // 207-214
    pub SetBooleanArrayRegion: SetArrayRegion<jboolean>,
    pub SetByteArrayRegion: SetArrayRegion<jbyte>,
    pub SetCharArrayRegion: SetArrayRegion<jchar>,
    pub SetShortArrayRegion: SetArrayRegion<jshort>,
    pub SetIntArrayRegion: SetArrayRegion<jint>,
    pub SetLongArrayRegion: SetArrayRegion<jlong>,
    pub SetFloatArrayRegion: SetArrayRegion<jfloat>,
    pub SetDoubleArrayRegion: SetArrayRegion<jdouble>,

    // 215-219
    pub RegisterNatives: unsafe extern "system" fn(
        env: *mut JNIEnv,
        clazz: jclass,
        methods: *const JNINativeMethod,
        nMethods: jint,
    ) -> jint,
    pub UnregisterNatives: unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass) -> jint,
    pub MonitorEnter: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject) -> jint,
    pub MonitorExit: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject) -> jint,
    pub GetJavaVM: unsafe extern "system" fn(env: *mut JNIEnv, vm: *mut *mut JavaVM) -> jint,

    // 220-225
    pub GetStringRegion:
        unsafe extern "system" fn(env: *mut JNIEnv, str: jstring, start: jsize, len: jsize, buf: *mut jchar),
    pub GetStringUTFRegion:
        unsafe extern "system" fn(env: *mut JNIEnv, str: jstring, start: jsize, len: jsize, buf: *mut c_char),
    pub GetPrimitiveArrayCritical:
        unsafe extern "system" fn(env: *mut JNIEnv, array: jarray, isCopy: *mut jboolean) -> *mut c_void,
    pub ReleasePrimitiveArrayCritical:
        unsafe extern "system" fn(env: *mut JNIEnv, array: jarray, carray: *mut c_void, mode: jint),
    pub GetStringCritical:
        unsafe extern "system" fn(env: *mut JNIEnv, string: jstring, isCopy: *mut jboolean) -> *const jchar,
    pub ReleaseStringCritical: unsafe extern "system" fn(env: *mut JNIEnv, string: jstring, cstring: *const jchar),

    // 226-232
    pub NewWeakGlobalRef: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject) -> jweak,
    pub DeleteWeakGlobalRef: unsafe extern "system" fn(env: *mut JNIEnv, ref_: jweak),
    pub ExceptionCheck: unsafe extern "system" fn(env: *mut JNIEnv) -> jboolean,
    pub NewDirectByteBuffer:
        unsafe extern "system" fn(env: *mut JNIEnv, address: *mut c_void, capacity: jlong) -> jobject,
    pub GetDirectBufferAddress: unsafe extern "system" fn(env: *mut JNIEnv, buf: jobject) -> *mut c_void,
    pub GetDirectBufferCapacity: unsafe extern "system" fn(env: *mut JNIEnv, buf: jobject) -> jlong,
    pub GetObjectRefType: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject) -> jobjectRefType,

    // 233 (JNI 9), 234 (JNI 21), 235 (JNI 24)
    pub GetModule: unsafe extern "system" fn(env: *mut JNIEnv, clazz: jclass) -> jobject,
    pub IsVirtualThread: unsafe extern "system" fn(env: *mut JNIEnv, obj: jobject) -> jboolean,
    pub GetStringUTFLengthAsLong: unsafe extern "system" fn(env: *mut JNIEnv, str: jstring) -> jlong,
}

/// Number of pointer-sized slots in [`JNINativeInterface_`].
pub const JNI_NATIVE_INTERFACE_SLOTS: usize = 236;

/// In the C ABI `JNIEnv` is the table pointer itself; native code receives `*mut JNIEnv`.
pub type JNIEnv = *const JNINativeInterface_;

// -----------------------------------------------------------------------------
// JNIInvokeInterface_: the JavaVM table
// -----------------------------------------------------------------------------

#[repr(C)]
pub struct JNIInvokeInterface_ {
    pub reserved0: *mut c_void,
    pub reserved1: *mut c_void,
    pub reserved2: *mut c_void,

    pub DestroyJavaVM: unsafe extern "system" fn(vm: *mut JavaVM) -> jint,
    pub AttachCurrentThread:
        unsafe extern "system" fn(vm: *mut JavaVM, penv: *mut *mut c_void, args: *mut c_void) -> jint,
    pub DetachCurrentThread: unsafe extern "system" fn(vm: *mut JavaVM) -> jint,
    pub GetEnv: unsafe extern "system" fn(vm: *mut JavaVM, penv: *mut *mut c_void, version: jint) -> jint,
    pub AttachCurrentThreadAsDaemon:
        unsafe extern "system" fn(vm: *mut JavaVM, penv: *mut *mut c_void, args: *mut c_void) -> jint,
}

pub type JavaVM = *const JNIInvokeInterface_;

#[repr(C)]
pub struct JavaVMOption {
    pub optionString: *mut c_char,
    pub extraInfo: *mut c_void,
}

#[repr(C)]
pub struct JavaVMInitArgs {
    pub version: jint,
    pub nOptions: jint,
    pub options: *mut JavaVMOption,
    pub ignoreUnrecognized: jboolean,
}

/// Passed as the `args` of `AttachCurrentThread` to name the attached thread.
#[repr(C)]
pub struct JavaVMAttachArgs {
    pub version: jint,
    pub name: *mut c_char,
    pub group: jobject,
}

/// `JNI_CreateJavaVM` as exported by libjvm.
pub type JNI_CreateJavaVM = unsafe extern "system" fn(
    pvm: *mut *mut JavaVM,
    penv: *mut *mut JNIEnv,
    args: *mut JavaVMInitArgs,
) -> jint;

/// `JNI_OnLoad` as looked up by `System.loadLibrary`.
pub type JNI_OnLoadFn = unsafe extern "system" fn(vm: *mut JavaVM, reserved: *mut c_void) -> jint;

// -----------------------------------------------------------------------------
// Dispatch macros
// -----------------------------------------------------------------------------

/// Calls a slot of the JNI function table.
///
/// `env` is a `*mut JNIEnv`; `**env` is the table.
///
/// ```rust,ignore
/// let version = jni_call!(env, GetVersion);
/// ```
#[macro_export]
macro_rules! jni_call {
    ($env:expr, $slot:ident $(, $arg:expr)* $(,)?) => {{
        let env: *mut $crate::sys::jni::JNIEnv = $env;
        ((**env).$slot)(env $(, $arg)*)
    }};
}

/// Calls a slot of the JavaVM invocation table.
#[macro_export]
macro_rules! jvm_call {
    ($vm:expr, $slot:ident $(, $arg:expr)* $(,)?) => {{
        let vm: *mut $crate::sys::jni::JavaVM = $vm;
        ((**vm).$slot)(vm $(, $arg)*)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn native_interface_has_every_slot() {
        assert_eq!(
            size_of::<JNINativeInterface_>(),
            JNI_NATIVE_INTERFACE_SLOTS * size_of::<*mut c_void>()
        );
    }

    #[test]
    fn invoke_interface_has_eight_slots() {
        assert_eq!(size_of::<JNIInvokeInterface_>(), 8 * size_of::<*mut c_void>());
    }

    #[test]
    fn jvalue_is_eight_bytes() {
        assert_eq!(size_of::<jvalue>(), 8);
    }
}
