//! In-process stand-in for a Java VM.
//!
//! Implements the invocation table and the slice of the JNI function table
//! the tests touch; every other slot aborts the process. Object handles are
//! small integers into a shared heap.
//!
//! Classes are known by name. System classes resolve through `FindClass` on
//! any thread. Application classes resolve through `FindClass` only on
//! threads entered with [`MockVm::enter_java_thread`], and through the
//! application class loader everywhere, the way Android treats natively
//! attached threads.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::ffi::{c_void, CStr};
use std::mem::{size_of, MaybeUninit};
use std::os::raw::c_char;
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicIsize, AtomicUsize, Ordering::SeqCst};
use std::sync::Mutex;
use std::thread::{self, ThreadId};

use jni_glue::sys::jni::*;

pub const SYSTEM_CLASSES: &[&str] = &[
    "java/lang/Object",
    "java/lang/String",
    "java/lang/Class",
    "java/lang/ClassLoader",
    "java/lang/Thread",
];
pub const APP_CLASSES: &[&str] = &["com/example/Bridge", "com/example/Callbacks"];

const GET_CLASS_LOADER_ID: usize = 0x10_0001;
const LOADER_FIND_CLASS_ID: usize = 0x10_0002;
const LOADER_LOAD_CLASS_ID: usize = 0x10_0003;

const SUPPORTED_VERSIONS: &[jint] = &[
    JNI_VERSION_1_1,
    JNI_VERSION_1_2,
    JNI_VERSION_1_4,
    JNI_VERSION_1_6,
    JNI_VERSION_1_8,
    JNI_VERSION_9,
    JNI_VERSION_10,
    JNI_VERSION_19,
    JNI_VERSION_20,
    JNI_VERSION_21,
];

#[derive(Clone, Debug)]
enum Obj {
    Class(String),
    Loader,
    Str(String),
    Array { elem_size: usize, data: Vec<u8> },
}

#[derive(Default)]
struct Heap {
    next: usize,
    objects: HashMap<usize, Obj>,
}

#[derive(Default)]
struct Threads {
    attached: HashSet<ThreadId>,
    java: HashSet<ThreadId>,
    envs: HashMap<ThreadId, &'static MockEnv>,
}

/// What a `*mut JNIEnv` handed out by the mock points at.
#[repr(C)]
pub struct MockEnv {
    table: *const JNINativeInterface_,
    vm: &'static MockVm,
    exception: AtomicBool,
}

unsafe impl Send for MockEnv {}
unsafe impl Sync for MockEnv {}

impl MockEnv {
    fn throw(&self) {
        self.exception.store(true, SeqCst);
    }
}

/// What a `*mut JavaVM` handed out by the mock points at.
#[repr(C)]
pub struct MockVm {
    table: *const JNIInvokeInterface_,
    env_table: *const JNINativeInterface_,
    threads: Mutex<Threads>,
    heap: Mutex<Heap>,
    fail_attach: AtomicBool,
    attach_calls: AtomicUsize,
    daemon_attach_calls: AtomicUsize,
    detach_calls: AtomicUsize,
    destroy_calls: AtomicUsize,
    find_class_calls: AtomicUsize,
    loader_lookups: AtomicUsize,
    live_globals: AtomicIsize,
    deleted_locals: AtomicUsize,
    last_thread_name: Mutex<Option<String>>,
}

unsafe impl Send for MockVm {}
unsafe impl Sync for MockVm {}

impl MockVm {
    /// A fresh VM with no thread attached. Lives for the rest of the test binary.
    pub fn new() -> &'static MockVm {
        let _ = env_logger::builder().is_test(true).try_init();
        Box::leak(Box::new(MockVm {
            table: Box::leak(Box::new(invoke_table())),
            env_table: Box::leak(Box::new(native_table())),
            threads: Mutex::new(Threads::default()),
            heap: Mutex::new(Heap::default()),
            fail_attach: AtomicBool::new(false),
            attach_calls: AtomicUsize::new(0),
            daemon_attach_calls: AtomicUsize::new(0),
            detach_calls: AtomicUsize::new(0),
            destroy_calls: AtomicUsize::new(0),
            find_class_calls: AtomicUsize::new(0),
            loader_lookups: AtomicUsize::new(0),
            live_globals: AtomicIsize::new(0),
            deleted_locals: AtomicUsize::new(0),
            last_thread_name: Mutex::new(None),
        }))
    }

    pub fn raw(&'static self) -> *mut JavaVM {
        self as *const MockVm as *mut JavaVM
    }

    /// Marks the calling thread as one the VM created (running Java code)
    /// and returns its environment.
    pub fn enter_java_thread(&'static self) -> *mut JNIEnv {
        let id = thread::current().id();
        let mut threads = self.threads.lock().unwrap();
        threads.attached.insert(id);
        threads.java.insert(id);
        self.env_ptr(&mut threads)
    }

    fn env_ptr(&'static self, threads: &mut Threads) -> *mut JNIEnv {
        let env = *threads
            .envs
            .entry(thread::current().id())
            .or_insert_with(|| {
                let env: &'static MockEnv = Box::leak(Box::new(MockEnv {
                    table: self.env_table,
                    vm: self,
                    exception: AtomicBool::new(false),
                }));
                env
            });
        env as *const MockEnv as *mut JNIEnv
    }

    pub fn set_fail_attach(&self, fail: bool) {
        self.fail_attach.store(fail, SeqCst);
    }

    pub fn is_attached(&self) -> bool {
        self.threads.lock().unwrap().attached.contains(&thread::current().id())
    }

    /// Pending-exception flag of the calling thread's environment.
    pub fn exception_pending(&self) -> bool {
        self.threads
            .lock()
            .unwrap()
            .envs
            .get(&thread::current().id())
            .map_or(false, |env| env.exception.load(SeqCst))
    }

    pub fn attach_count(&self) -> usize {
        self.attach_calls.load(SeqCst)
    }

    pub fn daemon_attach_count(&self) -> usize {
        self.daemon_attach_calls.load(SeqCst)
    }

    pub fn detach_count(&self) -> usize {
        self.detach_calls.load(SeqCst)
    }

    pub fn destroy_count(&self) -> usize {
        self.destroy_calls.load(SeqCst)
    }

    pub fn find_class_count(&self) -> usize {
        self.find_class_calls.load(SeqCst)
    }

    pub fn loader_lookup_count(&self) -> usize {
        self.loader_lookups.load(SeqCst)
    }

    pub fn live_global_refs(&self) -> isize {
        self.live_globals.load(SeqCst)
    }

    pub fn deleted_local_refs(&self) -> usize {
        self.deleted_locals.load(SeqCst)
    }

    pub fn last_thread_name(&self) -> Option<String> {
        self.last_thread_name.lock().unwrap().clone()
    }

    /// Name of the class behind `obj`, if it is a class handle.
    pub fn class_name(&self, obj: jobject) -> Option<String> {
        match self.lookup(obj) {
            Some(Obj::Class(name)) => Some(name),
            _ => None,
        }
    }

    fn alloc(&self, obj: Obj) -> jobject {
        let mut heap = self.heap.lock().unwrap();
        heap.next += 1;
        let id = heap.next;
        heap.objects.insert(id, obj);
        id as jobject
    }

    fn lookup(&self, handle: jobject) -> Option<Obj> {
        self.heap.lock().unwrap().objects.get(&(handle as usize)).cloned()
    }

    fn remove(&self, handle: jobject) -> bool {
        self.heap.lock().unwrap().objects.remove(&(handle as usize)).is_some()
    }
}

unsafe fn mock_vm(vm: *mut JavaVM) -> &'static MockVm {
    &*(vm as *const MockVm)
}

unsafe fn mock_env(env: *mut JNIEnv) -> &'static MockEnv {
    &*(env as *const MockEnv)
}

unsafe fn c_str<'a>(s: *const c_char) -> &'a str {
    CStr::from_ptr(s).to_str().unwrap_or("")
}

// -----------------------------------------------------------------------------
// Invocation interface
// -----------------------------------------------------------------------------

fn invoke_table() -> JNIInvokeInterface_ {
    JNIInvokeInterface_ {
        reserved0: ptr::null_mut(),
        reserved1: ptr::null_mut(),
        reserved2: ptr::null_mut(),
        DestroyJavaVM: destroy_java_vm,
        AttachCurrentThread: attach_current_thread,
        DetachCurrentThread: detach_current_thread,
        GetEnv: get_env,
        AttachCurrentThreadAsDaemon: attach_current_thread_as_daemon,
    }
}

unsafe extern "system" fn destroy_java_vm(vm: *mut JavaVM) -> jint {
    mock_vm(vm).destroy_calls.fetch_add(1, SeqCst);
    JNI_OK
}

unsafe extern "system" fn get_env(vm: *mut JavaVM, penv: *mut *mut c_void, version: jint) -> jint {
    let vm = mock_vm(vm);
    *penv = ptr::null_mut();
    if !SUPPORTED_VERSIONS.contains(&version) {
        return JNI_EVERSION;
    }
    let mut threads = vm.threads.lock().unwrap();
    if !threads.attached.contains(&thread::current().id()) {
        return JNI_EDETACHED;
    }
    *penv = vm.env_ptr(&mut threads) as *mut c_void;
    JNI_OK
}

unsafe fn attach(vm: &'static MockVm, penv: *mut *mut c_void, args: *mut c_void) -> jint {
    if vm.fail_attach.load(SeqCst) {
        return JNI_ERR;
    }
    if !args.is_null() {
        let args = &*(args as *const JavaVMAttachArgs);
        if !args.name.is_null() {
            *vm.last_thread_name.lock().unwrap() = Some(c_str(args.name).to_string());
        }
    }
    let mut threads = vm.threads.lock().unwrap();
    threads.attached.insert(thread::current().id());
    *penv = vm.env_ptr(&mut threads) as *mut c_void;
    JNI_OK
}

unsafe extern "system" fn attach_current_thread(vm: *mut JavaVM, penv: *mut *mut c_void, args: *mut c_void) -> jint {
    let vm = mock_vm(vm);
    vm.attach_calls.fetch_add(1, SeqCst);
    attach(vm, penv, args)
}

unsafe extern "system" fn attach_current_thread_as_daemon(
    vm: *mut JavaVM,
    penv: *mut *mut c_void,
    args: *mut c_void,
) -> jint {
    let vm = mock_vm(vm);
    vm.daemon_attach_calls.fetch_add(1, SeqCst);
    attach(vm, penv, args)
}

unsafe extern "system" fn detach_current_thread(vm: *mut JavaVM) -> jint {
    let vm = mock_vm(vm);
    vm.detach_calls.fetch_add(1, SeqCst);
    let id = thread::current().id();
    let mut threads = vm.threads.lock().unwrap();
    if threads.java.contains(&id) {
        // still has Java frames on its stack
        return JNI_ERR;
    }
    if threads.attached.remove(&id) {
        JNI_OK
    } else {
        JNI_EDETACHED
    }
}

// -----------------------------------------------------------------------------
// Native interface
// -----------------------------------------------------------------------------

unsafe extern "system" fn missing_slot() {
    eprintln!("mock VM: called a JNI slot it does not implement");
    std::process::abort();
}

fn native_table() -> JNINativeInterface_ {
    let mut raw = MaybeUninit::<JNINativeInterface_>::uninit();
    let slots = raw.as_mut_ptr() as *mut usize;
    for i in 0..JNI_NATIVE_INTERFACE_SLOTS {
        unsafe { slots.add(i).write(missing_slot as usize) };
    }
    let mut t = unsafe { raw.assume_init() };

    t.GetVersion = get_version;
    t.FindClass = find_class;
    t.ExceptionCheck = exception_check;
    t.ExceptionClear = exception_clear;
    t.ExceptionDescribe = exception_describe;
    t.NewGlobalRef = new_global_ref;
    t.DeleteGlobalRef = delete_global_ref;
    t.DeleteLocalRef = delete_local_ref;
    t.IsSameObject = is_same_object;
    t.GetObjectClass = get_object_class;
    t.GetMethodID = get_method_id;
    t.CallObjectMethodA = call_object_method_a;
    t.NewStringUTF = new_string_utf;
    t.GetArrayLength = get_array_length;

    t.NewBooleanArray = new_array::<jboolean>;
    t.NewByteArray = new_array::<jbyte>;
    t.NewCharArray = new_array::<jchar>;
    t.NewShortArray = new_array::<jshort>;
    t.NewIntArray = new_array::<jint>;
    t.NewLongArray = new_array::<jlong>;
    t.NewFloatArray = new_array::<jfloat>;
    t.NewDoubleArray = new_array::<jdouble>;

    t.GetBooleanArrayRegion = get_region::<jboolean>;
    t.GetByteArrayRegion = get_region::<jbyte>;
    t.GetCharArrayRegion = get_region::<jchar>;
    t.GetShortArrayRegion = get_region::<jshort>;
    t.GetIntArrayRegion = get_region::<jint>;
    t.GetLongArrayRegion = get_region::<jlong>;
    t.GetFloatArrayRegion = get_region::<jfloat>;
    t.GetDoubleArrayRegion = get_region::<jdouble>;

    t.SetBooleanArrayRegion = set_region::<jboolean>;
    t.SetByteArrayRegion = set_region::<jbyte>;
    t.SetCharArrayRegion = set_region::<jchar>;
    t.SetShortArrayRegion = set_region::<jshort>;
    t.SetIntArrayRegion = set_region::<jint>;
    t.SetLongArrayRegion = set_region::<jlong>;
    t.SetFloatArrayRegion = set_region::<jfloat>;
    t.SetDoubleArrayRegion = set_region::<jdouble>;

    t.GetPrimitiveArrayCritical = get_primitive_array_critical;
    t.ReleasePrimitiveArrayCritical = release_primitive_array_critical;
    t
}

unsafe extern "system" fn get_version(_env: *mut JNIEnv) -> jint {
    JNI_VERSION_21
}

unsafe extern "system" fn find_class(env: *mut JNIEnv, name: *const c_char) -> jclass {
    let env = mock_env(env);
    let vm = env.vm;
    vm.find_class_calls.fetch_add(1, SeqCst);
    let name = c_str(name);
    let java_thread = vm.threads.lock().unwrap().java.contains(&thread::current().id());
    if SYSTEM_CLASSES.contains(&name) || (java_thread && APP_CLASSES.contains(&name)) {
        vm.alloc(Obj::Class(name.to_string()))
    } else {
        env.throw();
        ptr::null_mut()
    }
}

unsafe extern "system" fn exception_check(env: *mut JNIEnv) -> jboolean {
    mock_env(env).exception.load(SeqCst) as jboolean
}

unsafe extern "system" fn exception_clear(env: *mut JNIEnv) {
    mock_env(env).exception.store(false, SeqCst);
}

unsafe extern "system" fn exception_describe(env: *mut JNIEnv) {
    if mock_env(env).exception.load(SeqCst) {
        eprintln!("mock VM: exception pending");
    }
}

unsafe extern "system" fn new_global_ref(env: *mut JNIEnv, obj: jobject) -> jobject {
    let vm = mock_env(env).vm;
    match vm.lookup(obj) {
        Some(o) => {
            vm.live_globals.fetch_add(1, SeqCst);
            vm.alloc(o)
        }
        None => ptr::null_mut(),
    }
}

unsafe extern "system" fn delete_global_ref(env: *mut JNIEnv, gref: jobject) {
    let vm = mock_env(env).vm;
    if vm.remove(gref) {
        vm.live_globals.fetch_sub(1, SeqCst);
    }
}

unsafe extern "system" fn delete_local_ref(env: *mut JNIEnv, obj: jobject) {
    let vm = mock_env(env).vm;
    if vm.remove(obj) {
        vm.deleted_locals.fetch_add(1, SeqCst);
    }
}

unsafe extern "system" fn is_same_object(env: *mut JNIEnv, a: jobject, b: jobject) -> jboolean {
    if a.is_null() || b.is_null() {
        return (a.is_null() && b.is_null()) as jboolean;
    }
    let vm = mock_env(env).vm;
    let same = match (vm.lookup(a), vm.lookup(b)) {
        (Some(Obj::Class(x)), Some(Obj::Class(y))) => x == y,
        _ => a == b,
    };
    same as jboolean
}

unsafe extern "system" fn get_object_class(env: *mut JNIEnv, obj: jobject) -> jclass {
    let vm = mock_env(env).vm;
    let class = match vm.lookup(obj) {
        Some(Obj::Class(_)) => "java/lang/Class",
        Some(Obj::Loader) => "java/lang/ClassLoader",
        Some(Obj::Str(_)) => "java/lang/String",
        Some(Obj::Array { .. }) => "java/lang/Object",
        None => return ptr::null_mut(),
    };
    vm.alloc(Obj::Class(class.to_string()))
}

unsafe extern "system" fn get_method_id(
    env: *mut JNIEnv,
    clazz: jclass,
    name: *const c_char,
    sig: *const c_char,
) -> jmethodID {
    let env = mock_env(env);
    let class = env.vm.class_name(clazz);
    match (class.as_deref(), c_str(name), c_str(sig)) {
        (Some("java/lang/Class"), "getClassLoader", "()Ljava/lang/ClassLoader;") => {
            GET_CLASS_LOADER_ID as jmethodID
        }
        (Some("java/lang/ClassLoader"), "findClass", "(Ljava/lang/String;)Ljava/lang/Class;") => {
            LOADER_FIND_CLASS_ID as jmethodID
        }
        (Some("java/lang/ClassLoader"), "loadClass", "(Ljava/lang/String;)Ljava/lang/Class;") => {
            LOADER_LOAD_CLASS_ID as jmethodID
        }
        _ => {
            env.throw();
            ptr::null_mut()
        }
    }
}

unsafe extern "system" fn call_object_method_a(
    env: *mut JNIEnv,
    obj: jobject,
    method_id: jmethodID,
    args: *const jvalue,
) -> jobject {
    let env = mock_env(env);
    let vm = env.vm;
    match method_id as usize {
        GET_CLASS_LOADER_ID => match vm.lookup(obj) {
            Some(Obj::Class(name)) if APP_CLASSES.contains(&name.as_str()) => vm.alloc(Obj::Loader),
            // bootstrap classes report a null loader
            Some(Obj::Class(_)) => ptr::null_mut(),
            _ => {
                env.throw();
                ptr::null_mut()
            }
        },
        // findClass only sees the loader's own classes; loadClass asks the
        // parent (bootstrap) first
        LOADER_FIND_CLASS_ID => loader_lookup(env, obj, *args, false),
        LOADER_LOAD_CLASS_ID => loader_lookup(env, obj, *args, true),
        _ => {
            env.throw();
            ptr::null_mut()
        }
    }
}

unsafe fn loader_lookup(env: &MockEnv, loader: jobject, arg: jvalue, delegate: bool) -> jobject {
    let vm = env.vm;
    vm.loader_lookups.fetch_add(1, SeqCst);
    match (vm.lookup(loader), vm.lookup(arg.l)) {
        (Some(Obj::Loader), Some(Obj::Str(binary))) if !binary.contains('/') => {
            let internal = binary.replace('.', "/");
            let visible = APP_CLASSES.contains(&internal.as_str())
                || (delegate && SYSTEM_CLASSES.contains(&internal.as_str()));
            if visible {
                vm.alloc(Obj::Class(internal))
            } else {
                env.throw();
                ptr::null_mut()
            }
        }
        _ => {
            env.throw();
            ptr::null_mut()
        }
    }
}

unsafe extern "system" fn new_string_utf(env: *mut JNIEnv, utf: *const c_char) -> jstring {
    mock_env(env).vm.alloc(Obj::Str(c_str(utf).to_string()))
}

unsafe extern "system" fn get_array_length(env: *mut JNIEnv, array: jarray) -> jsize {
    match mock_env(env).vm.lookup(array) {
        Some(Obj::Array { elem_size, data }) => (data.len() / elem_size) as jsize,
        _ => 0,
    }
}

unsafe extern "system" fn new_array<T>(env: *mut JNIEnv, len: jsize) -> jarray {
    let env = mock_env(env);
    if len < 0 {
        env.throw();
        return ptr::null_mut();
    }
    env.vm.alloc(Obj::Array {
        elem_size: size_of::<T>(),
        data: vec![0; len as usize * size_of::<T>()],
    })
}

/// Byte range of `[start, start + len)`, or `None` if out of bounds or the
/// element type does not match.
fn region_bytes<T>(elem_size: usize, data_len: usize, start: jsize, len: jsize) -> Option<(usize, usize)> {
    if elem_size != size_of::<T>() || start < 0 || len < 0 {
        return None;
    }
    let (start, len) = (start as usize, len as usize);
    if start + len > data_len / elem_size {
        return None;
    }
    Some((start * elem_size, len * elem_size))
}

unsafe extern "system" fn get_region<T>(env: *mut JNIEnv, array: jarray, start: jsize, len: jsize, buf: *mut T) {
    let env = mock_env(env);
    let heap = env.vm.heap.lock().unwrap();
    let range = match heap.objects.get(&(array as usize)) {
        Some(Obj::Array { elem_size, data }) => {
            region_bytes::<T>(*elem_size, data.len(), start, len).map(|(off, n)| (data, off, n))
        }
        _ => None,
    };
    match range {
        Some((data, off, n)) => ptr::copy_nonoverlapping(data.as_ptr().add(off), buf as *mut u8, n),
        None => env.throw(),
    }
}

unsafe extern "system" fn set_region<T>(env: *mut JNIEnv, array: jarray, start: jsize, len: jsize, buf: *const T) {
    let env = mock_env(env);
    let mut heap = env.vm.heap.lock().unwrap();
    match heap.objects.get_mut(&(array as usize)) {
        Some(Obj::Array { elem_size, data }) => match region_bytes::<T>(*elem_size, data.len(), start, len) {
            Some((off, n)) => ptr::copy_nonoverlapping(buf as *const u8, data.as_mut_ptr().add(off), n),
            None => env.throw(),
        },
        _ => env.throw(),
    }
}

unsafe extern "system" fn get_primitive_array_critical(
    env: *mut JNIEnv,
    array: jarray,
    is_copy: *mut jboolean,
) -> *mut c_void {
    let env = mock_env(env);
    let mut heap = env.vm.heap.lock().unwrap();
    match heap.objects.get_mut(&(array as usize)) {
        Some(Obj::Array { data, .. }) => {
            if !is_copy.is_null() {
                *is_copy = JNI_FALSE;
            }
            data.as_mut_ptr() as *mut c_void
        }
        _ => {
            env.throw();
            ptr::null_mut()
        }
    }
}

unsafe extern "system" fn release_primitive_array_critical(
    _env: *mut JNIEnv,
    _array: jarray,
    _carray: *mut c_void,
    _mode: jint,
) {
}
