//! VM registry: thread attachment and class-loader caching.
//!
//! A [`Runtime`] owns the `JavaVM` pointer and hands each thread its
//! [`JniEnv`], attaching threads the VM has never seen. It moves through
//! three states, never backwards:
//!
//! ```text
//! Unset --set_vm--> VM-Set --setup_class_loader--> ClassLoader-Ready
//! ```
//!
//! Environment lookups need at least VM-Set. [`Runtime::find_class`] with
//! [`ClassLookup::CachedLoader`] needs ClassLoader-Ready.
//!
//! Most libraries use the single process-wide instance through the free
//! functions at the bottom of this module ([`set_vm`], [`get_env`], ...),
//! which [`crate::export_jni_onload!`] wires to `JNI_OnLoad`. Tests and
//! embedders can build their own `Runtime` instead.
//!
//! # Class loading from native threads
//!
//! `FindClass` resolves through the loader of the Java method that called
//! into native code. A thread attached from native code has no such method
//! on its stack, so on Android `FindClass` only sees system classes there.
//! [`Runtime::setup_class_loader`] captures the application class loader
//! while running on a Java thread; [`Runtime::find_class`] then resolves
//! through it from any thread.
//!
//! # Concurrency
//!
//! `set_vm` and `setup_class_loader` are meant to run once, from the thread
//! that loads the library, before other threads call in. After that every
//! method may be called from any thread.

use std::ffi::{c_void, CString, NulError};
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::OnceLock;

use log::{debug, error, info, warn};

use crate::diagnostics::LOG_TARGET;
use crate::env::{JniEnv, LocalRef};
use crate::error::{Error, Result};
use crate::sys::jni;

const CLASS_LOADER_CLASS: &str = "java/lang/ClassLoader";
const GET_CLASS_LOADER: (&str, &str) = ("getClassLoader", "()Ljava/lang/ClassLoader;");
const LOADER_LOAD_CLASS: (&str, &str) = ("loadClass", "(Ljava/lang/String;)Ljava/lang/Class;");

/// How [`Runtime::find_class`] resolves class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLookup {
    /// Resolve through the loader captured by [`Runtime::setup_class_loader`].
    CachedLoader,
    /// Resolve through plain `FindClass`; `setup_class_loader` is a no-op.
    DefaultLookup,
}

impl Default for ClassLookup {
    fn default() -> Self {
        if cfg!(target_os = "android") {
            ClassLookup::CachedLoader
        } else {
            ClassLookup::DefaultLookup
        }
    }
}

/// Settings for a [`Runtime`].
///
/// ```rust,ignore
/// let config = RuntimeConfig::new()
///     .jni_version(jni::JNI_VERSION_1_8)
///     .attach_as_daemon(true)
///     .thread_name("native-worker")?
///     .class_lookup(ClassLookup::CachedLoader);
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    jni_version: jni::jint,
    attach_as_daemon: bool,
    thread_name: Option<CString>,
    class_lookup: ClassLookup,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            jni_version: jni::JNI_VERSION_1_6,
            attach_as_daemon: false,
            thread_name: None,
            class_lookup: ClassLookup::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// JNI version requested from `GetEnv` and returned from `JNI_OnLoad`.
    pub fn jni_version(mut self, version: jni::jint) -> Self {
        self.jni_version = version;
        self
    }

    /// Attach threads as daemons so they do not keep the VM alive.
    pub fn attach_as_daemon(mut self, value: bool) -> Self {
        self.attach_as_daemon = value;
        self
    }

    /// Name given to threads this runtime attaches.
    pub fn thread_name(mut self, name: &str) -> std::result::Result<Self, NulError> {
        self.thread_name = Some(CString::new(name)?);
        Ok(self)
    }

    pub fn class_lookup(mut self, lookup: ClassLookup) -> Self {
        self.class_lookup = lookup;
        self
    }

    pub fn version(&self) -> jni::jint {
        self.jni_version
    }

    pub fn is_daemon(&self) -> bool {
        self.attach_as_daemon
    }

    pub fn name(&self) -> Option<&str> {
        self.thread_name.as_ref().and_then(|n| n.to_str().ok())
    }

    pub fn lookup(&self) -> ClassLookup {
        self.class_lookup
    }
}

/// Global reference to the application class loader plus its `loadClass` method.
struct ClassLoaderCache {
    loader: jni::jobject,
    load_class: jni::jmethodID,
}

// A global reference and a method ID are valid on every attached thread.
unsafe impl Send for ClassLoaderCache {}
unsafe impl Sync for ClassLoaderCache {}

/// The environment of the calling thread, and whether this lookup attached it.
#[derive(Debug, Clone, Copy)]
pub struct ThreadEnv {
    pub env: JniEnv,
    pub attached_here: bool,
}

/// Owns the VM handle and the class-loader cache.
#[derive(Default)]
pub struct Runtime {
    vm: AtomicPtr<jni::JavaVM>,
    config: RuntimeConfig,
    class_loader: OnceLock<ClassLoaderCache>,
}

impl Runtime {
    /// Creates a runtime in the Unset state.
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            vm: AtomicPtr::new(ptr::null_mut()),
            config,
            class_loader: OnceLock::new(),
        }
    }

    /// Creates a runtime that already holds `vm`.
    pub fn with_vm(vm: *mut jni::JavaVM, config: RuntimeConfig) -> Self {
        let runtime = Self::new(config);
        runtime.set_vm(vm);
        runtime
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Stores the VM handle.
    pub fn set_vm(&self, vm: *mut jni::JavaVM) {
        debug!(target: LOG_TARGET, "storing Java VM {vm:p}");
        self.vm.store(vm, Ordering::Release);
    }

    /// Returns the stored VM handle, or null if none was set.
    pub fn get_vm(&self) -> *mut jni::JavaVM {
        self.vm.load(Ordering::Acquire)
    }

    /// Returns the calling thread's environment, attaching the thread if needed.
    ///
    /// Only a thread `GetEnv` reports as detached is attached. Any other
    /// failure, such as an unsupported version, is returned as
    /// [`Error::UnsupportedVersion`] and leaves the thread untouched.
    pub fn lookup_env(&self) -> Result<ThreadEnv> {
        let vm = self.get_vm();
        if vm.is_null() {
            error!(target: LOG_TARGET, "no Java VM registered");
            return Err(Error::NoVirtualMachine);
        }

        let mut env: *mut c_void = ptr::null_mut();
        let status = unsafe { crate::jvm_call!(vm, GetEnv, &mut env, self.config.jni_version) };
        match status {
            jni::JNI_OK if !env.is_null() => {
                return Ok(ThreadEnv {
                    env: unsafe { JniEnv::from_raw(env as *mut jni::JNIEnv) },
                    attached_here: false,
                });
            }
            jni::JNI_EDETACHED => {}
            _ => {
                error!(
                    target: LOG_TARGET,
                    "GetEnv rejected JNI version {:#x} ({status})",
                    self.config.jni_version
                );
                return Err(Error::UnsupportedVersion(status));
            }
        }

        debug!(target: LOG_TARGET, "thread not attached, attaching current thread");
        let env = self.attach(vm)?;
        Ok(ThreadEnv {
            env,
            attached_here: true,
        })
    }

    fn attach(&self, vm: *mut jni::JavaVM) -> Result<JniEnv> {
        let mut args = jni::JavaVMAttachArgs {
            version: self.config.jni_version,
            name: self
                .config
                .thread_name
                .as_ref()
                .map_or(ptr::null_mut(), |n| n.as_ptr() as *mut _),
            group: ptr::null_mut(),
        };
        let args_ptr = if self.config.thread_name.is_some() {
            &mut args as *mut jni::JavaVMAttachArgs as *mut c_void
        } else {
            ptr::null_mut()
        };

        let mut env: *mut c_void = ptr::null_mut();
        let status = unsafe {
            if self.config.attach_as_daemon {
                crate::jvm_call!(vm, AttachCurrentThreadAsDaemon, &mut env, args_ptr)
            } else {
                crate::jvm_call!(vm, AttachCurrentThread, &mut env, args_ptr)
            }
        };
        if status != jni::JNI_OK {
            error!(target: LOG_TARGET, "failed to attach current thread to Java VM ({status})");
            return Err(Error::AttachFailed(status));
        }
        if env.is_null() {
            error!(target: LOG_TARGET, "AttachCurrentThread succeeded without an environment");
            return Err(Error::AttachFailed(jni::JNI_ERR));
        }

        debug!(
            target: LOG_TARGET,
            "attached thread {:?} to Java VM",
            std::thread::current().name()
        );
        Ok(unsafe { JniEnv::from_raw(env as *mut jni::JNIEnv) })
    }

    /// Returns the calling thread's environment, attaching the thread if needed.
    ///
    /// A thread attached here stays attached; use [`Runtime::needs_detach`]
    /// or [`Runtime::attach_scoped`] when it should be detached later.
    pub fn get_env(&self) -> Result<JniEnv> {
        self.lookup_env().map(|t| t.env)
    }

    /// Like [`Runtime::get_env`], also reporting whether this call attached
    /// the thread. Yields `(None, false)` if no VM is set or attaching failed.
    pub fn needs_detach(&self) -> (Option<JniEnv>, bool) {
        match self.lookup_env() {
            Ok(t) => (Some(t.env), t.attached_here),
            Err(_) => (None, false),
        }
    }

    /// Detaches the calling thread.
    ///
    /// Only call this on a thread this runtime attached. Detaching a thread
    /// the VM created, or detaching twice, is left to the VM to reject.
    pub fn detach_current_thread(&self) -> Result<()> {
        let vm = self.get_vm();
        if vm.is_null() {
            return Err(Error::NoVirtualMachine);
        }
        let status = unsafe { crate::jvm_call!(vm, DetachCurrentThread) };
        if status != jni::JNI_OK {
            warn!(target: LOG_TARGET, "DetachCurrentThread returned {status}");
            return Err(Error::DetachFailed(status));
        }
        debug!(
            target: LOG_TARGET,
            "detached thread {:?} from Java VM",
            std::thread::current().name()
        );
        Ok(())
    }

    /// Returns the environment inside a guard that detaches on drop, if and
    /// only if this call attached the thread.
    pub fn attach_scoped(&self) -> Result<AttachGuard<'_>> {
        let ThreadEnv { env, attached_here } = self.lookup_env()?;
        Ok(AttachGuard {
            runtime: self,
            env,
            attached_here,
        })
    }

    /// Captures the class loader of `root_class_name` for later [`Runtime::find_class`] calls.
    ///
    /// Run this once, on a thread the VM created (typically inside
    /// `JNI_OnLoad`), after [`Runtime::set_vm`]. With
    /// [`ClassLookup::DefaultLookup`] it does nothing. A thread attached only
    /// for this call is detached again before it returns.
    pub fn setup_class_loader(&self, root_class_name: &str) -> Result<()> {
        if self.config.class_lookup == ClassLookup::DefaultLookup {
            debug!(target: LOG_TARGET, "default class lookup in use, skipping class loader setup");
            return Ok(());
        }
        if self.class_loader.get().is_some() {
            return Err(Error::ClassLoaderAlreadySet);
        }

        let guard = self.attach_scoped()?;
        let env = guard.env();
        let root = LocalRef::new(&env, env.find_class(root_class_name)?);
        let class_class = LocalRef::new(&env, env.get_object_class(root.get()));
        let get_loader = env.get_method_id(class_class.get(), GET_CLASS_LOADER.0, GET_CLASS_LOADER.1)?;

        let loader = LocalRef::new(&env, env.call_object_method(root.get(), get_loader, &[]));
        if loader.get().is_null() {
            return Err(Error::NullClassLoader(root_class_name.to_string()));
        }

        let loader_class = LocalRef::new(&env, env.find_class(CLASS_LOADER_CLASS)?);
        let load_class = env.get_method_id(loader_class.get(), LOADER_LOAD_CLASS.0, LOADER_LOAD_CLASS.1)?;

        let cache = ClassLoaderCache {
            loader: env.new_global_ref(loader.get()),
            load_class,
        };
        if let Err(lost) = self.class_loader.set(cache) {
            env.delete_global_ref(lost.loader);
            return Err(Error::ClassLoaderAlreadySet);
        }

        info!(target: LOG_TARGET, "class loader of {root_class_name} cached");
        Ok(())
    }

    /// True once [`Runtime::setup_class_loader`] has captured a loader.
    pub fn is_class_loader_ready(&self) -> bool {
        self.class_loader.get().is_some()
    }

    /// Resolves a class by its fully qualified name.
    ///
    /// Accepts either separator ("java/lang/String" or "java.lang.String").
    /// On failure the VM's pending exception, if any, is left in place.
    pub fn find_class(&self, name: &str) -> Result<jni::jclass> {
        match self.config.class_lookup {
            ClassLookup::DefaultLookup => {
                let env = self.get_env()?;
                env.find_class(&name.replace('.', "/"))
            }
            ClassLookup::CachedLoader => {
                let cache = self.class_loader.get().ok_or(Error::ClassLoaderNotReady)?;
                let env = self.get_env()?;

                let binary_name = LocalRef::new(&env, env.new_string_utf(&name.replace('/', "."))?);
                let cls = env.call_object_method(
                    cache.loader,
                    cache.load_class,
                    &[jni::jvalue { l: binary_name.get() }],
                );
                if cls.is_null() {
                    Err(Error::ClassNotFound(name.to_string()))
                } else {
                    Ok(cls)
                }
            }
        }
    }
}

/// Environment of the current thread; detaches on drop if it attached.
///
/// ```rust,ignore
/// std::thread::spawn(move || {
///     let guard = jni_glue::global().attach_scoped()?;
///     let env = guard.env();
///     // ... call into Java ...
///     Ok::<_, jni_glue::Error>(())
/// }); // detached here
/// ```
pub struct AttachGuard<'a> {
    runtime: &'a Runtime,
    env: JniEnv,
    attached_here: bool,
}

impl AttachGuard<'_> {
    pub fn env(&self) -> JniEnv {
        self.env
    }

    pub fn attached_here(&self) -> bool {
        self.attached_here
    }
}

impl Drop for AttachGuard<'_> {
    fn drop(&mut self) {
        if self.attached_here {
            if let Err(e) = self.runtime.detach_current_thread() {
                warn!(target: LOG_TARGET, "failed to detach on scope exit: {e}");
            }
        }
    }
}

// =============================================================================
// Process-wide instance
// =============================================================================

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Installs a configured runtime as the process-wide instance.
///
/// Must happen before anything touches [`global`]; afterwards the runtime is
/// handed back unchanged.
pub fn install(runtime: Runtime) -> std::result::Result<(), Runtime> {
    RUNTIME.set(runtime)
}

/// The process-wide runtime, created with default settings on first use.
pub fn global() -> &'static Runtime {
    RUNTIME.get_or_init(Runtime::default)
}

pub fn set_vm(vm: *mut jni::JavaVM) {
    global().set_vm(vm)
}

pub fn get_vm() -> *mut jni::JavaVM {
    global().get_vm()
}

pub fn get_env() -> Result<JniEnv> {
    global().get_env()
}

pub fn needs_detach() -> (Option<JniEnv>, bool) {
    global().needs_detach()
}

pub fn detach_current_thread() -> Result<()> {
    global().detach_current_thread()
}

pub fn attach_scoped() -> Result<AttachGuard<'static>> {
    global().attach_scoped()
}

pub fn setup_class_loader(root_class_name: &str) -> Result<()> {
    global().setup_class_loader(root_class_name)
}

pub fn find_class(name: &str) -> Result<jni::jclass> {
    global().find_class(name)
}

/// Body of the `JNI_OnLoad` generated by [`crate::export_jni_onload!`].
///
/// Stores `vm` in the process-wide runtime and runs `init` against it.
/// Returns the configured JNI version, or `JNI_ERR` if `init` failed.
pub fn on_load<F>(vm: *mut jni::JavaVM, init: F) -> jni::jint
where
    F: FnOnce(&'static Runtime) -> Result<()>,
{
    let runtime = global();
    runtime.set_vm(vm);
    match init(runtime) {
        Ok(()) => runtime.config().version(),
        Err(e) => {
            error!(target: LOG_TARGET, "JNI_OnLoad initialisation failed: {e}");
            jni::JNI_ERR
        }
    }
}
