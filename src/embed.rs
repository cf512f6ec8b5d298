//! Launching a JVM inside a Rust process.
//!
//! Feature-gated behind `embed`. [`VmLauncher`] loads `libjvm`, calls
//! `JNI_CreateJavaVM` and hands the new VM to a [`Runtime`], so host
//! programs use the same registry a library loaded through `JNI_OnLoad`
//! would.
//!
//! ```rust,ignore
//! use jni_glue::embed::VmLauncher;
//! use jni_glue::RuntimeConfig;
//!
//! let vm = VmLauncher::new(RuntimeConfig::new())
//!     .option("-Xmx256m")?
//!     .launch()?;
//! let env = vm.runtime().get_env()?;
//! ```

use std::ffi::{CString, NulError};
use std::path::{Path, PathBuf};
use std::ptr;

use log::{debug, info, warn};

use crate::diagnostics::LOG_TARGET;
use crate::runtime::{Runtime, RuntimeConfig};
use crate::sys::jni;

/// Errors returned while locating or starting the JVM.
#[derive(Debug)]
pub enum EmbedError {
    InvalidOption(NulError),
    Load(String),
    Create(jni::jint),
    Destroy(jni::jint),
    Locate(String),
}

impl std::fmt::Display for EmbedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedError::InvalidOption(e) => write!(f, "invalid VM option (NUL byte): {e}"),
            EmbedError::Load(e) => write!(f, "failed to load libjvm: {e}"),
            EmbedError::Create(code) => write!(f, "JNI_CreateJavaVM failed with {code}"),
            EmbedError::Destroy(code) => write!(f, "DestroyJavaVM failed with {code}"),
            EmbedError::Locate(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmbedError::InvalidOption(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NulError> for EmbedError {
    fn from(value: NulError) -> Self {
        EmbedError::InvalidOption(value)
    }
}

fn libjvm_filename() -> &'static str {
    if cfg!(target_os = "windows") {
        "jvm.dll"
    } else if cfg!(target_os = "macos") {
        "libjvm.dylib"
    } else {
        "libjvm.so"
    }
}

/// Places `libjvm` lives in under a JDK or JRE home.
pub fn libjvm_candidates(java_home: &Path) -> Vec<PathBuf> {
    let filename = libjvm_filename();
    let arch = std::env::consts::ARCH;

    let mut dirs = vec![
        "lib/server".to_string(),
        "jre/lib/server".to_string(),
        format!("lib/{arch}/server"),
        format!("jre/lib/{arch}/server"),
    ];
    if cfg!(target_os = "windows") {
        dirs.extend(["bin/server", "jre/bin/server", "bin/client", "jre/bin/client"].map(String::from));
    }

    dirs.into_iter().map(|d| java_home.join(d).join(filename)).collect()
}

/// Locates `libjvm` through `JVM_LIB_PATH`, then `JAVA_HOME`.
pub fn find_libjvm() -> Result<PathBuf, EmbedError> {
    if let Some(path) = std::env::var_os("JVM_LIB_PATH") {
        let path = PathBuf::from(path);
        return if path.exists() {
            Ok(path)
        } else {
            Err(EmbedError::Locate(format!(
                "JVM_LIB_PATH points to a missing file: {}",
                path.display()
            )))
        };
    }

    let java_home = std::env::var_os("JAVA_HOME").map(PathBuf::from).ok_or_else(|| {
        EmbedError::Locate("neither JVM_LIB_PATH nor JAVA_HOME is set".to_string())
    })?;
    libjvm_candidates(&java_home)
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| {
            EmbedError::Locate(format!(
                "no {} under JAVA_HOME={}",
                libjvm_filename(),
                java_home.display()
            ))
        })
}

/// Builder for an in-process JVM.
pub struct VmLauncher {
    config: RuntimeConfig,
    options: Vec<CString>,
    ignore_unrecognized: bool,
}

impl VmLauncher {
    /// The VM is created with `config`'s JNI version and its runtime uses `config`.
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            options: Vec::new(),
            ignore_unrecognized: false,
        }
    }

    /// Adds a VM option such as `-Xmx1g` or `-Dkey=value`.
    pub fn option(mut self, opt: &str) -> Result<Self, EmbedError> {
        self.options.push(CString::new(opt)?);
        Ok(self)
    }

    pub fn options<I, S>(mut self, opts: I) -> Result<Self, EmbedError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for opt in opts {
            self.options.push(CString::new(opt.as_ref())?);
        }
        Ok(self)
    }

    pub fn ignore_unrecognized(mut self, value: bool) -> Self {
        self.ignore_unrecognized = value;
        self
    }

    /// Creates the VM through an already resolved `JNI_CreateJavaVM`.
    ///
    /// # Safety
    ///
    /// `create` must follow the `JNI_CreateJavaVM` contract, and the code
    /// behind it must stay loaded for the lifetime of the returned value.
    pub unsafe fn launch_with(self, create: jni::JNI_CreateJavaVM) -> Result<EmbeddedVm, EmbedError> {
        let mut raw_options: Vec<jni::JavaVMOption> = self
            .options
            .iter()
            .map(|s| jni::JavaVMOption {
                optionString: s.as_ptr() as *mut _,
                extraInfo: ptr::null_mut(),
            })
            .collect();
        let mut args = jni::JavaVMInitArgs {
            version: self.config.version(),
            nOptions: raw_options.len() as jni::jint,
            options: if raw_options.is_empty() {
                ptr::null_mut()
            } else {
                raw_options.as_mut_ptr()
            },
            ignoreUnrecognized: if self.ignore_unrecognized { jni::JNI_TRUE } else { jni::JNI_FALSE },
        };

        let mut vm: *mut jni::JavaVM = ptr::null_mut();
        let mut env: *mut jni::JNIEnv = ptr::null_mut();
        let status = create(&mut vm, &mut env, &mut args);
        if status != jni::JNI_OK {
            return Err(EmbedError::Create(status));
        }
        if vm.is_null() {
            return Err(EmbedError::Create(jni::JNI_ERR));
        }

        info!(target: LOG_TARGET, "created Java VM with {} option(s)", self.options.len());
        Ok(EmbeddedVm {
            runtime: Runtime::with_vm(vm, self.config),
            destroyed: false,
            _lib: None,
        })
    }

    /// Loads `libjvm` from `path` and creates the VM.
    pub fn launch_from_library<P: AsRef<Path>>(self, path: P) -> Result<EmbeddedVm, EmbedError> {
        debug!(target: LOG_TARGET, "loading {}", path.as_ref().display());
        let lib = unsafe { libloading::Library::new(path.as_ref()) }
            .map_err(|e| EmbedError::Load(e.to_string()))?;
        let create: jni::JNI_CreateJavaVM = unsafe {
            *lib.get::<jni::JNI_CreateJavaVM>(b"JNI_CreateJavaVM\0")
                .map_err(|e| EmbedError::Load(e.to_string()))?
        };

        let mut vm = unsafe { self.launch_with(create)? };
        vm._lib = Some(lib);
        Ok(vm)
    }

    /// Locates `libjvm` with [`find_libjvm`] and creates the VM.
    pub fn launch(self) -> Result<EmbeddedVm, EmbedError> {
        let path = find_libjvm()?;
        self.launch_from_library(path)
    }
}

/// A VM created by this process, destroyed on drop.
pub struct EmbeddedVm {
    runtime: Runtime,
    destroyed: bool,
    _lib: Option<libloading::Library>,
}

impl EmbeddedVm {
    /// Registry bound to this VM.
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn java_vm(&self) -> *mut jni::JavaVM {
        self.runtime.get_vm()
    }

    /// Shuts the VM down, reporting the status of `DestroyJavaVM`.
    pub fn destroy(mut self) -> Result<(), EmbedError> {
        self.destroyed = true;
        let status = unsafe { crate::jvm_call!(self.runtime.get_vm(), DestroyJavaVM) };
        if status != jni::JNI_OK {
            warn!(target: LOG_TARGET, "DestroyJavaVM returned {status}");
            return Err(EmbedError::Destroy(status));
        }
        Ok(())
    }
}

impl Drop for EmbeddedVm {
    fn drop(&mut self) {
        let vm = self.runtime.get_vm();
        if self.destroyed || vm.is_null() {
            return;
        }
        let status = unsafe { crate::jvm_call!(vm, DestroyJavaVM) };
        if status != jni::JNI_OK {
            warn!(target: LOG_TARGET, "DestroyJavaVM returned {status}");
        }
    }
}
