mod common;

use std::ptr;

use common::MockVm;
use jni_glue::export_jni_onload;
use jni_glue::sys::jni;

export_jni_onload!();

#[test]
fn bare_onload_stores_vm_and_requests_1_6() {
    let vm = MockVm::new();
    assert!(jni_glue::get_vm().is_null());

    let version = unsafe { JNI_OnLoad(vm.raw(), ptr::null_mut()) };
    assert_eq!(version, jni::JNI_VERSION_1_6);
    assert_eq!(jni_glue::get_vm(), vm.raw());

    jni_glue::set_vm(ptr::null_mut());
    assert!(matches!(jni_glue::get_env(), Err(jni_glue::Error::NoVirtualMachine)));
}
