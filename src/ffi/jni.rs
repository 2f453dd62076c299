//! JVM entry point.

use jni::JNIEnv;
use jni::objects::JObject;
use jni::sys::jint;

/// The fixed sum the demo entry point reports: 1 + 2 + ... + 100.
pub fn calculate_sum() -> i32 {
    (1..=100).sum()
}

/// Entry point for `com.example.JniExample.calculateSum()`.
///
/// Takes nothing beyond the implicit env and receiver handles and returns
/// 5050 as a `jint`. Exists to exercise the calling convention; it does not
/// touch the transposition routines.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_JniExample_calculateSum<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jint {
    calculate_sum()
}
