//! Scoped process environment for configuration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the touched variables when dropped.
///
/// Holding the guard also holds a process-wide lock, so tests that read the
/// environment through it never observe each other's changes.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Sets `vars` (a `None` value removes the variable) and clears every
    /// name in `unset`.
    pub fn apply(vars: &[(&str, Option<&str>)], unset: &[&str]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let changes = vars
            .iter()
            .copied()
            .chain(unset.iter().map(|key| (*key, None)));
        let mut previous = Vec::new();

        for (key, value) in changes {
            previous.push((OsString::from(key), env::var_os(key)));
            // SAFETY: the global mutex serializes environment mutations in tests.
            unsafe { write_var(key.as_ref(), value.map(OsString::from)) };
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: the lock is still held while the guard is alive.
            unsafe { write_var(&key, value) };
        }
    }
}

unsafe fn write_var(key: &std::ffi::OsStr, value: Option<OsString>) {
    unsafe {
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
