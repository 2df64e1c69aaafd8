use std::{
    collections::HashMap,
    env,
    ffi::{OsStr, OsString},
    mem,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Serializes tests that read config from the environment. Variables changed through the
/// returned [`EnvMutexGuard`] are restored when the guard is dropped.
#[derive(Debug)]
pub(crate) struct EnvMutex(Mutex<()>);

impl EnvMutex {
    pub const fn new() -> Self {
        Self(Mutex::new(()))
    }

    pub fn lock(&self) -> EnvMutexGuard<'_> {
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        EnvMutexGuard {
            _inner: guard,
            saved_vars: HashMap::new(),
        }
    }
}

#[must_use = "Environment will be reset when the guard is dropped"]
#[derive(Debug)]
pub(crate) struct EnvMutexGuard<'a> {
    _inner: MutexGuard<'a, ()>,
    /// Values the touched variables had before the guard was acquired.
    saved_vars: HashMap<OsString, Option<OsString>>,
}

impl Drop for EnvMutexGuard<'_> {
    fn drop(&mut self) {
        for (name, value) in mem::take(&mut self.saved_vars) {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}

impl EnvMutexGuard<'_> {
    fn save(&mut self, name: &OsStr) {
        self.saved_vars
            .entry(name.to_os_string())
            .or_insert_with(|| env::var_os(name));
    }

    /// Sets env vars given in `.env`-like format, one `NAME=value` per line.
    pub fn set_env(&mut self, fixture: &str) {
        for line in fixture.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let (name, value) = line
                .split_once('=')
                .unwrap_or_else(|| panic!("Incorrect line for setting environment variable: {line}"));
            let name = OsStr::new(name);
            self.save(name);
            env::set_var(name, value.trim_matches('"'));
        }
    }

    pub fn remove_env(&mut self, names: &[&str]) {
        for &name in names {
            let name = OsStr::new(name);
            self.save(name);
            env::remove_var(name);
        }
    }
}

#[test]
fn env_mutex_restores_variables() {
    const UNSET_VAR: &str = "BSC_FEE_TEST_VARIABLE_THAT_IS_NEVER_SET";
    const PRESET_VAR: &str = "BSC_FEE_TEST_VARIABLE_THAT_IS_PRESET";

    assert!(env::var_os(UNSET_VAR).is_none());
    env::set_var(PRESET_VAR, "initial");

    let mutex = EnvMutex::new();
    let mut lock = mutex.lock();
    lock.set_env(&format!("{UNSET_VAR}=test\n{PRESET_VAR}=\"redefined\""));
    assert_eq!(env::var_os(UNSET_VAR).unwrap(), "test");
    assert_eq!(env::var_os(PRESET_VAR).unwrap(), "redefined");

    lock.remove_env(&[PRESET_VAR]);
    assert!(env::var_os(PRESET_VAR).is_none());

    drop(lock);
    assert!(env::var_os(UNSET_VAR).is_none());
    assert_eq!(env::var_os(PRESET_VAR).unwrap(), "initial");
    env::remove_var(PRESET_VAR);
}
