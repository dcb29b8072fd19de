//! Exercise warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used when an exercise receives input outside its documented domain but can
//! still produce a result, and by the CLI to report recoverable problems.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are styled with ANSI colors
static COLOR: AtomicBool = AtomicBool::new(true);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // The set only ever grows or is cleared, so a poisoned lock is still usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about out-of-domain input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Matrix", "left has 3 columns but right has 2 rows");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        let line = format!("[Kata {component}] ⚠ {message}");
        if COLOR.load(Ordering::Relaxed) {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{line}");
        }
    }
}

/// Check whether a warning has already been emitted.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let guard = warned();
    guard
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Enable or disable colored warning output.
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
