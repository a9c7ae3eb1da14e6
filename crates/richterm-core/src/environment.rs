// Rust guideline compliant 2026-10-17

//! Environment shaping for captured commands.
//!
//! Programs usually disable color when their output is not a terminal. The
//! variables set here are the common conventions that make them emit ANSI
//! escapes anyway.

use std::collections::BTreeMap;

/// Environment variable map passed to a child process.
pub type Env = BTreeMap<String, String>;

/// Setting this variable disables all color hints.
pub const DISABLE_COLOR_HINT_VAR: &str = "RICHTERM_DISABLE_COLOR_HINT";

/// Variables forced to `1` when color is requested.
pub const FORCE_COLOR_VARS: [&str; 4] = ["FORCE_COLOR", "CLICOLOR_FORCE", "PY_COLORS", "TTY_COMPATIBLE"];

/// Terminal type used when the environment does not define one.
pub const DEFAULT_TERM: &str = "xterm-256color";

/// Serializes tests that mutate process-wide environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Builds the environment for a captured command.
///
/// Starts from `base` when given, otherwise from the current process
/// environment, then applies color hints unless
/// `RICHTERM_DISABLE_COLOR_HINT` is set.
///
/// # Arguments
/// * `base` - Explicit starting environment
///
/// # Returns
/// The environment to hand to the child process
pub fn prepare_environment(base: Option<Env>) -> Env {
    let color_hint = std::env::var_os(DISABLE_COLOR_HINT_VAR).is_none();
    let env = base.unwrap_or_else(current_environment);
    shape_environment(env, color_hint)
}

/// Returns the process environment, skipping entries that are not UTF-8.
pub fn current_environment() -> Env {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Applies color hints to `env`.
///
/// With `color_hint` off the map is returned untouched. Otherwise `NO_COLOR`
/// is honored unless `FORCE_COLOR` is also present, and `TERM` gets a
/// 256-color default.
pub fn shape_environment(mut env: Env, color_hint: bool) -> Env {
    if !color_hint {
        return env;
    }

    let no_color = env.contains_key("NO_COLOR");
    let forced = env.contains_key("FORCE_COLOR");

    if !no_color || forced {
        env.remove("NO_COLOR");
        for key in FORCE_COLOR_VARS {
            env.entry(key.to_string()).or_insert_with(|| "1".to_string());
        }
    }

    env.entry("TERM".to_string())
        .or_insert_with(|| DEFAULT_TERM.to_string());

    tracing::debug!(no_color, forced, "prepared child environment");
    env
}
