//! Whitelist filtering of dependency options

use crate::model::DependencyOptions;

/// Option keys that survive into a released manifest.
pub const RECOGNIZED_OPTIONS: [&str; 8] = [
    "group",
    "groups",
    "path",
    "name",
    "require",
    "platform",
    "platforms",
    "type",
];

/// Whether `key` belongs to the released-manifest whitelist.
pub fn is_recognized_option(key: &str) -> bool {
    RECOGNIZED_OPTIONS.contains(&key)
}

/// Return only the whitelisted entries of `options`, values unchanged.
pub fn filter_options(options: &DependencyOptions) -> DependencyOptions {
    options
        .iter()
        .filter(|(key, _)| is_recognized_option(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Keys of `options` that [`filter_options`] would drop.
pub fn dropped_options(options: &DependencyOptions) -> Vec<&str> {
    options
        .keys()
        .map(String::as_str)
        .filter(|key| !is_recognized_option(key))
        .collect()
}
