//! Convenience macros for plugin and host development.

/// Macro for building [`PluginMetadata`](crate::registry::PluginMetadata).
///
/// Fields left out keep their placeholder defaults.
///
/// # Example
/// ```rust,ignore
/// let metadata = plugin_metadata!(
///     name: "EconomyPlugin",
///     version: "2.1.0",
///     author: "Jane Smith",
///     description: "Adds advanced economic features to Dynasty"
/// );
/// ```
#[macro_export]
macro_rules! plugin_metadata {
    (name: $name:expr $(,)?) => {
        $crate::registry::PluginMetadata::named($name)
    };
    (
        name: $name:expr,
        version: $version:expr,
        author: $author:expr,
        description: $desc:expr $(,)?
    ) => {
        $crate::registry::PluginMetadata::named($name)
            .with_version($version)
            .with_author($author)
            .with_description($desc)
    };
}

/// Macro for quickly building a [`HookPayload`](crate::hooks::HookPayload)
/// from named arguments.
///
/// # Example
/// ```rust,ignore
/// let payload = hook_payload!({
///     "resource" => json!("gold"),
///     "amount" => json!(10),
/// });
/// ```
#[macro_export]
macro_rules! hook_payload {
    () => {
        $crate::hooks::HookPayload::new()
    };
    ({ $($key:expr => $value:expr),* $(,)? }) => {{
        let mut payload = $crate::hooks::HookPayload::new();
        $(
            payload.data.insert($key.to_string(), $value);
        )*
        payload
    }};
}
