//! Convenience macros for the rule engine.

/// Log a message at a level chosen at runtime.
///
/// # Examples
///
/// ```
/// use logic_core::log_event;
/// use logic_core::utils::LogLevel;
///
/// log_event!(LogLevel::Info, "Rules collected");
///
/// log_event!(LogLevel::Debug, "Rules collected",
///     types => 3,
///     rules => 12,
/// );
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:expr, $message:expr) => {
        {
            use $crate::utils::LogLevel;
            match $level {
                LogLevel::Error => $crate::tracing::error!("{}", $message),
                LogLevel::Warning => $crate::tracing::warn!("{}", $message),
                LogLevel::Info => $crate::tracing::info!("{}", $message),
                LogLevel::Debug => $crate::tracing::debug!("{}", $message),
                LogLevel::Trace => $crate::tracing::trace!("{}", $message),
            }
        }
    };

    ($level:expr, $message:expr, $($key:ident => $value:expr),+ $(,)?) => {
        {
            use $crate::utils::LogLevel;
            let metadata = vec![$(format!("{}={}", stringify!($key), $value)),+].join(" ");
            match $level {
                LogLevel::Error => $crate::tracing::error!("{}: {}", $message, metadata),
                LogLevel::Warning => $crate::tracing::warn!("{}: {}", $message, metadata),
                LogLevel::Info => $crate::tracing::info!("{}: {}", $message, metadata),
                LogLevel::Debug => $crate::tracing::debug!("{}: {}", $message, metadata),
                LogLevel::Trace => $crate::tracing::trace!("{}: {}", $message, metadata),
            }
        }
    };
}
