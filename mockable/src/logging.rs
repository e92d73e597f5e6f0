//! Logging utilities.

use slog::Logger;

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Create a new child logger with a `src` key containing the component name.
    fn new_with_component_name<T>(&self) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new(slog::o!("src" => short_type_name::<T>()))
    }
}

/// Name of the type `T` without its module path nor generic parameters.
pub fn short_type_name<T>() -> &'static str {
    let complete_name = std::any::type_name::<T>();
    let without_generic = complete_name.split('<').next().unwrap_or(complete_name);
    without_generic.rsplit("::").next().unwrap_or(complete_name)
}
