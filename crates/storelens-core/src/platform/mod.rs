/// Platform-specific functionality: filesystem attribute lookups.

pub mod attributes;

pub use attributes::has_hidden_or_system_attribute;
