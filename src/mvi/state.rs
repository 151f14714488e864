//! Base trait for state in the state container.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a subscriber needs to read)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (`Default` is the state before any action was applied)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
