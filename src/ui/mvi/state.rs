/// Marker trait for UI state objects.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// and defaulted when the app starts.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
