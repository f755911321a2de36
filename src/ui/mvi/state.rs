/// Marker for view state.
///
/// `Default` is required so a state can be taken out of its owner while the
/// reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
