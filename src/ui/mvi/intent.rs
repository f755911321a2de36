/// Marker for things a reducer can consume: key presses, clicks, loads.
pub trait Intent: Send + 'static {}
