/// Marker trait for intents: key presses, sentinel hits, fetch outcomes.
pub trait Intent: Send + 'static {}
