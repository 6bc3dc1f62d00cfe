//! Reusable widgets shared by the screens.

mod alert;
mod clock;
mod say_hi;
mod text_input;

pub use alert::Alert;
pub use clock::Clock;
pub use say_hi::{SayHi, SayHiProps};
pub use text_input::TextInput;
