//! Reusable form components shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, PasswordInput};
