//! Design System Components
//!
//! Small styled building blocks shared by every view.

mod alert;
mod button;
mod card;
mod input;
mod loading;
mod select;

#[cfg(test)]
mod tests;

pub use alert::{Alert, AlertKind};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody, CardHeader};
pub use input::Input;
pub use loading::{LoadingMessage, LoadingSpinner};
pub use select::Select;
