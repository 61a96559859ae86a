mod render;
mod validate;

pub use render::{render, RenderArgs, ThemeArg};
pub use validate::{validate, ValidateArgs};
