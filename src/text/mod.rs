//! The text primitive: per-instance options in, resolved style out.
//!
//! Resolution happens in two steps:
//!
//! 1. [`resolve_text_config`] computes font size, color, weight and family
//!    from [`TextProps`], the text configuration, the theme and scaling.
//! 2. [`compose_text_style`] layers alignment, spacing, custom skin styles
//!    and per-instance styles on top, producing a [`TextStyle`].
//!
//! Both are pure; [`UiContext`](crate::UiContext) wires them to the store
//! and environment.

mod props;
mod resolve;
mod style;

pub use props::{Spacing, TextAlign, TextProps, DEFAULT_PRESSED_OPACITY};
pub use resolve::{resolve_text_config, ResolvedTextConfig};
pub use style::{compose_text_style, TextStyle};
