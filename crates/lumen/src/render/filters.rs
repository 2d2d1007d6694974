//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use super::output::OutputMode;
use crate::theme::Palette;
use crate::util::{pad_center, pad_left};

/// Registers the built-in filters, styling with `palette`.
pub(crate) fn register_filters(
    env: &mut Environment<'static>,
    palette: &Palette,
    mode: OutputMode,
) {
    let styles = palette.styles().clone();
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        styles.apply_with_mode(&name, &value.to_string(), use_color)
    });

    // Appends a newline, for explicit line break control:
    // {{ content | nl }} outputs content followed by \n
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });

    env.add_filter("center", |value: Value, width: usize| -> String {
        pad_center(&value.to_string(), width)
    });
    env.add_filter("align_right", |value: Value, width: usize| -> String {
        pad_left(&value.to_string(), width)
    });
}
