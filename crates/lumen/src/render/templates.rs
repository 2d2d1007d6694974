//! Built-in layout templates.

/// Name of the root layout template.
pub const ROOT_TEMPLATE: &str = "root";
/// Name of the authentication layout template.
pub const AUTH_TEMPLATE: &str = "auth";

// The root layout has exactly one dynamic child: the outlet.
const ROOT_SOURCE: &str = "{{ outlet }}";

// Toggle pinned to the top-right corner, then a blank line, then the
// content centered line by line.
const AUTH_SOURCE: &str = concat!(
    r#"{{ toggle | align_right(width) | style("toggle") | nl }}"#,
    r#"{{ "" | nl }}"#,
    r#"{% for line in lines %}{{ line | center(width) | style("body") | nl }}{% endfor %}"#,
);

pub(crate) const BUILTIN_TEMPLATES: &[(&str, &str)] =
    &[(ROOT_TEMPLATE, ROOT_SOURCE), (AUTH_TEMPLATE, AUTH_SOURCE)];
