//! `{{placeholder}}` substitution for README templates.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("valid regex"));

pub type RenderContext = HashMap<String, String>;

/// Render a string template with variable substitution.
///
/// Supports:
/// - Simple variables: `{{var_name}}`
/// - Filters: `{{var_name | filter}}` (lowercase, uppercase, trim, slugify)
///
/// Unknown placeholders are left as they are. Substituted values are not
/// scanned again, so values containing `{{ jinja }}` expressions survive.
#[must_use]
pub fn render_string(template: &str, ctx: &RenderContext) -> String {
    let result = PLACEHOLDER_RE.replace_all(template, |caps: &regex::Captures<'_>| {
        let expr = caps[1].trim();

        // Check for filter syntax: "var_name | filter"
        if let Some((var_name, filter)) = parse_filter_expr(expr) {
            if let Some(value) = ctx.get(var_name) {
                return apply_filter(value, filter);
            }
            // Unknown variable, keep the placeholder
            return caps[0].to_string();
        }

        ctx.get(expr).cloned().unwrap_or_else(|| caps[0].to_string())
    });

    result.into_owned()
}

/// Parse a filter expression like "var_name | filter_name".
fn parse_filter_expr(expr: &str) -> Option<(&str, &str)> {
    let (var_name, filter) = expr.split_once('|')?;
    let (var_name, filter) = (var_name.trim(), filter.trim());
    if var_name.is_empty() || filter.is_empty() {
        return None;
    }
    Some((var_name, filter))
}

fn apply_filter(value: &str, filter: &str) -> String {
    match filter {
        "slugify" => slugify(value),
        "lowercase" | "lower" => value.to_lowercase(),
        "uppercase" | "upper" => value.to_uppercase(),
        "trim" => value.trim().to_string(),
        _ => value.to_string(), // Unknown filter, return unchanged
    }
}

/// Convert a string to a URL-friendly slug, the way Markdown heading
/// anchors are built.
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
        } else if (c == ' ' || c == '_' || c == '-') && !result.ends_with('-') {
            result.push('-');
        }
    }

    result.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Known problems and limitations"), "known-problems-and-limitations");
    }

    #[test]
    fn test_slugify_special_chars() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("geerlingguy.nginx"), "geerlingguynginx");
    }

    #[test]
    fn test_slugify_underscores_and_spaces() {
        assert_eq!(slugify("my_role_name"), "my-role-name");
        assert_eq!(slugify("  leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn test_render_simple_vars() {
        let mut ctx = RenderContext::new();
        ctx.insert("role_name".into(), "nginx".into());

        let result = render_string("# {{role_name}}\n{{ role_name }}", &ctx);
        assert_eq!(result, "# nginx\nnginx");
    }

    #[test]
    fn test_render_string_with_filters() {
        let mut ctx = RenderContext::new();
        ctx.insert("name".into(), "My Role".into());

        assert_eq!(render_string("{{name | slugify}}", &ctx), "my-role");
        assert_eq!(render_string("{{name | lower}}", &ctx), "my role");
        assert_eq!(render_string("{{name | uppercase}}", &ctx), "MY ROLE");
        assert_eq!(render_string("{{name | unknown}}", &ctx), "My Role");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let ctx = RenderContext::new();
        assert_eq!(render_string("{{missing}}", &ctx), "{{missing}}");
        assert_eq!(
            render_string("{{missing | slugify}}", &ctx),
            "{{missing | slugify}}"
        );
    }

    #[test]
    fn test_values_are_not_rendered_twice() {
        let mut ctx = RenderContext::new();
        ctx.insert("table".into(), "| x | {{ ansible_hostname }} |".into());
        ctx.insert("ansible_hostname".into(), "SHOULD NOT APPEAR".into());

        let result = render_string("{{table}}", &ctx);
        assert_eq!(result, "| x | {{ ansible_hostname }} |");
    }
}
