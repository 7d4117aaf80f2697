// Selector - typed construction of Playwright selector strings
//
// Produces the same engine syntax the official bindings emit for
// get_by_role / get_by_placeholder / filter(has_text=...), so the
// strings can be handed straight to `Page::locator`.
//
// See: https://playwright.dev/docs/other-locators

use std::fmt;

/// A Playwright selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    raw: String,
}

impl Selector {
    /// CSS selector, passed through untouched.
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            raw: selector.into(),
        }
    }

    /// ARIA role with an accessible name (case-insensitive substring match).
    pub fn role(role: &str, name: &str) -> Self {
        Self {
            raw: format!("internal:role={}[name={}i]", role, quote(name)),
        }
    }

    /// Input addressed by its placeholder text (case-insensitive substring match).
    pub fn placeholder(text: &str) -> Self {
        Self {
            raw: format!("internal:attr=[placeholder={}i]", quote(text)),
        }
    }

    /// Narrows this selector to elements whose text contains `text`.
    pub fn has_text(self, text: &str) -> Self {
        Self {
            raw: format!("{} >> internal:has-text={}i", self.raw, quote(text)),
        }
    }

    /// Selects `inner` among the descendants of this selector's match.
    pub fn within(self, inner: Selector) -> Self {
        Self {
            raw: format!("{} >> {}", self.raw, inner.raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

// JSON string quoting is what the selector engines expect for text values
fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_and_placeholder() {
        assert_eq!(
            Selector::role("button", "Login").as_str(),
            r#"internal:role=button[name="Login"i]"#
        );
        assert_eq!(
            Selector::placeholder("email@example.com").as_str(),
            r#"internal:attr=[placeholder="email@example.com"i]"#
        );
    }

    #[test]
    fn test_row_filter_and_chaining() {
        let view = Selector::css("tr")
            .has_text("68f0c1a2")
            .within(Selector::role("button", "View"));
        assert_eq!(
            view.to_string(),
            r#"tr >> internal:has-text="68f0c1a2"i >> internal:role=button[name="View"i]"#
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(
            Selector::css("td").has_text(r#"say "hi""#).as_str(),
            r#"td >> internal:has-text="say \"hi\""i"#
        );
    }
}
