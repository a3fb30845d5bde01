//! Minimal HCL emission helpers for the generator.
//!
//! Responsibilities:
//! - Escape strings for HCL string literals (including `${` / `%{` template
//!   sequences).
//! - Build nested attribute/block structures and render them with stable
//!   two-space indentation.
//!
//! Non-responsibilities:
//! - No HCL parsing, no expression evaluation; this is write-only output.

use std::fmt::Write as _;

/// Quote a string as an HCL literal.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                // $${ / %%{ are the HCL escapes for template sequences.
                out.push(ch);
                out.push(ch);
            }
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Render a list of strings as an HCL tuple literal.
pub(crate) fn quote_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]", quoted.join(", "))
}

/// One entry inside a block body.
enum Item {
    /// `key = value` (value already rendered).
    Attr { key: String, value: String },
    /// `# text`
    Comment(String),
    /// A nested block.
    Block(Block),
}

/// An HCL block under construction.
pub(crate) struct Block {
    header: String,
    items: Vec<Item>,
}

impl Block {
    /// A top-level `resource "<type>" "<name>"` block.
    pub(crate) fn resource(resource_type: &str, name: &str) -> Self {
        Self {
            header: format!("resource \"{}\" \"{}\"", resource_type, name),
            items: Vec::new(),
        }
    }

    /// A top-level `variable "<name>"` block.
    pub(crate) fn variable(name: &str) -> Self {
        Self {
            header: format!("variable \"{}\"", name),
            items: Vec::new(),
        }
    }

    /// A nested block with a bare header (e.g. `fields`, `rule`).
    pub(crate) fn nested(header: &str) -> Self {
        Self {
            header: header.to_string(),
            items: Vec::new(),
        }
    }

    /// Add a string attribute.
    pub(crate) fn attr_str(&mut self, key: &str, value: &str) -> &mut Self {
        self.attr_raw(key, quote(value))
    }

    /// Add a string-list attribute.
    pub(crate) fn attr_str_list(&mut self, key: &str, values: &[String]) -> &mut Self {
        self.attr_raw(key, quote_list(values))
    }

    /// Add a boolean attribute.
    pub(crate) fn attr_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.attr_raw(key, value.to_string())
    }

    /// Add an integer attribute.
    pub(crate) fn attr_int(&mut self, key: &str, value: i64) -> &mut Self {
        self.attr_raw(key, value.to_string())
    }

    /// Add an attribute with a pre-rendered value (expression, jsonencode).
    pub(crate) fn attr_raw(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.items.push(Item::Attr {
            key: key.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add a `# comment` line.
    pub(crate) fn comment(&mut self, text: &str) -> &mut Self {
        self.items.push(Item::Comment(text.to_string()));
        self
    }

    /// Add a nested block.
    pub(crate) fn block(&mut self, block: Block) -> &mut Self {
        self.items.push(Item::Block(block));
        self
    }

    /// Render the block with aligned `=` signs per nesting level.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        let _ = writeln!(out, "{}{} {{", pad, self.header);

        let key_width = self
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Attr { key, .. } => Some(key.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let inner = "  ".repeat(depth + 1);
        for item in &self.items {
            match item {
                Item::Attr { key, value } => {
                    let _ = writeln!(out, "{}{:<width$} = {}", inner, key, value, width = key_width);
                }
                Item::Comment(text) => {
                    let _ = writeln!(out, "{}# {}", inner, text);
                }
                Item::Block(block) => {
                    block.render_into(out, depth + 1);
                }
            }
        }
        let _ = writeln!(out, "{}}}", pad);
    }
}

/// Render a serde_json value as a `jsonencode(...)` expression.
pub(crate) fn jsonencode(value: &serde_json::Value) -> String {
    format!("jsonencode({})", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_special_characters() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("My Products!"), "\"My Products!\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(quote("${interp}"), "\"$${interp}\"");
        assert_eq!(quote("%{directive}"), "\"%%{directive}\"");
    }

    #[test]
    fn renders_nested_blocks_with_alignment() {
        let mut block = Block::resource("typesense_collection", "products");
        block.attr_str("name", "products");
        block.attr_bool("enable_nested_fields", true);
        let mut field = Block::nested("fields");
        field.attr_str("name", "title");
        field.attr_str("type", "string");
        block.block(field);

        let rendered = block.render();
        assert!(rendered.starts_with("resource \"typesense_collection\" \"products\" {\n"));
        // Longest key sets the alignment column; it renders unpadded.
        assert!(rendered.contains("  enable_nested_fields = true\n"));
        assert!(rendered.contains("= \"products\"\n"));
        assert!(rendered.contains("  fields {\n    name = \"title\"\n    type = \"string\"\n  }\n"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn jsonencode_embeds_compact_json() {
        let value = serde_json::json!({"limit": 100});
        assert_eq!(jsonencode(&value), "jsonencode({\"limit\":100})");
    }
}
