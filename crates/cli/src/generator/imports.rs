//! Import script emission.
//!
//! Responsibilities:
//! - Map each rendered resource to the minimal identifying string the API
//!   needs to re-adopt it (collection name; `<collection>/<id>` for
//!   per-collection synonym/override; bare id for global resources).
//! - Emit one `terraform import` line per resource, shell-quoted.

/// One resource-adoption command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportLine {
    /// Full resource address, e.g. `typesense_collection.my_products`.
    pub address: String,
    /// The import id the provider expects.
    pub import_id: String,
}

impl ImportLine {
    pub(crate) fn new(resource_type: &str, name: &str, import_id: impl Into<String>) -> Self {
        Self {
            address: format!("{}.{}", resource_type, name),
            import_id: import_id.into(),
        }
    }
}

/// Quote a string for POSIX shell: single quotes, with embedded single
/// quotes rewritten as `'\''`.
pub(crate) fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Render the executable import script.
pub(crate) fn render_import_script(lines: &[ImportLine]) -> String {
    let mut out = String::from(
        "#!/bin/sh\n# Adopts the resources declared in main.tf into Terraform state.\n# Run from the directory containing main.tf.\nset -e\n\n",
    );
    for line in lines {
        out.push_str(&format!(
            "terraform import {} {}\n",
            line.address,
            shell_quote(&line.import_id)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_plain_and_awkward_ids() {
        assert_eq!(shell_quote("products"), "'products'");
        assert_eq!(shell_quote("My Products!"), "'My Products!'");
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn renders_one_line_per_resource() {
        let lines = vec![
            ImportLine::new("typesense_collection", "my_products", "My Products!"),
            ImportLine::new("typesense_synonym", "my_products_colors", "My Products!/colors"),
            ImportLine::new("typesense_stopwords_set", "common_en", "common_en"),
        ];
        let script = render_import_script(&lines);
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains("set -e\n"));
        assert!(
            script.contains("terraform import typesense_collection.my_products 'My Products!'\n")
        );
        assert!(script.contains(
            "terraform import typesense_synonym.my_products_colors 'My Products!/colors'\n"
        ));
        assert!(script.contains("terraform import typesense_stopwords_set.common_en 'common_en'\n"));
    }
}
