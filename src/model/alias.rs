//! URL alias derivation for businesses.
//!
//! A business alias is the slug used in public menu URLs (`/business/{alias}`). It is
//! derived from the business name but stays independently editable: [`AliasField`]
//! tracks whether the alias still follows the name or has been edited by hand.

/// Derives a URL alias from a business name.
///
/// Lowercases the name, drops every character outside `[a-z0-9\s-]`, then replaces each
/// run of whitespace with a single hyphen. Leading or trailing whitespace therefore
/// becomes a leading or trailing hyphen, matching how existing aliases were generated.
///
/// The result only ever contains `[a-z0-9-]`, so deriving an alias from an alias is a
/// no-op.
///
/// # Example
/// ```
/// use menuboard::model::alias::derive_alias;
///
/// assert_eq!(derive_alias("Joe's Café "), "joes-caf-");
/// ```
pub fn derive_alias(name: &str) -> String {
    let mut alias = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                alias.push('-');
                in_whitespace = true;
            }
            continue;
        }

        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            alias.push(c);
            in_whitespace = false;
        }
    }

    alias
}

/// Returns true when `alias` is non-empty and only contains `[a-z0-9-]`.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty()
        && alias
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Cleans hand-typed alias input: lowercases it and drops everything outside `[a-z0-9-]`.
///
/// Unlike [`derive_alias`], whitespace is dropped rather than turned into a hyphen.
pub fn sanitize_alias_input(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Name and alias input pair for the business settings form.
///
/// Editing the name re-derives the alias only while the alias is empty or still equal
/// to the alias derived from the previous name. Once the alias has been edited by hand
/// it is detached and name edits leave it alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AliasField {
    name: String,
    alias: String,
}

impl AliasField {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        let name = name.into();
        let mut alias = alias.into();
        if alias.is_empty() {
            alias = derive_alias(&name);
        }

        Self { name, alias }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Whether the alias still follows the name.
    pub fn is_attached(&self) -> bool {
        self.alias.is_empty() || self.alias == derive_alias(&self.name)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.is_attached() {
            self.alias = derive_alias(&name);
        }
        self.name = name;
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    /// Stores typed alias text after [`sanitize_alias_input`].
    pub fn type_alias(&mut self, input: &str) {
        self.alias = sanitize_alias_input(input);
    }
}
