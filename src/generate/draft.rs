//! Structured module drafts
//!
//! Each generated module is assembled as imports + declarations + body
//! and only then rendered to text. Conditional features push their import
//! and declaration into the draft together, which keeps the "no dead
//! imports" property structural instead of a string-formatting accident.

/// An output module under assembly.
#[derive(Debug, Default)]
pub struct ModuleDraft {
    imports: Vec<String>,
    declarations: Vec<String>,
    body: String,
}

impl ModuleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one import line.
    pub fn import(&mut self, line: impl Into<String>) {
        self.imports.push(line.into());
    }

    /// Add one top-level declaration block.
    pub fn declare(&mut self, block: impl Into<String>) {
        self.declarations.push(block.into());
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Render to source text: imports, then declarations separated by
    /// blank lines, then the body. Empty sections are skipped.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();
        if !self.imports.is_empty() {
            sections.push(self.imports.join("\n"));
        }
        for declaration in &self.declarations {
            sections.push(declaration.clone());
        }
        if !self.body.is_empty() {
            sections.push(self.body.clone());
        }
        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }
}

/// Escape a string for inclusion in a double-quoted TS/JSON literal.
pub fn ts_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Derive a JS identifier from a column id (for per-column option
/// constants). Non-alphanumeric characters collapse to underscores.
pub fn ts_ident(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for (i, c) in id.chars().enumerate() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if i == 0 && c.is_ascii_digit() {
                out.push('_');
            }
            out.push(c);
        } else {
            out.push('_');
        }
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}

/// Hands out identifiers derived from column ids, one per call. Distinct
/// ids that sanitize to the same identifier (`"user-name"` and
/// `"user name"` both collapse to `user_name`) get a numeric suffix so
/// the generated module never declares the same constant twice.
#[derive(Debug, Default)]
pub struct IdentPool {
    used: std::collections::HashSet<String>,
}

impl IdentPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, id: &str) -> String {
        let base = ts_ident(id);
        let mut candidate = base.clone();
        let mut n = 2;
        while !self.used.insert(candidate.clone()) {
            candidate = format!("{base}{n}");
            n += 1;
        }
        candidate
    }
}
