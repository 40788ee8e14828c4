//! Line patterns compiled from the naming rules.

use beconv_core::Naming;
use regex::{Captures, Regex};

use crate::{Error, NameSet, Result};

/// Identifier followed by a colon, the shape of a declaration field key.
const FIELD: &str = r"[0-9A-Za-z_]+:";

/// A declaration line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeclarationLine<'a> {
    /// Whether the line starts with `export `.
    pub export: bool,
    /// Bare name, without the marker.
    pub name: &'a str,
    /// ` {` plus any trailing whitespace.
    pub tail: &'a str,
}

/// Patterns shared by the scanner and the rewriter.
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    declaration: Regex,
    near_miss: Regex,
    field: Regex,
}

impl Patterns {
    pub fn new(naming: &Naming) -> Result<Self> {
        let marker = regex::escape(naming.marker());
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|source| Error::Pattern {
                marker: naming.marker().to_string(),
                source,
            })
        };

        Ok(Self {
            declaration: compile(&format!(
                r"^(?P<export>export )?interface {marker}(?P<name>[0-9A-Za-z_]+)(?P<tail> \{{\s*)$"
            ))?,
            near_miss: compile(&format!(
                r"^\s*(?:export\s+)?interface\s+{marker}[0-9A-Za-z_]+"
            ))?,
            field: compile(FIELD)?,
        })
    }

    /// Match the anchored declaration form:
    /// `[export ]interface <marker><name> {`, nothing after the brace but whitespace.
    pub fn declaration<'a>(&self, line: &'a str) -> Option<DeclarationLine<'a>> {
        let caps = self.declaration.captures(line)?;
        Some(DeclarationLine {
            export: caps.name("export").is_some(),
            name: caps.name("name")?.as_str(),
            tail: caps.name("tail")?.as_str(),
        })
    }

    /// A line that starts like a declaration but is not in the anchored form.
    pub fn is_near_miss(&self, line: &str) -> bool {
        self.near_miss.is_match(line) && !self.declaration.is_match(line)
    }

    /// Fold every `snake_case:` key on the line into `camelCase:`.
    pub fn convert_fields(&self, line: &str) -> String {
        self.field
            .replace_all(line, |caps: &Captures| {
                beconv_core::snake_to_camel_case(&caps[0])
            })
            .into_owned()
    }
}

/// Build the reference pattern: every marked name as one alternation,
/// longest name first, bounded on both sides by non-word characters.
///
/// Returns `None` for an empty name set.
pub(crate) fn reference(naming: &Naming, names: &NameSet) -> Result<Option<Regex>> {
    if names.is_empty() {
        return Ok(None);
    }

    let alternation = names
        .longest_first()
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(?-u:\b){}(?P<name>{})(?-u:\b)",
        regex::escape(naming.marker()),
        alternation
    );

    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| Error::Pattern {
            marker: naming.marker().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::new(&Naming::default()).unwrap()
    }

    #[test]
    fn test_declaration_forms() {
        let p = patterns();

        let decl = p.declaration("export interface BEUserProfile {").unwrap();
        assert!(decl.export);
        assert_eq!(decl.name, "UserProfile");
        assert_eq!(decl.tail, " {");

        let decl = p.declaration("interface BEUser {").unwrap();
        assert!(!decl.export);
        assert_eq!(decl.name, "User");
    }

    #[test]
    fn test_declaration_allows_trailing_whitespace() {
        let decl = patterns().declaration("interface BEUser {\r").unwrap();
        assert_eq!(decl.name, "User");
        assert_eq!(decl.tail, " {\r");
    }

    #[test]
    fn test_declaration_rejects_other_shapes() {
        let p = patterns();
        assert!(p.declaration("interface BEUser { // comment").is_none());
        assert!(p.declaration("interface BEUser{").is_none());
        assert!(p.declaration("  interface BEUser {").is_none());
        assert!(p.declaration("export  interface BEUser {").is_none());
        assert!(p.declaration("interface BE {").is_none());
        assert!(p.declaration("interface User {").is_none());
        assert!(p.declaration("export type BEUser = {").is_none());
        assert!(p.declaration("interface BEUser extends BEBase {").is_none());
    }

    #[test]
    fn test_near_miss() {
        let p = patterns();
        assert!(p.is_near_miss("interface BEUser { // comment"));
        assert!(p.is_near_miss("  export interface BEUser {"));
        assert!(p.is_near_miss("interface BEUser extends BEBase {"));
        assert!(!p.is_near_miss("export interface BEUser {"));
        assert!(!p.is_near_miss("interface User {"));
        assert!(!p.is_near_miss("    user: BEUser;"));
    }

    #[test]
    fn test_convert_fields() {
        let p = patterns();
        assert_eq!(p.convert_fields("    user_id: number;"), "    userId: number;");
        assert_eq!(
            p.convert_fields("    created_at_utc: string;"),
            "    createdAtUtc: string;"
        );
        assert_eq!(p.convert_fields("    tag_list?: string[];"), "    tag_list?: string[];");
        assert_eq!(p.convert_fields("a_b: 1, c_d: 2"), "aB: 1, cD: 2");
    }

    #[test]
    fn test_convert_fields_only_touches_keys() {
        let p = patterns();
        assert_eq!(
            p.convert_fields("    kind: some_type;"),
            "    kind: some_type;"
        );
        assert_eq!(
            p.convert_fields("// see https://example.com/user_id"),
            "// see https://example.com/user_id"
        );
    }

    #[test]
    fn test_reference_empty() {
        assert!(reference(&Naming::default(), &NameSet::new()).unwrap().is_none());
    }

    #[test]
    fn test_reference_is_bounded() {
        let names: NameSet = ["User"].into_iter().collect();
        let re = reference(&Naming::default(), &names).unwrap().unwrap();

        assert!(re.is_match("user: BEUser;"));
        assert!(re.is_match("users: BEUser[];"));
        assert!(!re.is_match("token: SuperBEUserToken;"));
        assert!(!re.is_match("profile: BEUserProfile;"));
    }

    #[test]
    fn test_reference_prefers_longest() {
        let names: NameSet = ["User", "UserProfile"].into_iter().collect();
        let re = reference(&Naming::default(), &names).unwrap().unwrap();

        let caps = re.captures("profile: BEUserProfile;").unwrap();
        assert_eq!(&caps["name"], "UserProfile");
    }
}
