//! Per-line rewriting.

use beconv_core::Naming;
use regex::{Captures, Regex};

use crate::{
    NameSet, Result,
    patterns::{self, Patterns},
};

/// Which branch a line took through the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `[export ]interface <marker>Name {`: the declared name was renamed.
    Declaration,
    /// The line mentions at least one discovered marked name.
    Reference,
    /// Anything else; only field keys are converted.
    Plain,
}

/// Rewrites lines against a fixed [`NameSet`].
///
/// Holds no state besides the compiled patterns, so one rewriter can serve
/// any number of lines in any order.
#[derive(Debug, Clone)]
pub struct Rewriter {
    naming: Naming,
    patterns: Patterns,
    reference: Option<Regex>,
}

impl Rewriter {
    pub fn new(naming: &Naming, names: &NameSet) -> Result<Self> {
        Ok(Self {
            naming: naming.clone(),
            patterns: Patterns::new(naming)?,
            reference: patterns::reference(naming, names)?,
        })
    }

    /// Rewrite a single line (without its `\n`).
    pub fn rewrite_line(&self, line: &str) -> (LineKind, String) {
        if let Some(decl) = self.patterns.declaration(line) {
            let export = if decl.export { "export " } else { "" };
            let rewritten = format!(
                "{}interface {}{}",
                export,
                self.naming.frontend_name(decl.name),
                self.patterns.convert_fields(decl.tail)
            );
            return (LineKind::Declaration, rewritten);
        }

        if let Some(reference) = self.reference.as_ref().filter(|re| re.is_match(line)) {
            let renamed = reference.replace_all(line, |caps: &Captures| {
                self.naming.frontend_name(&caps["name"])
            });
            return (LineKind::Reference, self.patterns.convert_fields(&renamed));
        }

        (LineKind::Plain, self.patterns.convert_fields(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter(names: &[&str]) -> Rewriter {
        let names: NameSet = names.iter().copied().collect();
        Rewriter::new(&Naming::default(), &names).unwrap()
    }

    #[test]
    fn test_declaration_line() {
        let r = rewriter(&["UserProfile"]);
        assert_eq!(
            r.rewrite_line("export interface BEUserProfile {"),
            (LineKind::Declaration, "export interface UserProfileData {".to_string())
        );
        assert_eq!(
            r.rewrite_line("interface BEUserProfile {"),
            (LineKind::Declaration, "interface UserProfileData {".to_string())
        );
    }

    #[test]
    fn test_declaration_line_keeps_carriage_return() {
        let r = rewriter(&["User"]);
        assert_eq!(
            r.rewrite_line("export interface BEUser {\r").1,
            "export interface UserData {\r"
        );
    }

    #[test]
    fn test_reference_line() {
        let r = rewriter(&["User", "UserProfile"]);
        assert_eq!(
            r.rewrite_line("    field: BEUserProfile;"),
            (LineKind::Reference, "    field: UserProfileData;".to_string())
        );
        assert_eq!(
            r.rewrite_line("    owner_user: BEUser;"),
            (LineKind::Reference, "    ownerUser: UserData;".to_string())
        );
    }

    #[test]
    fn test_reference_line_with_several_names() {
        let r = rewriter(&["User", "UserProfile", "Order"]);
        assert_eq!(
            r.rewrite_line("    items: Array<BEUser | BEUserProfile>; last_order: BEOrder;").1,
            "    items: Array<UserData | UserProfileData>; lastOrder: OrderData;"
        );
    }

    #[test]
    fn test_disambiguation_any_declaration_order() {
        for names in [["User", "UserProfile"], ["UserProfile", "User"]] {
            let r = rewriter(&names);
            assert_eq!(
                r.rewrite_line("field: BEUserProfile;").1,
                "field: UserProfileData;"
            );
            assert_eq!(r.rewrite_line("field: BEUser;").1, "field: UserData;");
        }
    }

    #[test]
    fn test_reference_is_anchored() {
        let r = rewriter(&["User"]);
        assert_eq!(
            r.rewrite_line("token: SuperBEUserToken;"),
            (LineKind::Plain, "token: SuperBEUserToken;".to_string())
        );
        assert_eq!(
            r.rewrite_line("token: BEUserToken;"),
            (LineKind::Plain, "token: BEUserToken;".to_string())
        );
    }

    #[test]
    fn test_undeclared_marked_names_are_kept() {
        let r = rewriter(&["User"]);
        assert_eq!(
            r.rewrite_line("    address: BEAddress;"),
            (LineKind::Plain, "    address: BEAddress;".to_string())
        );
    }

    #[test]
    fn test_plain_line() {
        let r = rewriter(&[]);
        assert_eq!(
            r.rewrite_line("    created_at_utc: string;"),
            (LineKind::Plain, "    createdAtUtc: string;".to_string())
        );
        assert_eq!(r.rewrite_line("}"), (LineKind::Plain, "}".to_string()));
    }

    #[test]
    fn test_near_miss_falls_through() {
        let r = rewriter(&["User"]);
        assert_eq!(
            r.rewrite_line("export interface BEOther { // generated"),
            (LineKind::Plain, "export interface BEOther { // generated".to_string())
        );
    }

    #[test]
    fn test_rewrite_line_keeps_empty_line() {
        let r = rewriter(&["User"]);
        assert_eq!(r.rewrite_line(""), (LineKind::Plain, String::new()));
    }

    #[test]
    fn test_rewrite_idempotent_on_converted_lines() {
        let r = rewriter(&[]);
        let line = "    userId: number; // user_id";
        assert_eq!(r.rewrite_line(line).1, line);
    }
}
