//! Naming rules shared by the rewrite engine and the output layout.

/// Marker prefix carried by backend-generated type names.
pub const DEFAULT_MARKER: &str = "BE";

/// Suffix appended to bare names on the frontend side.
pub const DEFAULT_SUFFIX: &str = "Data";

/// Marker/suffix pair describing how a backend name maps to a frontend name.
///
/// `BEUserProfile` is a marked name, `UserProfile` its bare name and
/// `UserProfileData` the frontend name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    marker: String,
    suffix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_SUFFIX)
    }
}

impl Naming {
    pub fn new(marker: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            suffix: suffix.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Prefix a bare name with the marker.
    pub fn marked(&self, bare: &str) -> String {
        format!("{}{}", self.marker, bare)
    }

    /// Append the suffix to a bare name.
    pub fn frontend_name(&self, bare: &str) -> String {
        format!("{}{}", bare, self.suffix)
    }

    /// Strip the marker from the start of `name`, if present.
    pub fn strip_marker<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(self.marker.as_str()).unwrap_or(name)
    }

    /// Derive the output file name from an input base name.
    ///
    /// The marker is stripped from the start and the suffix is inserted before
    /// the first extension: `BEUser.ts` -> `UserData.ts`,
    /// `BEUser.d.ts` -> `UserData.d.ts`.
    pub fn output_file_name(&self, base_name: &str) -> String {
        let base = self.strip_marker(base_name);
        match base.find('.') {
            Some(dot) => format!("{}{}{}", &base[..dot], self.suffix, &base[dot..]),
            None => self.frontend_name(base),
        }
    }
}
