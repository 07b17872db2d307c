//! Build identity
//!
//! A launcher is either a release or a development build. The choice is
//! made once, through [`BuildProfile`], and every identity value handed to
//! the embedded program is derived from it.

use serde::{Deserialize, Serialize};

/// Launcher version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Appended to the application id of development builds.
pub const DEVEL_SUFFIX: &str = ".Devel";

/// Release or development variant of a launcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildProfile {
    #[serde(default)]
    pub devel: bool,
}

impl BuildProfile {
    pub const RELEASE: Self = Self { devel: false };
    pub const DEVEL: Self = Self { devel: true };

    /// Profile selected by the `devel` cargo feature.
    pub const fn current() -> Self {
        Self {
            devel: cfg!(feature = "devel"),
        }
    }
}

/// Identity values reported to the embedded program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
    pub id: String,
    pub version: &'static str,
    pub devel: bool,
}

impl AppIdentity {
    pub fn resolve(base_id: &str, profile: BuildProfile) -> Self {
        let id = if profile.devel {
            format!("{base_id}{DEVEL_SUFFIX}")
        } else {
            base_id.to_owned()
        };

        Self {
            id,
            version: VERSION,
            devel: profile.devel,
        }
    }

    pub fn is_devel_build(&self) -> bool {
        self.devel
    }

    pub fn application_id(&self) -> &str {
        &self.id
    }

    pub fn application_version(&self) -> &'static str {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn devel_identity_carries_suffix_and_flag() {
        let identity = AppIdentity::resolve("ca.vlacroix.Paper", BuildProfile::DEVEL);
        assert_eq!(identity.application_id(), "ca.vlacroix.Paper.Devel");
        assert!(identity.is_devel_build());
    }

    #[test]
    fn release_identity_has_neither() {
        let identity = AppIdentity::resolve("ca.vlacroix.Paper", BuildProfile::RELEASE);
        assert_eq!(identity.application_id(), "ca.vlacroix.Paper");
        assert!(!identity.is_devel_build());
        assert_eq!(identity.application_version(), VERSION);
    }

    #[test]
    fn current_profile_follows_feature() {
        assert_eq!(BuildProfile::current().devel, cfg!(feature = "devel"));
    }

    #[test]
    fn profile_parses_from_options() {
        let profile: BuildProfile = serde_json::from_str(r#"{ "devel": true }"#).unwrap();
        assert_eq!(profile, BuildProfile::DEVEL);

        let profile: BuildProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, BuildProfile::RELEASE);

        assert!(serde_json::from_str::<BuildProfile>(r#"{ "debug": true }"#).is_err());
    }
}
