pub const APP_NAME: &str = "SaaS Valuator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
/// Public page the share links point at, when the build sets one.
pub const APP_HOMEPAGE: Option<&str> = option_env!("SAAS_VALUATOR_HOMEPAGE");

/// Release tag when built from a tagged checkout, crate version otherwise.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}
