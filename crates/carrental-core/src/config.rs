use crate::error::{Result, RentalError};
use crate::page::WelcomePage;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

impl WarnLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarnLevel::Warning => "warning",
            WarnLevel::Error => "error",
        }
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

/// Visible text of the welcome page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_button_label")]
    pub button_label: String,
}

fn default_title() -> String {
    "Welcome to Car Rental System".to_string()
}

fn default_heading() -> String {
    "Welcome to Our Car Rental System".to_string()
}

fn default_message() -> String {
    "Click below to continue to rent a car.".to_string()
}

fn default_button_label() -> String {
    "Continue to Rent a Car".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: default_heading(),
            message: default_message(),
            button_label: default_button_label(),
        }
    }
}

// ---------------------------------------------------------------------------
// RegistrationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Form action the button navigates to. Relative paths resolve against
    /// the page URL in the browser.
    #[serde(default = "default_action")]
    pub action: String,
}

fn default_action() -> String {
    paths::DEFAULT_REGISTRATION_PATH.to_string()
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            action: default_action(),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_page_path")]
    pub page_path: String,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_page_path() -> String {
    "/".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            page_path: default_page_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            site: SiteConfig::default(),
            registration: RegistrationConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load `.carrental/config.yaml` under `root`. A missing file yields the
    /// defaults; a malformed one is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// The page content this configuration describes.
    pub fn page(&self) -> WelcomePage {
        WelcomePage {
            title: self.site.title.clone(),
            heading: self.site.heading.clone(),
            message: self.site.message.clone(),
            button_label: self.site.button_label.clone(),
            action: self.registration.action.trim().to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        // 1. Visible text
        for (field, value) in [
            ("site.title", &self.site.title),
            ("site.heading", &self.site.heading),
            ("site.message", &self.site.message),
        ] {
            if value.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{field} is empty"),
                });
            }
        }
        if self.site.button_label.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "site.button_label is empty: the button would have no visible label"
                    .to_string(),
            });
        }

        // 2. Registration target
        let action = self.registration.action.trim();
        if action.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "registration.action is empty".to_string(),
            });
        } else {
            if action.contains('?') || action.contains('#') {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "registration.action '{action}' carries a query or fragment; \
                         a GET form submission replaces it"
                    ),
                });
            }
            if let Some(scheme) = url_scheme(action) {
                if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https")
                {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!(
                            "registration.action uses unsupported scheme '{scheme}'"
                        ),
                    });
                }
            }
        }

        // 3. Mount point
        let page_path = &self.server.page_path;
        if !page_path.starts_with('/') {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("server.page_path '{page_path}' must start with '/'"),
            });
        } else if let Some(segment) = page_path.split('/').find(|s| !is_literal_segment(s)) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "server.page_path '{page_path}' has segment '{segment}': \
                     use only ASCII letters, digits and '-', '.', '_', '~'"
                ),
            });
        }

        warnings
    }

    /// Fail on the first error-level warning. Warnings alone are accepted.
    pub fn ensure_valid(&self) -> Result<()> {
        match self
            .validate()
            .into_iter()
            .find(|w| w.level == WarnLevel::Error)
        {
            Some(w) => Err(RentalError::InvalidConfig(w.message)),
            None => Ok(()),
        }
    }
}

/// A path segment the router matches verbatim and a browser sends unencoded.
/// Empty segments come from the leading or a trailing slash.
fn is_literal_segment(segment: &str) -> bool {
    if segment == "." || segment == ".." {
        return false;
    }
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}

/// The URI scheme of `target`, if it is an absolute URI.
fn url_scheme(target: &str) -> Option<&str> {
    let (scheme, _) = target.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}
