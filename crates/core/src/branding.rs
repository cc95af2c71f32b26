//! Project branding configuration.

use serde::{Deserialize, Serialize};

/// White-label theming for the host project.
///
/// Delivered with the project configuration and cached as a singleton so the
/// UI can render with the right theme before the first network round trip
/// completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBranding {
    pub ui_primary_color: String,
    pub ui_secondary_color: String,
    pub text_primary_color: String,
    pub text_secondary_color: String,
    pub ui_error_color: String,
    pub ui_success_color: String,
    pub logo_url: Option<String>,
    pub ui_theme: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let branding = ProjectBranding {
            ui_primary_color: "#0A84FF".to_string(),
            ui_secondary_color: "#FF9F0A".to_string(),
            text_primary_color: "#FFFFFF".to_string(),
            text_secondary_color: "#EBEBF5".to_string(),
            ui_error_color: "#FF453A".to_string(),
            ui_success_color: "#32D74B".to_string(),
            logo_url: None,
            ui_theme: "theme_2".to_string(),
        };
        let json = serde_json::to_string(&branding).unwrap();
        let back: ProjectBranding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, branding);
    }
}
