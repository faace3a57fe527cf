//! Site settings (singleton)
//!
//! Settings are not a collection: one record, read by the public site and
//! replaced wholesale from the admin settings screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Color scheme propagated to the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
    Auto,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SiteSettings {
    pub site_title: String,
    pub site_tagline: String,

    #[validate(email(message = "Please enter a valid email address"))]
    pub contact_email: String,

    pub contact_phone: String,
    pub description: String,
    pub logo_url: String,
    pub favicon_url: String,
    pub primary_color: String,
    pub dark_mode: bool,
    pub color_scheme: ColorScheme,
    pub allow_registrations: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Example Industrial — We Supply Your Growth".to_string(),
            site_tagline: "We Supply Your Growth".to_string(),
            contact_email: "info@example.com".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
            description: "Comprehensive solutions to supply your business growth.".to_string(),
            logo_url: "/imgs/site-logo.png".to_string(),
            favicon_url: "/imgs/favicon.ico".to_string(),
            primary_color: "#228be6".to_string(),
            dark_mode: true,
            color_scheme: ColorScheme::Dark,
            allow_registrations: false,
        }
    }
}
