//! Cached user-profile model mirroring the remote profile API.

use serde::{Deserialize, Serialize};

/// Platform role carried by the remote profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Partner,
    Admin,
}

impl Role {
    /// Strict coercion: anything outside the enum reads as no role rather
    /// than propagating a wrong value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "partner" => Some(Role::Partner),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Partner => "partner",
            Role::Admin => "admin",
        }
    }
}

/// Snapshot of the last successful remote read or write.
///
/// Never the source of truth; the remote profile API is. Replaced wholesale
/// after a successful fetch or save, cleared at logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub socials: String,

    #[serde(default)]
    pub github: String,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserProfile {
    /// Display name, else the capitalized local part of the email, else
    /// "User".
    pub fn display_name_or_fallback(&self) -> String {
        if !self.display_name.is_empty() {
            return self.display_name.clone();
        }
        let local = self.email.split('@').next().unwrap_or("");
        let mut chars = local.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => "User".to_string(),
        }
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        if !self.display_name.is_empty() {
            return self
                .display_name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .flat_map(|c| c.to_uppercase())
                .take(2)
                .collect();
        }
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Parse a comma-separated skills field, trimming entries and dropping
/// empties. Order is preserved.
pub fn parse_skills(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_rejects_unknown_values() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("partner"), Some(Role::Partner));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn serde_uses_camel_case_field_names() {
        let profile = UserProfile {
            email: "a@b.c".into(),
            first_name: "Ada".into(),
            display_name: "Ada L".into(),
            role: Some(Role::Partner),
            ..Default::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"displayName\":\"Ada L\""));
        assert!(json.contains("\"role\":\"partner\""));
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let profile = UserProfile {
            email: "builder@example.com".into(),
            ..Default::default()
        };
        assert_eq!(profile.display_name_or_fallback(), "Builder");

        let empty = UserProfile::default();
        assert_eq!(empty.display_name_or_fallback(), "User");
    }

    #[test]
    fn initials_come_from_display_name_then_email() {
        let named = UserProfile {
            display_name: "jason liu".into(),
            ..Default::default()
        };
        assert_eq!(named.initials(), "JL");

        let email_only = UserProfile {
            email: "builder@example.com".into(),
            ..Default::default()
        };
        assert_eq!(email_only.initials(), "B");

        assert_eq!(UserProfile::default().initials(), "U");
    }

    #[test]
    fn skills_split_on_commas() {
        assert_eq!(parse_skills("move, react , , content"), vec!["move", "react", "content"]);
        assert!(parse_skills("").is_empty());
    }
}
