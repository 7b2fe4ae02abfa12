use chrono::{DateTime, Datelike};

pub const NAME: &str = "Santhosh Petchimuthu";
pub const TAGLINE: &str = "AI/ML Enthusiast & Developer";
pub const EMAIL: &str = "santhosh@example.com";

/// Set by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

/// An outbound contact channel; always a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnicalSkill {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftSkill {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const PERSONAL_DETAILS: [Detail; 4] = [
    Detail {
        icon: "extra-location",
        label: "Location",
        value: "Tamil Nadu, India",
        link: None,
    },
    Detail {
        icon: "extra-email",
        label: "Email",
        value: EMAIL,
        link: Some("mailto:santhosh@example.com"),
    },
    Detail {
        icon: "extra-phone",
        label: "Phone",
        value: "+91 XXXXX XXXXX",
        link: None,
    },
    Detail {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "Connect",
        link: Some("https://linkedin.com"),
    },
];

pub const CONTACT_DETAILS: [ContactLink; 4] = [
    ContactLink {
        icon: "extra-email",
        label: "Email",
        value: EMAIL,
        link: "mailto:santhosh@example.com",
    },
    ContactLink {
        icon: "extra-phone",
        label: "Phone",
        value: "+91 XXXXX XXXXX",
        link: "tel:+91XXXXXXXXXX",
    },
    ContactLink {
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
        value: "Connect",
        link: "https://linkedin.com",
    },
    ContactLink {
        icon: "devicon-github-plain",
        label: "GitHub",
        value: "Follow",
        link: "https://github.com",
    },
];

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "extra-award",
        title: "Certifications",
        description: "TensorFlow Developer, AWS Certified ML",
    },
    Highlight {
        icon: "extra-heart",
        title: "Interests",
        description: "Deep Learning, Computer Vision, NLP",
    },
    Highlight {
        icon: "extra-wrench",
        title: "Favorite Tools",
        description: "Python, React, TensorFlow, PyTorch",
    },
];

pub const TECHNICAL_SKILLS: [TechnicalSkill; 6] = [
    TechnicalSkill { name: "Python", icon: "devicon-python-plain", level: 95 },
    TechnicalSkill { name: "TensorFlow/PyTorch", icon: "devicon-tensorflow-original", level: 90 },
    TechnicalSkill { name: "React/Next.js", icon: "devicon-react-original", level: 85 },
    TechnicalSkill { name: "SQL/NoSQL", icon: "devicon-postgresql-plain", level: 80 },
    TechnicalSkill { name: "Machine Learning", icon: "extra-brain", level: 92 },
    TechnicalSkill { name: "Deep Learning", icon: "extra-brain", level: 88 },
];

pub const SOFT_SKILLS: [SoftSkill; 4] = [
    SoftSkill {
        name: "Teamwork",
        icon: "extra-users",
        description: "Collaborative problem-solving",
    },
    SoftSkill {
        name: "Problem Solving",
        icon: "extra-lightbulb",
        description: "Analytical thinking",
    },
    SoftSkill {
        name: "Communication",
        icon: "extra-message",
        description: "Clear articulation",
    },
    SoftSkill {
        name: "Goal-Oriented",
        icon: "extra-target",
        description: "Result-driven approach",
    },
];

/// Year of the build, for the footer. `None` if the timestamp can't be parsed.
pub fn build_year(build_time: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|dt| dt.year())
}

pub fn copyright_line() -> String {
    let year = build_year(BUILD_TIME)
        .map(|y| y.to_string())
        .unwrap_or_else(|| BUILD_TIME.chars().take(4).collect());
    format!("© {year} {NAME}. All rights reserved.")
}

/// Entrance animation delay for the `index`th item of a staggered list.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {}ms", index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2024-03-01T12:00:00+00:00"), Some(2024));
        assert_eq!(build_year("2026-10-18T23:59:59.123456789Z"), Some(2026));
        assert_eq!(build_year("yesterday"), None);
    }

    #[test]
    fn test_copyright_line() {
        let line = copyright_line();
        assert!(line.starts_with("© "));
        assert!(line.ends_with("Santhosh Petchimuthu. All rights reserved."));
        assert!(build_year(BUILD_TIME).is_some());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(TECHNICAL_SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "animation-delay: 0ms");
        assert_eq!(stagger_delay(3), "animation-delay: 300ms");
    }

    #[test]
    fn test_contact_links() {
        let schemes = ["mailto:", "tel:", "https://"];
        assert!(CONTACT_DETAILS
            .iter()
            .all(|d| schemes.iter().any(|s| d.link.starts_with(s))));
        assert_eq!(PERSONAL_DETAILS.iter().filter(|d| d.link.is_some()).count(), 2);
    }
}
