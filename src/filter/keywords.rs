use once_cell::sync::Lazy;

/// Job-title keywords that mark an LCA posting as cybersecurity-related.
pub static CYBER_KEYWORDS: &[&str] = &[
    "cybersecurity",
    "security",
    "information security",
    "infosec",
    "cyber",
    "network security",
    "vulnerability",
    "penetration",
    "red team",
    "blue team",
    "purple team",
    "threat",
    "incident",
    "firewall",
    "IDS",
    "IPS",
    "appsec",
    "devsecops",
    "DFIR",
    "malware",
    "reverse engineer",
    "SOC",
    "GRC",
    "identity and access management",
    "IAM",
    "access control",
    "zero trust",
    "cryptography",
    "blockchain security",
    "PKI",
    "crypto",
    "encryption",
    "iot security",
    "SCADA",
    "ICS",
    "ethical hacking",
    "SIEM",
    "splunk",
    "QRadar",
];

// Folded once; matching is case-insensitive on both sides.
static FOLDED: Lazy<Vec<String>> =
    Lazy::new(|| CYBER_KEYWORDS.iter().map(|k| k.to_lowercase()).collect());

/// True if `title` contains at least one keyword, ignoring case.
pub fn is_cyber_title(title: &str) -> bool {
    let folded = title.to_lowercase();
    FOLDED.iter().any(|k| folded.contains(k.as_str()))
}
