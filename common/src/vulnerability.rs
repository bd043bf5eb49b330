//! # Vulnerability Catalog
//!
//! The fixed set of findings the simulator can attach to a device.
//!
//! Findings are keyed by [`Finding`]; each one resolves to an immutable
//! [`Vulnerability`] template and, for some, the port that the finding implies
//! is open on the device.

use std::fmt;

/// Ordinal risk classification, `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vulnerability {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Catalog key for every vulnerability template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finding {
    DefaultCredentials,
    UnsecuredTelnet,
    UnsecuredFtp,
    UnencryptedAdminPanel,
    OutdatedFirmware,
    /// Informational entry given to devices nothing else fired on.
    StandardPortsOpen,
}

impl Finding {
    pub const ALL: [Finding; 6] = [
        Finding::DefaultCredentials,
        Finding::UnsecuredTelnet,
        Finding::UnsecuredFtp,
        Finding::UnencryptedAdminPanel,
        Finding::OutdatedFirmware,
        Finding::StandardPortsOpen,
    ];

    pub fn vulnerability(&self) -> Vulnerability {
        match self {
            Finding::DefaultCredentials => DEFAULT_CREDENTIALS,
            Finding::UnsecuredTelnet => UNSECURED_TELNET,
            Finding::UnsecuredFtp => UNSECURED_FTP,
            Finding::UnencryptedAdminPanel => UNENCRYPTED_ADMIN_PANEL,
            Finding::OutdatedFirmware => OUTDATED_FIRMWARE,
            Finding::StandardPortsOpen => STANDARD_PORTS_OPEN,
        }
    }

    pub fn severity(&self) -> Severity {
        self.vulnerability().severity
    }

    /// Port opened in lockstep with this finding, if any.
    pub fn port(&self) -> Option<u16> {
        match self {
            Finding::DefaultCredentials => Some(22),
            Finding::UnsecuredTelnet => Some(23),
            Finding::UnsecuredFtp => Some(21),
            _ => None,
        }
    }
}

const DEFAULT_CREDENTIALS: Vulnerability = Vulnerability {
    name: "Default Credentials",
    severity: Severity::High,
    description: "The device is using a default factory password which is publicly known.",
    recommendation: "Change the default password immediately through the device's admin interface.",
};

const UNSECURED_TELNET: Vulnerability = Vulnerability {
    name: "Unsecured Telnet",
    severity: Severity::High,
    description: "Telnet service is enabled, which transmits data, including credentials, in plaintext.",
    recommendation: "Disable Telnet service and use SSH if remote access is required.",
};

const UNSECURED_FTP: Vulnerability = Vulnerability {
    name: "Unsecured FTP",
    severity: Severity::Medium,
    description: "FTP service is enabled, which can be vulnerable to brute-force attacks and sniffing.",
    recommendation: "Disable FTP if not needed, or use a secure alternative like SFTP.",
};

const UNENCRYPTED_ADMIN_PANEL: Vulnerability = Vulnerability {
    name: "Unencrypted Admin Panel",
    severity: Severity::Medium,
    description: "The device's web administration panel is served over HTTP, not HTTPS.",
    recommendation: "Enable HTTPS on the device's admin panel. If not possible, only access it from a trusted network.",
};

const OUTDATED_FIRMWARE: Vulnerability = Vulnerability {
    name: "Outdated Firmware (Simulated)",
    severity: Severity::Medium,
    description: "Firmware may be outdated, potentially missing critical security patches.",
    recommendation: "Check the manufacturer's website for firmware updates and apply them.",
};

const STANDARD_PORTS_OPEN: Vulnerability = Vulnerability {
    name: "Standard Ports Open",
    severity: Severity::Low,
    description: "Standard ports like HTTP (80) and HTTPS (443) are open for normal operation.",
    recommendation: "Ensure all services running on these ports are secure and up-to-date. No immediate action required if properly configured.",
};
