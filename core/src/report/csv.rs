use iotscan_common::device::Device;

pub const HEADER: &str =
    "IP Address,MAC Address,Vendor,Device Type,Risk Level,Open Ports,Vulnerabilities";

/// One header line plus one line per device, each `\n` terminated.
///
/// Free-text columns are wrapped in quotes as-is; nothing is escaped.
pub fn render(devices: &[Device]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + devices.len() * 160);
    out.push_str(HEADER);
    out.push('\n');
    for device in devices {
        out.push_str(&row(device));
        out.push('\n');
    }
    out
}

fn row(device: &Device) -> String {
    let ports: String = device
        .open_ports()
        .iter()
        .map(u16::to_string)
        .collect::<Vec<String>>()
        .join("; ");

    let vulns: String = device
        .vulnerabilities()
        .iter()
        .map(|vuln| format!("{} ({})", vuln.name, vuln.severity))
        .collect::<Vec<String>>()
        .join("; ");

    [
        device.ip().to_string(),
        device.mac().to_string(),
        format!("\"{}\"", device.vendor()),
        device.kind().to_string(),
        device.risk().to_string(),
        format!("\"{ports}\""),
        format!("\"{vulns}\""),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotscan_common::pool;
    use iotscan_common::vulnerability::Finding;

    #[test]
    fn two_devices_make_three_lines() {
        let devices = vec![
            Device::assess(
                pool::find("192.168.1.110").expect("camera"),
                &[Finding::DefaultCredentials, Finding::UnsecuredTelnet],
            ),
            Device::assess(pool::find("192.168.1.120").expect("thermostat"), &[]),
        ];

        let csv = render(&devices);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "192.168.1.110,F8:E0:79:12:34:56,\"Wyze Labs\",Camera,High,\"22; 23; 80; 443\",\"Default Credentials (High); Unsecured Telnet (High)\""
        );
        assert_eq!(
            lines[2],
            "192.168.1.120,18:B4:30:34:56:78,\"Google Inc.\",Thermostat,Low,\"80; 443\",\"Standard Ports Open (Low)\""
        );
    }

    #[test]
    fn smart_plug_keeps_hyphenated_type() {
        let plug = Device::assess(pool::find("192.168.1.115").expect("plug"), &[]);
        assert!(row(&plug).contains(",Smart-Plug,"));
    }
}
