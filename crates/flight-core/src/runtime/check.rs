//! Detection of the tools the install step relies on

use std::process::Command;

/// Detection result for one tool.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn check_version(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available.
pub fn check_node() -> RuntimeInfo {
    check_version("Node.js", "node")
}

/// Check if Bower is available.
pub fn check_bower() -> RuntimeInfo {
    check_version("Bower", "bower")
}

/// Check the tools the install step relies on. Availability is advisory: a
/// missing tool downgrades the install step, it never fails the run.
pub fn check_install_tools() -> Vec<RuntimeInfo> {
    vec![check_node(), check_bower()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_unavailable() {
        let info = check_version("Nothing", "definitely-not-a-real-binary-name");
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
