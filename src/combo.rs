/// Human-readable description of the environment a worker runs against
///
/// Mobile capabilities (anything with a device name) describe the device and
/// the program under test; everything else describes browser, version and
/// platform.
use crate::types::Capabilities;

/// Prefix of apps uploaded to the remote grid's storage
const STORAGE_PREFIX: &str = "sauce-storage:";

/// Describe a capability set, compact or verbose.
///
/// Never fails: absent fields render as empty strings.
pub fn describe(caps: &Capabilities, verbose: bool) -> String {
    let version = non_empty(&caps.version).or(non_empty(&caps.platform_version)).unwrap_or("");
    let platform = non_empty(&caps.platform).or(non_empty(&caps.platform_name)).unwrap_or("");
    let browser = non_empty(&caps.browser_name).unwrap_or("");

    if let Some(device) = non_empty(&caps.device_name) {
        if !verbose {
            return format!("{} {} {}", device, platform, version);
        }

        let app = caps.app.as_deref().unwrap_or("").replacen(STORAGE_PREFIX, "", 1);
        let program = if app.is_empty() { browser } else { app.as_str() };
        let executing = if program.is_empty() { String::new() } else { format!("executing {}", program) };

        return format!("{} on {} {} {}", device, platform, version, executing).trim().to_string();
    }

    if !verbose {
        return [browser, version, platform].iter().filter(|s| !s.is_empty()).copied().collect::<Vec<_>>().join(" ");
    }

    let mut out = browser.to_string();
    if !version.is_empty() {
        out.push_str(&format!(" (v{})", version));
    }
    if !platform.is_empty() {
        out.push_str(&format!(" on {}", platform));
    }
    out
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "combo_test.rs"]
mod combo_test;
