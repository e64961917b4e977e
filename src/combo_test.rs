/// Tests for capability descriptions
#[cfg(test)]
mod tests {
    use crate::combo::describe;
    use crate::types::Capabilities;

    fn caps() -> Capabilities {
        Capabilities::default()
    }

    #[test]
    fn test_desktop_verbose() {
        let c = Capabilities {
            browser_name: Some("chrome".to_string()),
            version: Some("91".to_string()),
            platform: Some("linux".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, true), "chrome (v91) on linux");
    }

    #[test]
    fn test_desktop_verbose_skips_missing_parts() {
        let c = Capabilities { browser_name: Some("firefox".to_string()), ..caps() };
        assert_eq!(describe(&c, true), "firefox");

        let c = Capabilities {
            browser_name: Some("safari".to_string()),
            platform_name: Some("macOS".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, true), "safari on macOS");
    }

    #[test]
    fn test_desktop_compact_collapses_empty_fields() {
        let c = Capabilities {
            browser_name: Some("chrome".to_string()),
            version: Some("91".to_string()),
            platform: Some("linux".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, false), "chrome 91 linux");

        let c = Capabilities {
            browser_name: Some("chrome".to_string()),
            platform: Some("linux".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, false), "chrome linux");
    }

    #[test]
    fn test_version_falls_back_to_platform_version() {
        let c = Capabilities {
            browser_name: Some("chrome".to_string()),
            version: Some(String::new()),
            platform_version: Some("12".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, true), "chrome (v12)");
    }

    #[test]
    fn test_mobile_verbose_without_program_omits_clause() {
        let c = Capabilities {
            device_name: Some("iPhone".to_string()),
            platform: Some("iOS".to_string()),
            platform_version: Some("14".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, true), "iPhone on iOS 14");
    }

    #[test]
    fn test_mobile_verbose_falls_back_to_browser() {
        let c = Capabilities {
            device_name: Some("Pixel 4".to_string()),
            platform_name: Some("Android".to_string()),
            platform_version: Some("11".to_string()),
            browser_name: Some("chrome".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, true), "Pixel 4 on Android 11 executing chrome");
    }

    #[test]
    fn test_mobile_verbose_strips_storage_prefix() {
        let c = Capabilities {
            device_name: Some("iPad".to_string()),
            platform_name: Some("iOS".to_string()),
            platform_version: Some("15".to_string()),
            app: Some("sauce-storage:MyApp.zip".to_string()),
            browser_name: Some("safari".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, true), "iPad on iOS 15 executing MyApp.zip");
    }

    #[test]
    fn test_mobile_compact() {
        let c = Capabilities {
            device_name: Some("iPhone".to_string()),
            platform: Some("iOS".to_string()),
            version: Some("14".to_string()),
            app: Some("sauce-storage:MyApp.zip".to_string()),
            ..caps()
        };
        assert_eq!(describe(&c, false), "iPhone iOS 14");
    }

    #[test]
    fn test_empty_capabilities_never_fail() {
        assert_eq!(describe(&caps(), true), "");
        assert_eq!(describe(&caps(), false), "");

        let device_only = Capabilities { device_name: Some("Emulator".to_string()), ..caps() };
        assert_eq!(describe(&device_only, true), "Emulator on");
        assert_eq!(describe(&device_only, false).trim(), "Emulator");
    }
}
