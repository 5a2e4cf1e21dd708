//! These tests are replicated in the crate documentation as a doc test
//! Please try to keep them in sync

mod update_check_test {
    use crate::{parse, VersionValue};

    /// A caller comparing an installed module against the newest available one.
    /// Whatever could not be parsed is ignored, only the version prefix counts.
    fn is_update_available(installed: &str, available: &str) -> Option<bool> {
        let installed = parse(installed).version?;
        let available = parse(available).version?;
        Some(available > installed)
    }

    #[test]
    fn test_update_available() {
        assert_eq!(is_update_available("5.1.2.0-preview", "5.1.10"), Some(true));
        assert_eq!(is_update_available("2.0.0", "1.9.9.9.9"), Some(false));
        assert_eq!(is_update_available("1.2", "1.2.0"), Some(true));
        assert_eq!(is_update_available("1.2.3", "1.2.3"), Some(false));
        assert_eq!(is_update_available("latest", "1.2.3"), None);
    }

    #[test]
    fn test_installed_versions_sort() {
        let mut versions = ["1.10", "1.2.3.4-rc", "1.2", "1.2.0", "0.9.2147483700"]
            .iter()
            .filter_map(|v| parse(v).version)
            .collect::<Vec<_>>();
        versions.sort();
        assert_eq!(
            versions,
            vec![
                VersionValue::with_build(0, 9, i32::MAX),
                VersionValue::new(1, 2),
                VersionValue::with_build(1, 2, 0),
                VersionValue::with_revision(1, 2, 3, 4),
                VersionValue::new(1, 10),
            ]
        );
    }
}

mod leftovers_test {
    use crate::{parse, Component, ParseOutcome};

    /// Everything that was dropped, for a warning message.
    fn describe_leftovers(input: &str) -> Vec<String> {
        let parsed = parse(input);
        let mut dropped = Component::ALL
            .iter()
            .filter(|c| !parsed.leftovers.get(**c).is_empty())
            .map(|c| format!("{}: {}", c, parsed.leftovers.get(*c)))
            .collect::<Vec<_>>();
        if !parsed.leftovers.excess().is_empty() {
            dropped.push(format!("excess: {}", parsed.leftovers.excess()));
        }
        dropped
    }

    #[test]
    fn test_describe_leftovers() {
        assert_eq!(
            describe_leftovers("1.2.2147483700.4.5"),
            vec!["build: 53", "revision: 4", "excess: 5"]
        );
        assert!(describe_leftovers("1.2.3.4").is_empty());
    }

    #[test]
    fn test_outcome_codes_match_truncated_component() {
        let parsed = parse("1.2.3-rc1");
        assert_eq!(parsed.outcome.code(), 3);
        assert_eq!(parsed.outcome.truncated(), Some(Component::Build));
        assert_eq!(ParseOutcome::from_code(-1), Some(ParseOutcome::Unparseable));
    }
}

mod serde_test {
    use crate::VersionValue;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct ModuleSpec {
        name: String,
        version: VersionValue,
    }

    #[test]
    fn test_serde_feature() {
        let input = r#"
            {
                "name": "PackageManagement",
                "version": "1.4.8.1"
            }"#;

        let module = serde_json::from_str::<ModuleSpec>(input).unwrap();
        assert_eq!(module.name, "PackageManagement");
        assert_eq!(module.version, VersionValue::with_revision(1, 4, 8, 1));

        let input = r#"{ "name": "PowerShellGet", "version": "3.0.0-beta10" }"#;
        assert!(serde_json::from_str::<ModuleSpec>(input).is_err());
    }
}
