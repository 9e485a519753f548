//! A build script's release steps run end to end.

#[cfg(all(test, unix))]
mod tests {
    use relkit_tests::{read_archive, write_changelog};
    use shell::{ExecOptions, ShellError};
    use tempfile::TempDir;

    #[test]
    fn test_true_succeeds() {
        let result = shell::execute("true", "msg", &ExecOptions::default()).unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_false_fails_unless_tolerated() {
        let err = shell::execute("false", "msg", &ExecOptions::default()).unwrap_err();
        assert!(matches!(err, ShellError::ExecutionFailed { .. }));
        let text = err.to_string();
        assert!(text.contains("msg"));
        assert!(text.contains("false"));

        let result =
            shell::execute("false", "msg", &ExecOptions::default().tolerate_failure()).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn test_build_pack_and_notes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let dist = root.join("dist");

        support::make_dir(&dist, true).unwrap();
        let build = format!(
            "mkdir -p '{0}/bin' && printf 'v1' > '{0}/bin/app' && echo built",
            dist.display()
        );
        let result = shell::execute(&build, "Build failed", &ExecOptions::default().silent())
            .unwrap();
        assert_eq!(result.trimmed_output(), "built");

        let packed = archive::pack_directory(&dist, Some(&root.join("app-1.0.0.zip"))).unwrap();
        assert_eq!(
            read_archive(&packed),
            vec![("app-1.0.0/bin/app".to_string(), b"v1".to_vec())]
        );

        write_changelog(root).unwrap();
        let notes = changelog::load_release_notes(root, "1.0.0").unwrap();
        assert_eq!(notes, "- Initial release");

        // Notes are safe inside a double-quoted shell string
        let echo = format!("printf '%s' \"{}\"", notes);
        let echoed = shell::execute(&echo, "echo failed", &ExecOptions::default().silent())
            .unwrap();
        assert_eq!(echoed.output, "- Initial release");
    }

    #[test]
    fn test_escaped_notes_round_trip_through_shell() {
        let temp_dir = TempDir::new().unwrap();
        write_changelog(temp_dir.path()).unwrap();
        let notes = changelog::load_release_notes(temp_dir.path(), "1.1.0").unwrap();

        let echo = format!("printf '%s' \"{}\"", notes);
        let echoed = shell::execute(&echo, "echo failed", &ExecOptions::default().silent())
            .unwrap();

        assert_eq!(
            echoed.output,
            "- Added \"dry run\" mode\n- Fixed packaging of empty directories"
        );
    }
}
