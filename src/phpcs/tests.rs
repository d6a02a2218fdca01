//! Tests for command construction and execution.

use super::{Invocation, build_command};
use crate::config::{Overrides, PhpcsOptions, TaskFile};
use crate::error::RunnerError;
use crate::log::CaptureLog;

fn options() -> PhpcsOptions {
    PhpcsOptions::default()
}

#[test]
fn test_all_defaults_emit_only_bin_and_dir() {
    let command = build_command(&options(), "lib").unwrap();
    assert_eq!(command.to_string(), "phpcs lib");
    assert_eq!(command.program(), "phpcs");
    assert_eq!(command.args(), ["lib"]);
}

#[test]
fn test_standard_and_verbose() {
    let opts = PhpcsOptions {
        standard: Some("PSR2".to_string()),
        verbose: true,
        ..options()
    };
    let command = build_command(&opts, "src/").unwrap();
    assert_eq!(command.tokens(), ["phpcs", "--standard=PSR2", "-v", "src/"]);
    assert_eq!(command.to_string(), "phpcs --standard=PSR2 -v src/");
}

#[test]
fn test_every_flag_in_fixed_order() {
    let opts = PhpcsOptions {
        bin: "vendor/bin/phpcs".to_string(),
        extensions: Some("php,inc".to_string()),
        ignore: Some("*/vendor/*".to_string()),
        report_type: Some("checkstyle".to_string()),
        report_file: Some("build/phpcs.xml".to_string()),
        severity: Some(1),
        error_severity: Some(2),
        warning_severity: Some(3),
        standard: Some("PSR12".to_string()),
        verbose: true,
    };
    let command = build_command(&opts, "src").unwrap();

    assert_eq!(
        command.tokens(),
        [
            "vendor/bin/phpcs",
            "--extensions=php,inc",
            "--ignore=*/vendor/*",
            "--severity=1",
            "--error-severity=2",
            "--warning-severity=3",
            "--standard=PSR12",
            "--report=checkstyle",
            "--report-file=build/phpcs.xml",
            "-v",
            "src",
        ]
    );
}

#[test]
fn test_omitted_fields_leave_no_gap() {
    let opts = PhpcsOptions {
        ignore: Some("tests".to_string()),
        report_file: Some("out.txt".to_string()),
        ..options()
    };
    let command = build_command(&opts, "app").unwrap();
    assert_eq!(
        command.tokens(),
        ["phpcs", "--ignore=tests", "--report-file=out.txt", "app"]
    );
}

#[test]
fn test_each_set_flag_appears_exactly_once() {
    let opts = PhpcsOptions {
        severity: Some(5),
        standard: Some("Squiz".to_string()),
        ..options()
    };
    let command = build_command(&opts, "src").unwrap();
    let count = |prefix: &str| command.tokens().iter().filter(|t| t.starts_with(prefix)).count();

    assert_eq!(count("--severity="), 1);
    assert_eq!(count("--standard="), 1);
    assert_eq!(count("--report"), 0);
    assert_eq!(count("-v"), 0);
}

#[test]
fn test_severity_zero_is_omitted() {
    let opts = PhpcsOptions {
        severity: Some(0),
        error_severity: Some(0),
        warning_severity: Some(0),
        ..options()
    };
    let command = build_command(&opts, "lib").unwrap();
    assert_eq!(command.to_string(), "phpcs lib");
}

#[test]
fn test_empty_string_values_are_omitted() {
    let opts = PhpcsOptions {
        standard: Some(String::new()),
        ..options()
    };
    let command = build_command(&opts, "lib").unwrap();
    assert_eq!(command.tokens(), ["phpcs", "lib"]);
}

#[test]
fn test_values_are_appended_verbatim() {
    let opts = PhpcsOptions {
        standard: Some(" PSR2".to_string()),
        ..options()
    };
    let command = build_command(&opts, "lib").unwrap();
    assert_eq!(command.tokens(), ["phpcs", "--standard= PSR2", "lib"]);
}

#[cfg(not(windows))]
#[test]
fn test_directory_is_last_and_normalized() {
    let opts = PhpcsOptions {
        standard: Some("PSR2".to_string()),
        ..options()
    };
    let command = build_command(&opts, "./src//app/../lib/").unwrap();
    assert_eq!(command.tokens().last().map(String::as_str), Some("src/lib/"));
}

#[test]
fn test_bin_with_arguments_is_split() {
    let opts = PhpcsOptions {
        bin: "php ./vendor/bin/phpcs.phar".to_string(),
        standard: Some("PSR2".to_string()),
        ..options()
    };
    let command = build_command(&opts, "src").unwrap();

    assert_eq!(command.program(), "php");
    assert_eq!(
        command.tokens(),
        ["php", "./vendor/bin/phpcs.phar", "--standard=PSR2", "src"]
    );
}

#[cfg(not(windows))]
#[test]
fn test_bin_program_is_normalized() {
    let opts = PhpcsOptions {
        bin: "./vendor//bin/phpcs".to_string(),
        ..options()
    };
    let command = build_command(&opts, "src").unwrap();
    assert_eq!(command.program(), "vendor/bin/phpcs");
}

#[test]
fn test_bin_with_unmatched_quote_is_config_error() {
    let opts = PhpcsOptions {
        bin: "php 'vendor/bin/phpcs".to_string(),
        ..options()
    };
    let err = build_command(&opts, "src").unwrap_err();

    assert!(matches!(err, RunnerError::ConfigError(_)));
    assert!(err.to_string().contains("failed to parse bin"));
}

#[test]
fn test_display_quotes_tokens_with_spaces() {
    let command = build_command(&options(), "my project").unwrap();
    assert_eq!(command.to_string(), "phpcs 'my project'");
}

#[test]
fn test_display_quotes_shell_patterns_only() {
    let opts = PhpcsOptions {
        ignore: Some("*/vendor/*".to_string()),
        report_type: Some("xml".to_string()),
        ..options()
    };
    let command = build_command(&opts, "src").unwrap();
    assert_eq!(
        command.to_string(),
        "phpcs '--ignore=*/vendor/*' --report=xml src"
    );
}

fn task_file(yaml: &str) -> TaskFile {
    TaskFile::from_yaml(yaml).unwrap()
}

fn setup(tf: &TaskFile, overrides: &Overrides, log: &mut CaptureLog) -> Invocation {
    Invocation::setup("app", &tf.targets["app"], tf, overrides, log).unwrap()
}

#[test]
fn test_setup_applies_cli_precedence() {
    let tf = task_file(
        r#"
targets:
  app:
    dir: src
    options:
      report_type: checkstyle
"#,
    );
    let overrides = Overrides {
        report: Some("xml".to_string()),
        ..Default::default()
    };
    let mut log = CaptureLog::new(false);
    let invocation = setup(&tf, &overrides, &mut log);

    assert_eq!(invocation.command().to_string(), "phpcs --report=xml src");
    assert_eq!(invocation.options().report_type.as_deref(), Some("xml"));
}

#[test]
fn test_setup_severity_zero_in_task_file_is_omitted() {
    let tf = task_file("options:\n  severity: 0\ntargets:\n  app:\n    dir: lib\n");
    let mut log = CaptureLog::new(false);
    let invocation = setup(&tf, &Overrides::default(), &mut log);

    assert_eq!(invocation.command().to_string(), "phpcs lib");
}

#[test]
fn test_setup_logs_starting_line() {
    let tf = task_file("targets:\n  app:\n    dir: src/\n");
    let mut log = CaptureLog::new(false);
    let invocation = setup(&tf, &Overrides::default(), &mut log);

    assert_eq!(invocation.target(), "app");
    assert_eq!(invocation.dir(), "src/");
    assert_eq!(log.lines(), vec!["Starting phpcs (target: app) in src/"]);
}

#[test]
fn test_setup_logs_exec_line_in_verbose_mode() {
    let tf = task_file("options:\n  standard: PSR2\ntargets:\n  app:\n    dir: src/\n");
    let mut log = CaptureLog::new(true);
    setup(&tf, &Overrides::default(), &mut log);

    assert_eq!(
        log.lines(),
        vec![
            "Starting phpcs (target: app) in src/",
            "Exec: phpcs --standard=PSR2 src/",
        ]
    );
}

#[test]
fn test_setup_with_unparsable_bin_logs_nothing() {
    let tf = task_file("options:\n  bin: \"phpcs 'oops\"\ntargets:\n  app:\n    dir: src/\n");
    let mut log = CaptureLog::new(true);
    let err = Invocation::setup("app", &tf.targets["app"], &tf, &Overrides::default(), &mut log)
        .unwrap_err();

    assert!(matches!(err, RunnerError::ConfigError(_)));
    assert!(log.output.is_empty());
}

#[cfg(unix)]
mod run {
    use super::*;

    fn setup_with_bin(bin: &str, log: &mut CaptureLog) -> Invocation {
        let tf = task_file(&format!(
            "options:\n  bin: {}\n  standard: PSR2\ntargets:\n  app:\n    dir: src/\n",
            bin
        ));
        setup(&tf, &Overrides::default(), log)
    }

    #[test]
    fn test_run_forwards_stdout() {
        let mut log = CaptureLog::new(false);
        let invocation = setup_with_bin("echo", &mut log);

        let completion = invocation.run(&mut log).unwrap();

        assert_eq!(completion.target, "app");
        assert_eq!(completion.command, "echo --standard=PSR2 src/");
        assert_eq!(
            log.lines(),
            vec!["Starting phpcs (target: app) in src/", "--standard=PSR2 src/"]
        );
    }

    #[test]
    fn test_run_bin_with_arguments() {
        let tf = task_file("options:\n  bin: \"sh -c 'echo ran'\"\ntargets:\n  app:\n    dir: src/\n");
        let mut log = CaptureLog::new(true);
        let invocation = setup(&tf, &Overrides::default(), &mut log);

        let completion = invocation.run(&mut log).unwrap();

        assert_eq!(completion.command, "sh -c 'echo ran' src/");
        assert_eq!(
            log.lines(),
            vec![
                "Starting phpcs (target: app) in src/",
                "Exec: sh -c 'echo ran' src/",
                "ran",
            ]
        );
    }

    #[test]
    fn test_run_forwards_non_utf8_output_unchanged() {
        let tf = task_file(
            r#"
options:
  bin: 'sh -c ''printf "\377ok\n"'''
targets:
  app:
    dir: src
"#,
        );
        let mut log = CaptureLog::new(false);
        let invocation = setup(&tf, &Overrides::default(), &mut log);

        invocation.run(&mut log).unwrap();

        assert!(log.output.ends_with(b"\xffok\n"));
    }

    #[test]
    fn test_run_non_zero_exit_is_execution_error() {
        let mut log = CaptureLog::new(false);
        let invocation = setup_with_bin("false", &mut log);

        let err = invocation.run(&mut log).unwrap_err();

        assert!(matches!(err, RunnerError::ExecutionError(_)));
        assert!(err.to_string().contains("target 'app'"));
        assert!(err.to_string().contains("exit code 1"));
        assert!(err.to_string().contains("Command: false --standard=PSR2 src/"));
    }

    #[test]
    fn test_run_missing_binary_is_execution_error() {
        let mut log = CaptureLog::new(false);
        let invocation = setup_with_bin("phpcs-runner-test-missing-binary", &mut log);

        let err = invocation.run(&mut log).unwrap_err();

        assert!(matches!(err, RunnerError::ExecutionError(_)));
        assert!(err.to_string().contains("failed to execute"));
        assert!(err.to_string().contains("ensure phpcs is installed"));
    }
}
