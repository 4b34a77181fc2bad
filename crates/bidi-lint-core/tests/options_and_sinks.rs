//! Configuration loading and host sink integration.

#![cfg(feature = "serde")]

use bidi_lint_core::{
    analysis::{lint_stylesheet, LintSummary},
    report::SOURCE_NOT_SPECIFIED,
    CoreError, DetectConfig, DiagnosticSink, Options, RunContext, Stylesheet, Warning,
};

/// Sink that only keeps formatted lines, like a host console reporter
#[derive(Default)]
struct ConsoleSink {
    lines: Vec<String>,
}

impl DiagnosticSink for ConsoleSink {
    fn warn(&mut self, warning: Warning) {
        self.lines.push(warning.to_string());
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_options_drive_the_run() {
        let options = Options::from_json(
            r#"{
                "aggressive": false,
                "propsMsg": "Use logical properties.",
                "unitsPxDetect": true,
                "unitsMsg": "Use a spacing token."
            }"#,
        )
        .unwrap();
        let config = DetectConfig::from_options(&options);
        let sheet = Stylesheet::parse(".a { margin: 0 4px; }\n.b { float: right; }");
        let mut sink = ConsoleSink::default();

        let summary = lint_stylesheet(&sheet, &config, &RunContext::from_file("a.css"), &mut sink);

        assert_eq!(
            sink.lines,
            [
                "a.css:1:6: margin: 0 4px; found on line 1. Use a spacing token.",
                "a.css:2:6: float: right; found on line 2. Use logical properties.",
            ]
        );
        assert_eq!(
            summary,
            LintSummary {
                checked: 2,
                skipped: 0,
                reported: 2,
                dropped: 0,
            }
        );
    }

    #[test]
    fn legacy_units_key_is_honoured() {
        let options = Options::from_json(r#"{"unitsDetect": true, "unitsEmDetect": false}"#).unwrap();
        let config = DetectConfig::from_options(&options);
        let sheet = Stylesheet::parse(".a { font-size: 1em; line-height: 2rem; }");
        let mut warnings: Vec<Warning> = Vec::new();

        lint_stylesheet(&sheet, &config, &RunContext::default(), &mut warnings);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].line(), 1);
        assert_eq!(warnings[0].file(), SOURCE_NOT_SPECIFIED);
        assert!(warnings[0].text().starts_with("line-height: 2rem;"));
    }

    #[test]
    fn wrong_option_type_fails_fast() {
        let err = Options::from_json(r#"{"unitsPxDetect": "true"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.suggestion().is_some());

        let err = Options::from_json("true").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn separate_runs_use_separate_sinks() {
        init_tracing();
        let config = DetectConfig::default();
        let first = Stylesheet::parse(".a { left: 0; }");
        let second = Stylesheet::parse(".b { color: red; }");
        let mut first_sink: Vec<Warning> = Vec::new();
        let mut second_sink: Vec<Warning> = Vec::new();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                lint_stylesheet(&first, &config, &RunContext::from_file("a.css"), &mut first_sink)
            });
            scope.spawn(|| {
                lint_stylesheet(&second, &config, &RunContext::from_file("b.css"), &mut second_sink)
            });
        });

        assert_eq!(first_sink.len(), 1);
        assert_eq!(first_sink[0].file(), "a.css");
        assert!(second_sink.is_empty());
    }
}
