//! Schema-driven argument parsing.
//!
//! One parser serves every tool: tokens are matched against the spellings a
//! tool declares in its `ToolSchema`.
//!
//! Accepted forms:
//!
//! - `--long`, `--long=VALUE`, `--long VALUE`
//! - `-x`, and combined switches `-lah` (each character looked up separately)
//! - whole-word single-dash aliases such as `-name VALUE`, matched before
//!   combined-switch expansion
//! - `-xVALUE` / `-x VALUE` when `-x` takes a value
//! - `--` ends option parsing; a lone `-` is positional

use thiserror::Error;

use super::traits::{ParamKind, ParamSchema, ToolArgs, ToolSchema};

/// Argument parsing and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("unrecognized option '{0}'")]
    UnknownFlag(String),
    #[error("option '{0}' requires an argument")]
    MissingValue(String),
    #[error("option '{0}' doesn't allow an argument")]
    UnexpectedValue(String),
    #[error("invalid argument '{value}' for '{option}' (valid arguments: {expected})")]
    InvalidValue {
        option: String,
        value: String,
        expected: String,
    },
    #[error("Too many arguments: have {have}, expected {max}")]
    TooManyArguments { have: usize, max: usize },
}

/// Parse raw tokens against a tool schema.
pub fn parse_args<S: AsRef<str>>(schema: &ToolSchema, tokens: &[S]) -> Result<ToolArgs, ArgError> {
    let mut args = ToolArgs::new();
    let mut rest = tokens.iter().map(as_str);
    let mut options_done = false;

    while let Some(token) = rest.next() {
        if options_done || token == "-" || !token.starts_with('-') {
            args.positional.push(token.to_string());
            continue;
        }
        if token == "--" {
            options_done = true;
            continue;
        }

        let (spelling, inline) = match token.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (token, None),
        };

        // Whole-token match covers `--all`, `-a`, and words like `-name`
        if let Some(param) = schema.find_flag(spelling) {
            apply(param, spelling, inline, &mut rest, &mut args)?;
            continue;
        }
        if token.starts_with("--") {
            return Err(ArgError::UnknownFlag(spelling.to_string()));
        }

        expand_short(schema, &token[1..], &mut rest, &mut args)?;
    }

    tracing::trace!(tool = %schema.name, ?args, "parsed arguments");
    Ok(args)
}

fn as_str<S: AsRef<str>>(s: &S) -> &str {
    s.as_ref()
}

/// Expand a run of short switches like `lah` (from `-lah`).
fn expand_short<'a>(
    schema: &ToolSchema,
    run: &'a str,
    rest: &mut impl Iterator<Item = &'a str>,
    args: &mut ToolArgs,
) -> Result<(), ArgError> {
    for (idx, c) in run.char_indices() {
        let param = schema
            .find_short(c)
            .ok_or_else(|| ArgError::UnknownFlag(format!("-{c}")))?;

        if param.kind == ParamKind::Value {
            // The remainder of the run is the value, getopt style
            let attached = &run[idx + c.len_utf8()..];
            let inline = (!attached.is_empty()).then_some(attached);
            return apply(param, &format!("-{c}"), inline, rest, args);
        }
        args.flags.insert(param.name.clone());
    }
    Ok(())
}

fn apply<'a>(
    param: &ParamSchema,
    spelling: &str,
    inline: Option<&'a str>,
    rest: &mut impl Iterator<Item = &'a str>,
    args: &mut ToolArgs,
) -> Result<(), ArgError> {
    match param.kind {
        ParamKind::Flag => {
            if inline.is_some() {
                return Err(ArgError::UnexpectedValue(spelling.to_string()));
            }
            args.flags.insert(param.name.clone());
        }
        ParamKind::Value => {
            let value = inline
                .or_else(|| rest.next())
                .ok_or_else(|| ArgError::MissingValue(spelling.to_string()))?;
            args.named.insert(param.name.clone(), value.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn schema() -> ToolSchema {
        ToolSchema::new("demo", "Demo tool")
            .param(ParamSchema::flag("long", "Long").with_aliases(["-l"]))
            .param(ParamSchema::flag("all", "All").with_aliases(["-a", "--all"]))
            .param(ParamSchema::flag("human", "Human").with_aliases(["-h", "--human-readable"]))
            .param(ParamSchema::value("sort", "Sort").with_aliases(["--sort"]))
            .param(ParamSchema::value("name", "Name").with_aliases(["-name", "-n"]))
    }

    #[test]
    fn positional_only() {
        let args = parse_args(&schema(), &["a", "b"]).unwrap();
        assert_eq!(args.positional, vec!["a", "b"]);
        assert!(args.flags.is_empty());
    }

    #[rstest]
    #[case(&["-l", "-a"])]
    #[case(&["-la"])]
    #[case(&["-al"])]
    #[case(&["--all", "-l"])]
    fn combined_and_separate_short_flags_agree(#[case] tokens: &[&str]) {
        let args = parse_args(&schema(), tokens).unwrap();
        assert!(args.has_flag("long"));
        assert!(args.has_flag("all"));
        assert_eq!(args.flags.len(), 2);
    }

    #[rstest]
    #[case(&["--sort=size"])]
    #[case(&["--sort", "size"])]
    fn long_value_forms(#[case] tokens: &[&str]) {
        let args = parse_args(&schema(), tokens).unwrap();
        assert_eq!(args.get_named("sort"), Some("size"));
    }

    #[rstest]
    #[case(&["-name", "x.txt"])]
    #[case(&["-n", "x.txt"])]
    #[case(&["-nx.txt"])]
    #[case(&["-name=x.txt"])]
    fn single_dash_value_forms(#[case] tokens: &[&str]) {
        let args = parse_args(&schema(), tokens).unwrap();
        assert_eq!(args.get_named("name"), Some("x.txt"));
    }

    #[test]
    fn unknown_long_flag() {
        let err = parse_args(&schema(), &["--bogus"]).unwrap_err();
        assert_eq!(err, ArgError::UnknownFlag("--bogus".into()));
        assert_eq!(err.to_string(), "unrecognized option '--bogus'");
    }

    #[test]
    fn unknown_short_flag_in_run() {
        let err = parse_args(&schema(), &["-lz"]).unwrap_err();
        assert_eq!(err, ArgError::UnknownFlag("-z".into()));
    }

    #[test]
    fn missing_value() {
        let err = parse_args(&schema(), &["--sort"]).unwrap_err();
        assert_eq!(err, ArgError::MissingValue("--sort".into()));
    }

    #[test]
    fn switch_rejects_inline_value() {
        let err = parse_args(&schema(), &["--all=yes"]).unwrap_err();
        assert_eq!(err, ArgError::UnexpectedValue("--all".into()));
    }

    #[test]
    fn double_dash_ends_options() {
        let args = parse_args(&schema(), &["-l", "--", "-a", "--all"]).unwrap();
        assert!(args.has_flag("long"));
        assert!(!args.has_flag("all"));
        assert_eq!(args.positional, vec!["-a", "--all"]);
    }

    #[test]
    fn lone_dash_is_positional() {
        let args = parse_args(&schema(), &["-"]).unwrap();
        assert_eq!(args.positional, vec!["-"]);
    }

    #[test]
    fn flags_and_positionals_interleave() {
        let args = parse_args(&schema(), &["src", "-l", "docs"]).unwrap();
        assert_eq!(args.positional, vec!["src", "docs"]);
        assert!(args.has_flag("long"));
    }

    #[test]
    fn last_value_wins() {
        let args = parse_args(&schema(), &["--sort=size", "--sort=time"]).unwrap();
        assert_eq!(args.get_named("sort"), Some("time"));
    }
}
