//! Option schema and parsing.
//!
//! A command declares its accepted flags as an [`InputDefinition`] of
//! [`OptionDefinition`] entries. At dispatch time [`build_options_from`]
//! scans the raw argument tokens and produces the [`InputOptions`] passed
//! to the command, accumulating every validation problem as an
//! [`OptionError`] instead of stopping at the first one.

use std::collections::HashMap;

use thiserror::Error;

use crate::params::RawValue;

/// Declared schema entry for one CLI flag.
///
/// Immutable once constructed. The default (zero) definition is what the
/// parser attaches to flags a command never declared.
///
/// # Example
///
/// ```
/// use cairn::cli::OptionDefinition;
///
/// let def = OptionDefinition::new("name", "Name of the person to greet")
///     .required();
/// assert_eq!(def.name(), "name");
/// assert!(def.is_required());
/// assert_eq!(def.default_value(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionDefinition {
    name: String,
    description: String,
    required: bool,
    default_value: String,
}

impl OptionDefinition {
    /// Create an optional definition with an empty default value.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            default_value: String::new(),
        }
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value shown in help output.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// The flag name, without the `--` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of the option.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a non-empty value must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The declared default value.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

/// A command's declared input schema, keyed by option name.
#[derive(Debug, Clone, Default)]
pub struct InputDefinition {
    options: HashMap<String, OptionDefinition>,
}

impl InputDefinition {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option definition, keyed by its name.
    pub fn with_option(mut self, definition: OptionDefinition) -> Self {
        self.options
            .insert(definition.name().to_string(), definition);
        self
    }

    /// Look up a declared definition by name.
    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.get(name)
    }

    /// Iterate over the declared definitions, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.options.values()
    }

    /// Get the number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check whether the schema declares no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// One parsed option: the declared definition (or the default definition
/// for undeclared flags) plus the raw value captured from the command line.
#[derive(Debug, Clone)]
pub struct InputOption {
    definition: OptionDefinition,
    raw_value: RawValue,
}

impl InputOption {
    /// Create a parsed option.
    pub fn new(definition: OptionDefinition, raw_value: impl Into<RawValue>) -> Self {
        Self {
            definition,
            raw_value: raw_value.into(),
        }
    }

    /// The definition this option was matched against.
    pub fn definition(&self) -> &OptionDefinition {
        &self.definition
    }

    /// The raw value, pre-coercion. See [`RawValue`] for typed access.
    pub fn raw_value(&self) -> &RawValue {
        &self.raw_value
    }
}

/// Parsed options for one command invocation, keyed by option name.
///
/// Built once per dispatch and read-only during command execution.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    options: HashMap<String, InputOption>,
}

impl InputOptions {
    /// Look up a parsed option by name.
    pub fn get(&self, name: &str) -> Option<&InputOption> {
        self.options.get(name)
    }

    /// Shorthand for the raw value of an option, when present.
    pub fn raw(&self, name: &str) -> Option<&RawValue> {
        self.options.get(name).map(InputOption::raw_value)
    }

    /// Check whether an option was captured.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Iterate over the captured options, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputOption)> {
        self.options.iter().map(|(name, opt)| (name.as_str(), opt))
    }

    /// Get the number of captured options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check whether no options were captured.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// A validation problem found while parsing raw option tokens.
///
/// These accumulate per invocation; dispatch joins them into one failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The same flag name appeared more than once.
    #[error("option '{name}' is defined twice")]
    DefinedTwice { name: String },

    /// A required option is missing or has an empty value.
    #[error("option '{name}' is required")]
    Required { name: String },
}

/// Build the option map for one invocation from raw argument tokens.
///
/// Tokens not starting with `--` are ignored. Flag tokens are stripped of
/// their leading dashes and split on the first `=`; a missing `=` yields an
/// empty value; name and value are both trimmed. A repeated name is flagged
/// as an error but the later value still overwrites the earlier one.
/// Undeclared flags are captured with the default definition. After the
/// scan, every required definition must have a captured, non-empty value.
///
/// Never aborts early: the returned errors hold every problem found.
pub fn build_options_from(
    raw_args: &[String],
    schema: &InputDefinition,
) -> (InputOptions, Vec<OptionError>) {
    let mut options = InputOptions::default();
    let mut errors = Vec::new();

    for arg in raw_args {
        if !arg.starts_with("--") {
            continue;
        }
        let stripped = arg.trim_start_matches('-');
        let (name, value) = match stripped.split_once('=') {
            Some((name, value)) => (name.trim(), value.trim()),
            None => (stripped.trim(), ""),
        };

        if options.contains(name) {
            errors.push(OptionError::DefinedTwice {
                name: name.to_string(),
            });
        }

        let definition = schema.get(name).cloned().unwrap_or_default();
        options
            .options
            .insert(name.to_string(), InputOption::new(definition, value));
    }

    for definition in schema.iter() {
        if !definition.is_required() {
            continue;
        }
        let missing = match options.raw(definition.name()) {
            Some(raw) => raw.is_empty(),
            None => true,
        };
        if missing {
            errors.push(OptionError::Required {
                name: definition.name().to_string(),
            });
        }
    }

    (options, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn schema_with_required_name() -> InputDefinition {
        InputDefinition::new()
            .with_option(OptionDefinition::new("name", "Name to greet").required())
    }

    #[test]
    fn tokens_without_flag_prefix_are_ignored() {
        let (options, errors) =
            build_options_from(&args(&["positional", "-x=1", "x=2"]), &InputDefinition::new());
        assert!(options.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn name_value_round_trips() {
        let (options, errors) =
            build_options_from(&args(&["--name=Ann"]), &schema_with_required_name());
        assert!(errors.is_empty());
        assert_eq!(options.raw("name").unwrap().as_str(), "Ann");
    }

    #[test]
    fn bare_flag_gets_empty_value() {
        let (options, errors) = build_options_from(&args(&["--verbose"]), &InputDefinition::new());
        assert!(errors.is_empty());
        assert!(options.raw("verbose").unwrap().is_empty());
    }

    #[test]
    fn name_and_value_are_trimmed() {
        let (options, _) = build_options_from(&args(&["-- name = Ann "]), &InputDefinition::new());
        assert_eq!(options.raw("name").unwrap().as_str(), "Ann");
    }

    #[test]
    fn extra_leading_dashes_are_stripped() {
        let (options, _) = build_options_from(&args(&["----name=Ann"]), &InputDefinition::new());
        assert_eq!(options.raw("name").unwrap().as_str(), "Ann");
    }

    #[test]
    fn value_keeps_first_equals_split_only() {
        let (options, _) =
            build_options_from(&args(&["--filter=a=b=c"]), &InputDefinition::new());
        assert_eq!(options.raw("filter").unwrap().as_str(), "a=b=c");
    }

    #[test]
    fn bare_double_dash_records_empty_name() {
        let (options, errors) = build_options_from(&args(&["--"]), &InputDefinition::new());
        assert!(errors.is_empty());
        assert!(options.contains(""));
        assert!(options.raw("").unwrap().is_empty());
    }

    #[test]
    fn duplicate_flag_errors_but_last_write_wins() {
        let (options, errors) =
            build_options_from(&args(&["--x=a", "--x=b"]), &InputDefinition::new());
        assert_eq!(
            errors,
            vec![OptionError::DefinedTwice { name: "x".into() }]
        );
        assert_eq!(options.raw("x").unwrap().as_str(), "b");
    }

    #[test]
    fn missing_required_option_errors() {
        let (options, errors) = build_options_from(&args(&[]), &schema_with_required_name());
        assert!(options.is_empty());
        assert_eq!(errors, vec![OptionError::Required { name: "name".into() }]);
    }

    #[test]
    fn whitespace_only_required_value_errors() {
        let (options, errors) =
            build_options_from(&args(&["--name=   "]), &schema_with_required_name());
        assert!(options.raw("name").unwrap().is_empty());
        assert_eq!(errors, vec![OptionError::Required { name: "name".into() }]);
    }

    #[test]
    fn undeclared_flag_is_captured_with_default_definition() {
        let (options, errors) =
            build_options_from(&args(&["--unknown=1"]), &schema_with_required_name());
        assert!(errors.iter().any(|e| matches!(e, OptionError::Required { .. })));
        let opt = options.get("unknown").unwrap();
        assert_eq!(opt.definition(), &OptionDefinition::default());
        assert_eq!(opt.raw_value().as_str(), "1");
    }

    #[test]
    fn errors_accumulate() {
        let schema = InputDefinition::new()
            .with_option(OptionDefinition::new("name", "").required())
            .with_option(OptionDefinition::new("count", "").required());
        let (_, errors) = build_options_from(&args(&["--x=a", "--x=b"]), &schema);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&OptionError::DefinedTwice { name: "x".into() }));
        assert!(errors.contains(&OptionError::Required { name: "name".into() }));
        assert!(errors.contains(&OptionError::Required { name: "count".into() }));
    }

    #[test]
    fn parsing_is_idempotent() {
        let raw = args(&["--x=a", "--x=b", "skip", "--flag"]);
        let schema = schema_with_required_name();

        let (first_options, first_errors) = build_options_from(&raw, &schema);
        let (second_options, second_errors) = build_options_from(&raw, &schema);

        assert_eq!(first_options.len(), second_options.len());
        for (name, opt) in first_options.iter() {
            assert_eq!(
                second_options.raw(name).unwrap().as_str(),
                opt.raw_value().as_str()
            );
        }
        let mut first_sorted = first_errors.clone();
        let mut second_sorted = second_errors.clone();
        first_sorted.sort_by_key(|e| e.to_string());
        second_sorted.sort_by_key(|e| e.to_string());
        assert_eq!(first_sorted, second_sorted);
    }
}
