//! Canonical call signatures.
//!
//! A [`Signature`] is plain data captured once per operation: the ordered
//! parameter list of the underlying function plus the calling convention it
//! is bound with. Comparison is structural equality over that data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::utils::{validate_name, InvalidNameError};

/// How a parameter can be bound by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Declared before a `/` marker.
    PositionalOnly,
    /// Ordinary parameter.
    PositionalOrKeyword,
    /// `*args`.
    VarPositional,
    /// Declared after `*` or `*args`.
    KeywordOnly,
    /// `**kwargs`.
    VarKeyword,
}

impl ParameterKind {
    fn is_positional(self) -> bool {
        matches!(self, Self::PositionalOnly | Self::PositionalOrKeyword)
    }

    fn is_variadic(self) -> bool {
        matches!(self, Self::VarPositional | Self::VarKeyword)
    }

    /// Position of the kind in a well-formed parameter list.
    fn rank(self) -> u8 {
        match self {
            Self::PositionalOnly => 0,
            Self::PositionalOrKeyword => 1,
            Self::VarPositional => 2,
            Self::KeywordOnly => 3,
            Self::VarKeyword => 4,
        }
    }
}

/// A single formal parameter in canonical form.
///
/// Default values and annotations are not part of the canonical form; only
/// whether a default is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, including `self`/`cls` verbatim.
    pub name: String,
    /// Binding kind.
    pub kind: ParameterKind,
    /// Whether the parameter declares a default value.
    #[serde(default)]
    pub has_default: bool,
}

impl Parameter {
    /// Creates a positional-or-keyword parameter without a default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::PositionalOrKeyword,
            has_default: false,
        }
    }

    /// Creates a parameter of the given kind.
    #[must_use]
    pub fn with_kind(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            has_default: false,
        }
    }

    /// Marks the parameter as having a default.
    #[must_use]
    pub fn defaulted(mut self) -> Self {
        self.has_default = true;
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParameterKind::VarPositional => write!(f, "*{}", self.name),
            ParameterKind::VarKeyword => write!(f, "**{}", self.name),
            _ if self.has_default => write!(f, "{}=…", self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}

/// How an operation is bound on the declaring type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallingConvention {
    /// A function declared directly in the type body.
    #[default]
    Plain,
    /// A function wrapped as a classmethod.
    Classmethod,
    /// A function wrapped as a staticmethod.
    Staticmethod,
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Classmethod => write!(f, "classmethod"),
            Self::Staticmethod => write!(f, "staticmethod"),
        }
    }
}

/// Rule used to reconcile calling conventions when comparing signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConventionRule {
    /// Compare the underlying parameter lists only. The wrapper is ignored,
    /// the first parameter is compared by name like any other.
    #[default]
    Unwrap,
    /// Parameter lists and calling conventions must both be equal.
    Exact,
}

impl fmt::Display for ConventionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unwrap => write!(f, "unwrap"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Canonical signature of an operation.
///
/// Deserialized signatures are checked with the same rules as parsed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "SignatureRecord")]
pub struct Signature {
    /// Ordered parameters of the underlying function.
    pub parameters: Vec<Parameter>,
    /// Calling convention the function is bound with.
    #[serde(default)]
    pub convention: CallingConvention,
}

impl Signature {
    /// Creates a plain signature from parameters.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            convention: CallingConvention::Plain,
        }
    }

    /// Creates a plain signature of positional-or-keyword parameters.
    #[must_use]
    pub fn positional<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Parameter::new).collect())
    }

    /// Parses a source-like parameter list such as `(self, a, b=1, *, c)`.
    pub fn parse(text: &str) -> Result<Self, SignatureParseError> {
        parse_signature(text)
    }

    /// Sets the calling convention.
    #[must_use]
    pub fn with_convention(mut self, convention: CallingConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Rebinds the signature as a classmethod.
    #[must_use]
    pub fn classmethod(self) -> Self {
        self.with_convention(CallingConvention::Classmethod)
    }

    /// Rebinds the signature as a staticmethod.
    #[must_use]
    pub fn staticmethod(self) -> Self {
        self.with_convention(CallingConvention::Staticmethod)
    }

    /// Number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Parameter names in order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    /// True when both parameter lists are identical.
    #[must_use]
    pub fn parameters_match(&self, other: &Self) -> bool {
        self.parameters == other.parameters
    }

    /// Compares two signatures under a convention rule.
    #[must_use]
    pub fn matches(&self, other: &Self, rule: ConventionRule) -> bool {
        match rule {
            ConventionRule::Unwrap => self.parameters_match(other),
            ConventionRule::Exact => self == other,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.convention {
            CallingConvention::Plain => {}
            CallingConvention::Classmethod => write!(f, "@classmethod ")?,
            CallingConvention::Staticmethod => write!(f, "@staticmethod ")?,
        }

        let mut rendered: Vec<String> = Vec::with_capacity(self.parameters.len() + 2);
        let mut seen_star = false;
        for (idx, param) in self.parameters.iter().enumerate() {
            match param.kind {
                ParameterKind::VarPositional => seen_star = true,
                ParameterKind::KeywordOnly if !seen_star => {
                    rendered.push("*".to_string());
                    seen_star = true;
                }
                _ => {}
            }
            rendered.push(param.to_string());

            let next_is_positional_only = self
                .parameters
                .get(idx + 1)
                .is_some_and(|p| p.kind == ParameterKind::PositionalOnly);
            if param.kind == ParameterKind::PositionalOnly && !next_is_positional_only {
                rendered.push("/".to_string());
            }
        }
        write!(f, "({})", rendered.join(", "))
    }
}

#[derive(Deserialize)]
struct SignatureRecord {
    parameters: Vec<Parameter>,
    #[serde(default)]
    convention: CallingConvention,
}

impl TryFrom<SignatureRecord> for Signature {
    type Error = SignatureParseError;

    fn try_from(record: SignatureRecord) -> Result<Self, Self::Error> {
        check_parameters(&record.parameters)?;
        Ok(Self::new(record.parameters).with_convention(record.convention))
    }
}

impl FromStr for Signature {
    type Err = SignatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_signature(s)
    }
}

/// Error raised when a signature string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureParseError {
    /// Brackets or quotes do not balance.
    #[error("Unbalanced signature text: {text}")]
    Unbalanced {
        /// The offending text.
        text: String,
    },

    /// An empty entry between commas.
    #[error("Empty parameter at position {position}")]
    EmptyParameter {
        /// Zero-based position of the empty entry.
        position: usize,
    },

    /// A parameter name is not a valid identifier.
    #[error("{0}")]
    InvalidName(#[from] InvalidNameError),

    /// The same name was declared twice.
    #[error("Duplicate parameter '{0}'")]
    DuplicateParameter(String),

    /// A `/` or `*` marker is out of place.
    #[error("Misplaced '{marker}': {reason}")]
    MisplacedMarker {
        /// The marker text.
        marker: String,
        /// Why it is rejected.
        reason: String,
    },

    /// A positional parameter without a default follows one with a default.
    #[error("Non-default parameter '{0}' follows default parameter")]
    DefaultOrder(String),

    /// `*args` or `**kwargs` declared with a default.
    #[error("Variadic parameter '{0}' cannot have a default")]
    VariadicDefault(String),

    /// Something follows `**kwargs`.
    #[error("Parameter '{0}' follows var-keyword parameter")]
    AfterVarKeyword(String),
}

fn parse_signature(text: &str) -> Result<Signature, SignatureParseError> {
    let inner = strip_parens(text.trim())?;
    let entries = split_top_level(inner, ',').ok_or_else(|| SignatureParseError::Unbalanced {
        text: text.to_string(),
    })?;

    // A single trailing comma is allowed, as in source.
    let mut entries: Vec<&str> = entries.iter().map(|e| e.trim()).collect();
    if entries.len() > 1 && entries.last().is_some_and(|e| e.is_empty()) {
        entries.pop();
    }
    if entries.len() == 1 && entries[0].is_empty() {
        return Ok(Signature::default());
    }

    let mut parameters: Vec<Parameter> = Vec::with_capacity(entries.len());
    let mut names: HashSet<String> = HashSet::new();
    let mut keyword_section = false;
    let mut bare_star_pending = false;
    let mut seen_slash = false;
    let mut seen_default = false;
    let mut seen_var_keyword = false;

    for (position, entry) in entries.into_iter().enumerate() {
        if entry.is_empty() {
            return Err(SignatureParseError::EmptyParameter { position });
        }
        if seen_var_keyword {
            return Err(SignatureParseError::AfterVarKeyword(entry.to_string()));
        }

        if entry == "/" {
            if seen_slash {
                return Err(misplaced("/", "declared more than once"));
            }
            if keyword_section {
                return Err(misplaced("/", "must precede '*'"));
            }
            if parameters.is_empty() {
                return Err(misplaced("/", "at least one parameter must precede it"));
            }
            for param in &mut parameters {
                param.kind = ParameterKind::PositionalOnly;
            }
            seen_slash = true;
            continue;
        }

        if entry == "*" {
            if keyword_section {
                return Err(misplaced("*", "keyword-only section already started"));
            }
            keyword_section = true;
            bare_star_pending = true;
            continue;
        }

        let (kind, rest) = if let Some(rest) = entry.strip_prefix("**") {
            seen_var_keyword = true;
            (ParameterKind::VarKeyword, rest)
        } else if let Some(rest) = entry.strip_prefix('*') {
            if keyword_section {
                return Err(misplaced("*", "keyword-only section already started"));
            }
            keyword_section = true;
            (ParameterKind::VarPositional, rest)
        } else if keyword_section {
            bare_star_pending = false;
            (ParameterKind::KeywordOnly, entry)
        } else {
            (ParameterKind::PositionalOrKeyword, entry)
        };

        let (name, has_default) = split_name(rest);
        validate_name(name)?;

        if kind.is_variadic() && has_default {
            return Err(SignatureParseError::VariadicDefault(name.to_string()));
        }
        if kind.is_positional() {
            if has_default {
                seen_default = true;
            } else if seen_default {
                return Err(SignatureParseError::DefaultOrder(name.to_string()));
            }
        }
        if !names.insert(name.to_string()) {
            return Err(SignatureParseError::DuplicateParameter(name.to_string()));
        }

        parameters.push(Parameter {
            name: name.to_string(),
            kind,
            has_default,
        });
    }

    if bare_star_pending {
        return Err(misplaced("*", "named arguments must follow bare '*'"));
    }

    Ok(Signature::new(parameters))
}

/// Checks a parameter list built outside the parser.
fn check_parameters(parameters: &[Parameter]) -> Result<(), SignatureParseError> {
    let mut names: HashSet<&str> = HashSet::new();
    let mut previous: Option<ParameterKind> = None;
    let mut seen_default = false;

    for param in parameters {
        validate_name(&param.name)?;
        if let Some(prev) = previous {
            if prev == ParameterKind::VarKeyword {
                return Err(SignatureParseError::AfterVarKeyword(param.name.clone()));
            }
            let repeated_star =
                prev == ParameterKind::VarPositional && param.kind == ParameterKind::VarPositional;
            if param.kind.rank() < prev.rank() || repeated_star {
                return Err(misplaced(&param.name, "parameter kinds out of order"));
            }
        }
        if param.kind.is_variadic() && param.has_default {
            return Err(SignatureParseError::VariadicDefault(param.name.clone()));
        }
        if param.kind.is_positional() {
            if param.has_default {
                seen_default = true;
            } else if seen_default {
                return Err(SignatureParseError::DefaultOrder(param.name.clone()));
            }
        }
        if !names.insert(&param.name) {
            return Err(SignatureParseError::DuplicateParameter(param.name.clone()));
        }
        previous = Some(param.kind);
    }

    Ok(())
}

fn misplaced(marker: &str, reason: &str) -> SignatureParseError {
    SignatureParseError::MisplacedMarker {
        marker: marker.to_string(),
        reason: reason.to_string(),
    }
}

/// Strips the outer parentheses and an optional `-> annotation` suffix.
fn strip_parens(text: &str) -> Result<&str, SignatureParseError> {
    let unbalanced = || SignatureParseError::Unbalanced {
        text: text.to_string(),
    };

    if !text.starts_with('(') {
        return Ok(text);
    }

    let close = find_matching_paren(text).ok_or_else(unbalanced)?;
    let tail = text[close + 1..].trim();
    if !tail.is_empty() && !tail.starts_with("->") {
        return Err(unbalanced());
    }
    Ok(&text[1..close])
}

/// What a character means to the bracket and quote tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Inside a string literal, or a quote delimiter.
    Quoted,
    Open,
    Close,
    /// A closing bracket with nothing open.
    Unmatched,
    Other,
}

/// Tracks bracket depth and string literals, honouring backslash escapes.
#[derive(Debug, Default)]
struct Nesting {
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl Nesting {
    fn feed(&mut self, ch: char) -> Scan {
        if let Some(q) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if ch == '\\' {
                self.escaped = true;
            } else if ch == q {
                self.quote = None;
            }
            return Scan::Quoted;
        }
        match ch {
            '\'' | '"' => {
                self.quote = Some(ch);
                Scan::Quoted
            }
            '(' | '[' | '{' => {
                self.depth += 1;
                Scan::Open
            }
            ')' | ']' | '}' => match self.depth.checked_sub(1) {
                Some(depth) => {
                    self.depth = depth;
                    Scan::Close
                }
                None => Scan::Unmatched,
            },
            _ => Scan::Other,
        }
    }

    fn at_top(&self) -> bool {
        self.depth == 0 && self.quote.is_none()
    }
}

fn find_matching_paren(text: &str) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (idx, ch) in text.char_indices() {
        match nesting.feed(ch) {
            Scan::Close if nesting.depth == 0 => return (ch == ')').then_some(idx),
            Scan::Unmatched => return None,
            _ => {}
        }
    }
    None
}

/// Splits on `sep` outside of brackets and string literals.
///
/// Returns `None` when brackets or quotes do not balance.
fn split_top_level(text: &str, sep: char) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut nesting = Nesting::default();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match nesting.feed(ch) {
            Scan::Unmatched => return None,
            Scan::Other if ch == sep && nesting.depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }

    if !nesting.at_top() {
        return None;
    }
    parts.push(&text[start..]);
    Some(parts)
}

/// Returns the bare name of `name[: annotation][= default]`.
fn split_name(entry: &str) -> (&str, bool) {
    let (head, has_default) = match find_top_level(entry, '=') {
        Some(idx) => (&entry[..idx], true),
        None => (entry, false),
    };
    let name = match find_top_level(head, ':') {
        Some(idx) => &head[..idx],
        None => head,
    };
    (name.trim(), has_default)
}

fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (idx, ch) in text.char_indices() {
        if nesting.feed(ch) == Scan::Other && ch == target && nesting.depth == 0 {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple() {
        let sig = Signature::parse("(self, a)").unwrap();
        assert_eq!(sig, Signature::positional(["self", "a"]));
        assert_eq!(sig.convention, CallingConvention::Plain);
    }

    #[test]
    fn test_parse_without_parens() {
        let sig: Signature = "self, a".parse().unwrap();
        assert_eq!(sig.parameter_names(), vec!["self", "a"]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Signature::parse("()").unwrap().arity(), 0);
        assert_eq!(Signature::parse("").unwrap().arity(), 0);
    }

    #[test]
    fn test_parse_all_kinds() {
        let sig = Signature::parse("(a, /, b=1, *args, c, d=None, **kw) -> int").unwrap();
        assert_eq!(
            sig.parameters,
            vec![
                Parameter::with_kind("a", ParameterKind::PositionalOnly),
                Parameter::new("b").defaulted(),
                Parameter::with_kind("args", ParameterKind::VarPositional),
                Parameter::with_kind("c", ParameterKind::KeywordOnly),
                Parameter::with_kind("d", ParameterKind::KeywordOnly).defaulted(),
                Parameter::with_kind("kw", ParameterKind::VarKeyword),
            ]
        );
    }

    #[test]
    fn test_parse_annotations_and_nested_defaults() {
        let sig =
            Signature::parse("(self, items: dict[str, int] = {'a': 1, 'b': 2}, flag: bool=False)")
                .unwrap();
        assert_eq!(sig.parameter_names(), vec!["self", "items", "flag"]);
        assert!(sig.parameters[1].has_default);
        assert!(sig.parameters[2].has_default);
    }

    #[test]
    fn test_parse_trailing_comma() {
        let sig = Signature::parse("(self, a,)").unwrap();
        assert_eq!(sig.arity(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Signature::parse("(self, a"),
            Err(SignatureParseError::Unbalanced { .. })
        ));
        assert!(matches!(
            Signature::parse("(self, , a)"),
            Err(SignatureParseError::EmptyParameter { position: 1 })
        ));
        assert!(matches!(
            Signature::parse("(self, self)"),
            Err(SignatureParseError::DuplicateParameter(_))
        ));
        assert!(matches!(
            Signature::parse("(self, a=1, b)"),
            Err(SignatureParseError::DefaultOrder(name)) if name == "b"
        ));
        assert!(matches!(
            Signature::parse("(self, *)"),
            Err(SignatureParseError::MisplacedMarker { .. })
        ));
        assert!(matches!(
            Signature::parse("(/, a)"),
            Err(SignatureParseError::MisplacedMarker { .. })
        ));
        assert!(matches!(
            Signature::parse("(**kw, a)"),
            Err(SignatureParseError::AfterVarKeyword(_))
        ));
        assert!(matches!(
            Signature::parse("(*args=1)"),
            Err(SignatureParseError::VariadicDefault(_))
        ));
        assert!(matches!(
            Signature::parse("(self, 1a)"),
            Err(SignatureParseError::InvalidName(_))
        ));
    }

    #[test]
    fn test_keyword_only_defaults_may_interleave() {
        assert!(Signature::parse("(self, *, a=1, b)").is_ok());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for text in [
            "(self)",
            "(self, a, b=…)",
            "(a, b, /, c)",
            "(self, *, key)",
            "(self, *args, key, **kwargs)",
        ] {
            let sig = Signature::parse(text).unwrap();
            assert_eq!(sig.to_string(), text);
        }
    }

    #[test]
    fn test_display_convention_prefix() {
        let sig = Signature::positional(["cls"]).classmethod();
        assert_eq!(sig.to_string(), "@classmethod (cls)");
        let sig = Signature::positional(["x"]).staticmethod();
        assert_eq!(sig.to_string(), "@staticmethod (x)");
    }

    #[test]
    fn test_matches_unwrap_ignores_convention() {
        let required = Signature::positional(["self"]);
        let actual = Signature::positional(["self"]).classmethod();
        assert!(required.matches(&actual, ConventionRule::Unwrap));
        assert!(!required.matches(&actual, ConventionRule::Exact));
    }

    #[test]
    fn test_matches_compares_first_parameter_literally() {
        let required = Signature::positional(["self"]);
        let actual = Signature::positional(["cls"]).classmethod();
        assert!(!required.matches(&actual, ConventionRule::Unwrap));
    }

    #[test]
    fn test_matches_default_presence() {
        let required = Signature::parse("(self, a)").unwrap();
        let actual = Signature::parse("(self, a=None)").unwrap();
        assert!(!required.matches(&actual, ConventionRule::Unwrap));
    }

    #[test]
    fn test_signature_serialization() {
        let sig = Signature::parse("(cls, a=1)").unwrap().classmethod();
        let json = serde_json::to_value(&sig).unwrap();
        assert_eq!(json["convention"], serde_json::json!("classmethod"));
        assert_eq!(json["parameters"][1]["has_default"], serde_json::json!(true));
        let back: Signature = serde_json::from_value(json).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn test_parse_escaped_quotes_in_defaults() {
        let sig = Signature::parse(r"(self, a='it\'s', b=')')").unwrap();
        assert_eq!(sig.parameter_names(), vec!["self", "a", "b"]);

        let sig = Signature::parse(r#"(self, path="C:\\", sep=",")"#).unwrap();
        assert_eq!(sig.parameter_names(), vec!["self", "path", "sep"]);
    }

    #[test]
    fn test_parse_unparenthesized_call_default() {
        let sig = Signature::parse("self, a=f()").unwrap();
        assert_eq!(sig.parameter_names(), vec!["self", "a"]);
        assert!(sig.parameters[1].has_default);

        assert!(matches!(
            Signature::parse("self, a)"),
            Err(SignatureParseError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_deserialize_rejects_malformed_parameters() {
        let duplicate = serde_json::json!({
            "parameters": [
                {"name": "self", "kind": "positional_or_keyword"},
                {"name": "self", "kind": "positional_or_keyword"}
            ]
        });
        let err = serde_json::from_value::<Signature>(duplicate).unwrap_err();
        assert!(err.to_string().contains("Duplicate parameter 'self'"));

        let bad_name = serde_json::json!({
            "parameters": [{"name": "not-a-name", "kind": "positional_or_keyword"}]
        });
        assert!(serde_json::from_value::<Signature>(bad_name).is_err());

        let out_of_order = serde_json::json!({
            "parameters": [
                {"name": "kw", "kind": "keyword_only"},
                {"name": "a", "kind": "positional_only"}
            ]
        });
        assert!(serde_json::from_value::<Signature>(out_of_order).is_err());

        let variadic_default = serde_json::json!({
            "parameters": [{"name": "args", "kind": "var_positional", "has_default": true}]
        });
        assert!(serde_json::from_value::<Signature>(variadic_default).is_err());
    }

    #[test]
    fn test_deserialize_accepts_parsed_shapes() {
        let sig = Signature::parse("(a, /, b=1, *args, c, d=None, **kw)").unwrap();
        let back: Signature = serde_json::from_value(serde_json::to_value(&sig).unwrap()).unwrap();
        assert_eq!(back, sig);
    }
}
