//! substitution.rs - Parses and compiles raw text substitutions.
//!
//! Substitutions are supplied as `from=to` strings. `from` is a regular
//! expression and `to` its replacement; rules run in the order given, each one
//! over the output of the previous one, on the raw input text before it is
//! parsed as YAML.
//!
//! The replacement text follows `String.prototype.replace` rules rather than
//! the `regex` crate's `$name` syntax: `$$`, `$&`, `` $` ``, `$'` and `$n`/`$nn`
//! (for groups the pattern actually has) are expanded, and any other `$` is
//! copied through untouched. `-s 'tag=$VERSION'` therefore writes `$VERSION`.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Captures, Regex, RegexBuilder, Replacer};
use std::borrow::Cow;

use crate::errors::KubecleanError;

/// Separator between the pattern and its replacement.
pub const SUBSTITUTION_SEPARATOR: char = '=';

/// One `from=to` substitution before compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubstitutionRule {
    /// Regular expression to search for.
    pub pattern: String,
    /// Replacement text. `$1` expands to the first capture group when the
    /// pattern has one; `${name}` is literal.
    pub replacement: String,
}

impl SubstitutionRule {
    /// Parses a rule given on the command line.
    ///
    /// The string must contain exactly one `=`. Either side may be empty.
    pub fn parse(raw: &str) -> Result<Self, KubecleanError> {
        let parts: Vec<&str> = raw.split(SUBSTITUTION_SEPARATOR).collect();
        match parts.as_slice() {
            [pattern, replacement] => Ok(Self {
                pattern: (*pattern).to_string(),
                replacement: (*replacement).to_string(),
            }),
            _ => Err(KubecleanError::InvalidArgument(format!(
                "-s flag must be given on the form -s from=to (got '{}')",
                raw
            ))),
        }
    }
}

/// A substitution with its pattern compiled.
#[derive(Debug)]
pub struct CompiledSubstitution {
    pub regex: Regex,
    pub replacement: String,
}

/// The ordered list of compiled substitutions for one run.
#[derive(Debug, Default)]
pub struct CompiledSubstitutions {
    pub rules: Vec<CompiledSubstitution>,
}

impl CompiledSubstitutions {
    /// Applies every substitution in order. Later rules see the output of
    /// earlier ones.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for (index, rule) in self.rules.iter().enumerate() {
            let replacer = TemplateReplacer {
                template: &rule.replacement,
                haystack: &current,
            };
            let replaced = match rule.regex.replace_all(&current, replacer) {
                Cow::Borrowed(_) => None,
                Cow::Owned(out) => Some(out),
            };
            match replaced {
                Some(out) => {
                    debug!(
                        "Substitution #{} '{}' rewrote input ({} -> {} bytes).",
                        index + 1,
                        rule.regex.as_str(),
                        current.len(),
                        out.len()
                    );
                    current = Cow::Owned(out);
                }
                None => debug!(
                    "Substitution #{} '{}' matched nothing.",
                    index + 1,
                    rule.regex.as_str()
                ),
            }
        }
        current
    }
}

/// Expands a replacement template for one match.
struct TemplateReplacer<'t, 'h> {
    template: &'t str,
    haystack: &'h str,
}

impl Replacer for TemplateReplacer<'_, '_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        expand_template(self.template, self.haystack, caps, dst);
    }
}

fn expand_template(template: &str, haystack: &str, caps: &Captures<'_>, dst: &mut String) {
    let Some(whole) = caps.get(0) else {
        dst.push_str(template);
        return;
    };
    let groups = caps.len() - 1;

    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        dst.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let consumed = match after.as_bytes().first() {
            Some(b'$') => {
                dst.push('$');
                1
            }
            Some(b'&') => {
                dst.push_str(whole.as_str());
                1
            }
            Some(b'`') => {
                dst.push_str(&haystack[..whole.start()]);
                1
            }
            Some(b'\'') => {
                dst.push_str(&haystack[whole.end()..]);
                1
            }
            Some(_) => match group_reference(after, groups) {
                Some((index, len)) => {
                    // A group that did not take part in the match expands to nothing.
                    if let Some(group) = caps.get(index) {
                        dst.push_str(group.as_str());
                    }
                    len
                }
                None => {
                    dst.push('$');
                    0
                }
            },
            None => {
                dst.push('$');
                0
            }
        };
        rest = &after[consumed..];
    }
    dst.push_str(rest);
}

/// Reads a `$n` or `$nn` group index from the text after a `$`.
///
/// Two digits win when they name an existing group, otherwise one digit does.
/// Returns the group index and how many bytes it used.
fn group_reference(text: &str, groups: usize) -> Option<(usize, usize)> {
    let digits: Vec<usize> = text
        .bytes()
        .take(2)
        .take_while(u8::is_ascii_digit)
        .map(|b| usize::from(b - b'0'))
        .collect();
    let first = *digits.first()?;
    if let Some(second) = digits.get(1) {
        let index = first * 10 + second;
        if (1..=groups).contains(&index) {
            return Some((index, 2));
        }
    }
    (1..=groups).contains(&first).then_some((first, 1))
}

/// Compiles parsed rules into regexes, failing on the first invalid pattern.
pub fn compile_substitutions(
    rules: Vec<SubstitutionRule>,
) -> Result<CompiledSubstitutions, KubecleanError> {
    debug!("Starting compilation of {} substitutions.", rules.len());

    let mut compiled = Vec::with_capacity(rules.len());
    for rule in rules {
        let regex = RegexBuilder::new(&rule.pattern)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build()
            .map_err(|e| KubecleanError::RuleCompilationError(rule.pattern.clone(), e))?;
        log::debug!(
            target: "kubeclean_core::sanitizer",
            "Substitution '{}' compiled successfully.",
            &rule.pattern
        );
        compiled.push(CompiledSubstitution {
            regex,
            replacement: rule.replacement,
        });
    }

    Ok(CompiledSubstitutions { rules: compiled })
}

/// Parses and compiles raw `from=to` strings.
///
/// Every string is parsed before any pattern is compiled, so a malformed rule
/// anywhere in the list is reported as `InvalidArgument`.
pub fn parse_substitutions<S: AsRef<str>>(
    raw_rules: &[S],
) -> Result<CompiledSubstitutions, KubecleanError> {
    let rules = raw_rules
        .iter()
        .map(|raw| SubstitutionRule::parse(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    compile_substitutions(rules)
}
