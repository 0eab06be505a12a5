//! Parser for the declarative subset of the Gemfile DSL
//!
//! Understood statements:
//!
//! ```text
//! source "https://rubygems.org"
//! ruby "3.2.2"
//! gem "rails", "~> 7.1", require: false
//! group :development, :test do ... end
//! platforms :jruby do ... end
//! path "engines" do ... end
//! git "https://example.com/tools.git", branch: "main" do ... end
//! source "https://gems.example.com" do ... end
//! ```
//!
//! `gemspec`, `git_source` and `plugin` statements (and their blocks) are
//! skipped. Anything else is reported as [`ManifestError::Unsupported`]
//! rather than guessed at.

use crate::error::{ManifestError, Result};
use crate::model::{
    DEFAULT_REGISTRY_URL, Dependency, DependencyOptions, DependencySet, SourceDescriptor, SourceRef,
};
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::sync::LazyLock;

/// The public gem index, used when a manifest declares no global source.

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*[?!]?").expect("Invalid word regex"));

static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?").expect("Invalid number regex"));

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Str(String),
    /// A double-quoted string containing `#{...}`
    Interpolated(String),
    Symbol(String),
    /// `key:` in keyword-argument position
    Label(String),
    Word(String),
    Number(Number),
    Comma,
    Arrow,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Pipe,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Self::Str(s) | Self::Interpolated(s) => format!("string \"{}\"", s),
            Self::Symbol(s) => format!("symbol :{}", s),
            Self::Label(s) => format!("label {}:", s),
            Self::Word(s) => format!("`{}`", s),
            Self::Number(n) => format!("number {}", n),
            Self::Comma => "`,`".into(),
            Self::Arrow => "`=>`".into(),
            Self::LBracket => "`[`".into(),
            Self::RBracket => "`]`".into(),
            Self::LBrace => "`{`".into(),
            Self::RBrace => "`}`".into(),
            Self::LParen => "`(`".into(),
            Self::RParen => "`)`".into(),
            Self::Pipe => "`|`".into(),
        }
    }
}

/// One logical statement, possibly spanning several physical lines.
#[derive(Debug)]
struct Statement {
    line: usize,
    text: String,
    tokens: Vec<Token>,
}

#[derive(Debug)]
enum Scope {
    Group(Vec<String>),
    Platforms(Vec<String>),
    Source(SourceRef),
    Ignored,
}

#[derive(Debug, Default)]
struct Args {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

/// Parse manifest text into a dependency set.
pub fn parse_manifest(content: &str) -> Result<DependencySet> {
    let mut parser = ManifestParser::default();
    for statement in logical_statements(content)? {
        parser.statement(statement)?;
    }
    parser.finish()
}

#[derive(Debug, Default)]
struct ManifestParser {
    set: DependencySet,
    scopes: Vec<(usize, Scope)>,
}

impl ManifestParser {
    fn statement(&mut self, statement: Statement) -> Result<()> {
        let line = statement.line;

        // Inside a skipped block only nesting matters
        if matches!(self.scopes.last(), Some((_, Scope::Ignored))) {
            if statement.tokens == [Token::Word("end".into())] {
                self.scopes.pop();
            } else if split_block(&statement.tokens).1 {
                self.scopes.push((line, Scope::Ignored));
            }
            return Ok(());
        }

        let Some(Token::Word(command)) = statement.tokens.first() else {
            return Err(ManifestError::Unsupported {
                line,
                statement: statement.text,
            });
        };
        let command = command.clone();
        let (arg_tokens, has_block) = split_block(&statement.tokens[1..]);

        match command.as_str() {
            "end" if arg_tokens.is_empty() && !has_block => self
                .scopes
                .pop()
                .map(|_| ())
                .ok_or(ManifestError::UnbalancedBlock { line }),
            "gem" if !has_block => {
                let args = parse_args(arg_tokens, line)?;
                self.declare_gem(args, line)
            }
            "ruby" if !has_block => {
                let args = parse_args(arg_tokens, line)?;
                match args.positional.into_iter().next() {
                    Some(Value::String(version)) => self.set.runtime_version = Some(version),
                    _ => tracing::debug!(line, "Ruby directive without a literal version, ignoring"),
                }
                Ok(())
            }
            "source" => {
                let args = parse_args(arg_tokens, line)?;
                let uri = first_string(&args, line, "source")?;
                if has_block {
                    let source = self.registry_source(&uri);
                    self.scopes.push((line, Scope::Source(source)));
                } else if self.set.default_registry.is_none() && self.scopes.is_empty() {
                    self.set.default_registry = Some(normalize_uri(&uri));
                } else {
                    tracing::warn!(line, uri = %uri, "Ignoring additional global source");
                }
                Ok(())
            }
            "group" if has_block => {
                let args = parse_args(arg_tokens, line)?;
                let names = string_list(&args.positional, line, "group")?;
                self.scopes.push((line, Scope::Group(names)));
                Ok(())
            }
            "platforms" | "platform" if has_block => {
                let args = parse_args(arg_tokens, line)?;
                let names = string_list(&args.positional, line, "platforms")?;
                self.scopes.push((line, Scope::Platforms(names)));
                Ok(())
            }
            "path" | "git" | "github" if has_block => {
                let args = parse_args(arg_tokens, line)?;
                let location = first_string(&args, line, &command)?;
                let options: DependencyOptions = args.keywords.into_iter().collect();
                let descriptor = match command.as_str() {
                    "path" => SourceDescriptor::Path { path: location },
                    "git" => SourceDescriptor::Git {
                        uri: location,
                        reference: git_reference(&options, line)?,
                    },
                    _ => SourceDescriptor::Git {
                        uri: github_uri(&location),
                        reference: git_reference(&options, line)?,
                    },
                };
                self.scopes
                    .push((line, Scope::Source(SourceRef::Other(descriptor))));
                Ok(())
            }
            "gemspec" | "git_source" | "plugin" => {
                if command == "gemspec" {
                    tracing::warn!(line, "gemspec dependencies are not part of the parsed manifest");
                }
                if has_block {
                    self.scopes.push((line, Scope::Ignored));
                }
                Ok(())
            }
            _ => Err(ManifestError::Unsupported {
                line,
                statement: statement.text,
            }),
        }
    }

    fn declare_gem(&mut self, args: Args, line: usize) -> Result<()> {
        let mut positional = args.positional.into_iter();
        let name = match positional.next() {
            Some(Value::String(name)) if !name.trim().is_empty() => name,
            _ => return Err(ManifestError::syntax(line, "gem declaration requires a name")),
        };

        let mut dependency = Dependency::new(name);
        for value in positional {
            match value {
                Value::String(requirement) => dependency.requirements.push(requirement),
                Value::Array(items) => {
                    for item in items {
                        let Value::String(requirement) = item else {
                            return Err(ManifestError::syntax(
                                line,
                                "version requirements must be strings",
                            ));
                        };
                        dependency.requirements.push(requirement);
                    }
                }
                _ => {
                    return Err(ManifestError::syntax(
                        line,
                        "version requirements must be strings",
                    ));
                }
            }
        }

        dependency.options = args.keywords.into_iter().collect();
        dependency.source = match self.explicit_source(&dependency.options, line)? {
            Some(source) => Some(source),
            None => self.scoped_source(),
        };

        let groups = self.scoped_names(|scope| match scope {
            Scope::Group(names) => Some(names),
            _ => None,
        });
        merge_scoped(&mut dependency.options, groups, ["group", "groups"], "group");

        let platforms = self.scoped_names(|scope| match scope {
            Scope::Platforms(names) => Some(names),
            _ => None,
        });
        merge_scoped(
            &mut dependency.options,
            platforms,
            ["platform", "platforms"],
            "platforms",
        );

        self.set.push(dependency);
        Ok(())
    }

    /// Source named directly in a gem's options.
    fn explicit_source(&self, options: &DependencyOptions, line: usize) -> Result<Option<SourceRef>> {
        if let Some(path) = options.get("path") {
            let path = expect_string(path, line, "path")?;
            return Ok(Some(SourceRef::Other(SourceDescriptor::Path { path })));
        }
        if let Some(uri) = options.get("git") {
            let uri = expect_string(uri, line, "git")?;
            return Ok(Some(SourceRef::Other(SourceDescriptor::Git {
                uri,
                reference: git_reference(options, line)?,
            })));
        }
        if let Some(repo) = options.get("github") {
            let repo = expect_string(repo, line, "github")?;
            return Ok(Some(SourceRef::Other(SourceDescriptor::Git {
                uri: github_uri(&repo),
                reference: git_reference(options, line)?,
            })));
        }
        if let Some(uri) = options.get("source") {
            let uri = expect_string(uri, line, "source")?;
            return Ok(Some(self.registry_source(&uri)));
        }
        Ok(None)
    }

    fn scoped_source(&self) -> Option<SourceRef> {
        self.scopes.iter().rev().find_map(|(_, scope)| match scope {
            Scope::Source(source) => Some(source.clone()),
            _ => None,
        })
    }

    fn scoped_names(&self, select: impl Fn(&Scope) -> Option<&Vec<String>>) -> Vec<String> {
        self.scopes
            .iter()
            .filter_map(|(_, scope)| select(scope))
            .flatten()
            .cloned()
            .collect()
    }

    fn registry_source(&self, uri: &str) -> SourceRef {
        let uri = normalize_uri(uri);
        let is_default = uri == "rubygems"
            || uri == DEFAULT_REGISTRY_URL
            || uri == "http://rubygems.org"
            || self.set.default_registry.as_deref() == Some(uri.as_str());
        if is_default {
            SourceRef::DefaultRegistry
        } else {
            SourceRef::Other(SourceDescriptor::Registry { uri })
        }
    }

    fn finish(self) -> Result<DependencySet> {
        if let Some((line, _)) = self.scopes.last() {
            return Err(ManifestError::UnbalancedBlock { line: *line });
        }
        tracing::debug!(dependencies = self.set.len(), "Parsed manifest");
        Ok(self.set)
    }
}

/// Fold names inherited from enclosing blocks into `options[target]`.
fn merge_scoped(
    options: &mut DependencyOptions,
    scoped: Vec<String>,
    keys: [&str; 2],
    target: &str,
) {
    if scoped.is_empty() {
        return;
    }

    let mut merged: Vec<Value> = scoped.into_iter().map(Value::String).collect();
    for key in keys {
        match options.remove(key) {
            Some(Value::Array(items)) => merged.extend(items),
            Some(other) => merged.push(other),
            None => {}
        }
    }

    let mut unique = Vec::with_capacity(merged.len());
    for value in merged {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    options.insert(target.to_string(), Value::Array(unique));
}

fn git_reference(options: &DependencyOptions, line: usize) -> Result<Option<String>> {
    for key in ["ref", "tag", "branch"] {
        if let Some(value) = options.get(key) {
            return expect_string(value, line, key).map(Some);
        }
    }
    Ok(None)
}

fn github_uri(repo: &str) -> String {
    if repo.contains('/') {
        format!("https://github.com/{}.git", repo)
    } else {
        format!("https://github.com/{}/{}.git", repo, repo)
    }
}

fn normalize_uri(uri: &str) -> String {
    uri.trim().trim_end_matches('/').to_string()
}

fn expect_string(value: &Value, line: usize, what: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ManifestError::syntax(line, format!("`{}` must be a string", what))),
    }
}

fn first_string(args: &Args, line: usize, what: &str) -> Result<String> {
    match args.positional.first() {
        Some(value) => expect_string(value, line, what),
        None => Err(ManifestError::syntax(line, format!("`{}` requires an argument", what))),
    }
}

fn string_list(values: &[Value], line: usize, what: &str) -> Result<Vec<String>> {
    if values.is_empty() {
        return Err(ManifestError::syntax(line, format!("`{}` requires at least one name", what)));
    }
    values.iter().map(|v| expect_string(v, line, what)).collect()
}

/// Split trailing `do` / `do |args|` off a statement.
fn split_block(tokens: &[Token]) -> (&[Token], bool) {
    if let Some(idx) = tokens.iter().position(|t| *t == Token::Word("do".into())) {
        let tail = &tokens[idx + 1..];
        let block_params = tail.is_empty()
            || (tail.first() == Some(&Token::Pipe)
                && tail.last() == Some(&Token::Pipe)
                && tail.len() >= 2);
        if block_params {
            return (&tokens[..idx], true);
        }
    }
    (tokens, false)
}

/// Remove call parentheses wrapping the whole argument list.
fn strip_parens(tokens: &[Token]) -> &[Token] {
    if tokens.first() != Some(&Token::LParen) {
        return tokens;
    }
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return if idx == tokens.len() - 1 {
                        &tokens[1..idx]
                    } else {
                        tokens
                    };
                }
            }
            _ => {}
        }
    }
    tokens
}

fn parse_args(tokens: &[Token], line: usize) -> Result<Args> {
    let mut cursor = Cursor {
        tokens: strip_parens(tokens),
        pos: 0,
        line,
    };
    let mut args = Args::default();

    while !cursor.is_done() {
        if let Some(entry) = cursor.keyword()? {
            args.keywords.push(entry);
        } else if args.keywords.is_empty() {
            args.positional.push(cursor.value()?);
        } else {
            return Err(ManifestError::syntax(
                line,
                "positional argument after keyword arguments",
            ));
        }
        if !cursor.is_done() {
            cursor.expect(&Token::Comma)?;
        }
    }

    // A trailing braced hash carries the options, as in `gem "x", {"group" => "test"}`
    if args.keywords.is_empty()
        && args.positional.len() > 1
        && let Some(Value::Object(_)) = args.positional.last()
        && let Some(Value::Object(map)) = args.positional.pop()
    {
        args.keywords = map.into_iter().collect();
    }

    Ok(args)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    line: usize,
}

impl Cursor<'_> {
    fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<()> {
        match self.next() {
            Some(ref token) if token == expected => Ok(()),
            Some(token) => Err(ManifestError::syntax(
                self.line,
                format!("expected {}, found {}", expected.describe(), token.describe()),
            )),
            None => Err(ManifestError::syntax(
                self.line,
                format!("expected {}", expected.describe()),
            )),
        }
    }

    /// `key: value`, `"key" => value` or `:key => value`
    fn keyword(&mut self) -> Result<Option<(String, Value)>> {
        let key = match (self.peek(), self.peek_at(1)) {
            (Some(Token::Label(key)), _) => {
                let key = key.clone();
                self.pos += 1;
                key
            }
            (Some(Token::Str(key) | Token::Symbol(key)), Some(Token::Arrow)) => {
                let key = key.clone();
                self.pos += 2;
                key
            }
            _ => return Ok(None),
        };
        let value = self.value()?;
        Ok(Some((key, value)))
    }

    fn value(&mut self) -> Result<Value> {
        let line = self.line;
        match self.next() {
            Some(Token::Str(s) | Token::Symbol(s)) => Ok(Value::String(s)),
            Some(Token::Number(n)) => Ok(Value::Number(n)),
            Some(Token::Word(word)) => match word.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                "nil" => Ok(Value::Null),
                _ => Err(ManifestError::syntax(
                    line,
                    format!("unsupported expression `{}`", word),
                )),
            },
            Some(Token::Interpolated(s)) => Err(ManifestError::syntax(
                line,
                format!("string interpolation is not supported: \"{}\"", s),
            )),
            Some(Token::LBracket) => {
                let mut items = Vec::new();
                while self.peek() != Some(&Token::RBracket) {
                    items.push(self.value()?);
                    if self.peek() != Some(&Token::RBracket) {
                        self.expect(&Token::Comma)?;
                    }
                }
                self.expect(&Token::RBracket)?;
                Ok(Value::Array(items))
            }
            Some(Token::LBrace) => {
                let mut map = Map::new();
                while self.peek() != Some(&Token::RBrace) {
                    let Some((key, value)) = self.keyword()? else {
                        let found = self
                            .peek()
                            .map(Token::describe)
                            .unwrap_or_else(|| "end of statement".into());
                        return Err(ManifestError::syntax(
                            line,
                            format!("expected hash entry, found {}", found),
                        ));
                    };
                    map.insert(key, value);
                    if self.peek() != Some(&Token::RBrace) {
                        self.expect(&Token::Comma)?;
                    }
                }
                self.expect(&Token::RBrace)?;
                Ok(Value::Object(map))
            }
            Some(token) => Err(ManifestError::syntax(
                line,
                format!("unexpected {}", token.describe()),
            )),
            None => Err(ManifestError::syntax(line, "unexpected end of statement")),
        }
    }
}

/// Group physical lines into statements. A statement continues while it
/// ends in `,`, `=>`, a label, a trailing backslash or an open bracket.
fn logical_statements(content: &str) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();
    let mut pending: Vec<Token> = Vec::new();
    let mut start = 0;
    let mut text = String::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim_end();
        let (body, backslash) = match trimmed.strip_suffix('\\') {
            Some(body) => (body, true),
            None => (trimmed, false),
        };

        let tokens = tokenize(body, line)?;
        if pending.is_empty() {
            if tokens.is_empty() {
                continue;
            }
            start = line;
            text = body.trim().to_string();
        }
        pending.extend(tokens);

        if backslash || continues(&pending) {
            continue;
        }
        statements.push(Statement {
            line: start,
            text: std::mem::take(&mut text),
            tokens: std::mem::take(&mut pending),
        });
    }

    if !pending.is_empty() {
        return Err(ManifestError::syntax(start, "unexpected end of manifest"));
    }
    Ok(statements)
}

fn continues(tokens: &[Token]) -> bool {
    if matches!(
        tokens.last(),
        Some(Token::Comma | Token::Arrow | Token::Label(_))
    ) {
        return true;
    }
    let depth: isize = tokens
        .iter()
        .map(|t| match t {
            Token::LBracket | Token::LBrace | Token::LParen => 1,
            Token::RBracket | Token::RBrace | Token::RParen => -1,
            _ => 0,
        })
        .sum();
    depth > 0
}

fn tokenize(text: &str, line: usize) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = text;

    loop {
        rest = rest.trim_start();
        let Some(ch) = rest.chars().next() else {
            break;
        };

        match ch {
            '#' => break,
            '"' | '\'' => {
                let (value, interpolated, remaining) = lex_string(rest, line)?;
                rest = remaining;
                if !interpolated
                    && let Some(after) = rest.strip_prefix(':')
                    && !after.starts_with(':')
                {
                    tokens.push(Token::Label(value));
                    rest = after;
                } else if interpolated {
                    tokens.push(Token::Interpolated(value));
                } else {
                    tokens.push(Token::Str(value));
                }
            }
            ':' => {
                let after = &rest[1..];
                if after.starts_with('"') || after.starts_with('\'') {
                    let (value, _, remaining) = lex_string(after, line)?;
                    tokens.push(Token::Symbol(value));
                    rest = remaining;
                } else if let Some(m) = WORD_REGEX.find(after) {
                    tokens.push(Token::Symbol(m.as_str().to_string()));
                    rest = &after[m.end()..];
                } else {
                    return Err(ManifestError::syntax(line, "expected symbol name after `:`"));
                }
            }
            '=' if rest.starts_with("=>") => {
                tokens.push(Token::Arrow);
                rest = &rest[2..];
            }
            '%' => {
                let (words, remaining) = lex_percent_array(rest, line)?;
                tokens.extend(words);
                rest = remaining;
            }
            ',' | '[' | ']' | '{' | '}' | '(' | ')' | '|' => {
                tokens.push(match ch {
                    ',' => Token::Comma,
                    '[' => Token::LBracket,
                    ']' => Token::RBracket,
                    '{' => Token::LBrace,
                    '}' => Token::RBrace,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    _ => Token::Pipe,
                });
                rest = &rest[1..];
            }
            c if c.is_ascii_digit() || c == '-' => {
                let Some(m) = NUMBER_REGEX.find(rest) else {
                    return Err(ManifestError::syntax(line, "unexpected character `-`"));
                };
                let literal = m.as_str();
                let number = if literal.contains('.') {
                    literal.parse::<f64>().ok().and_then(Number::from_f64)
                } else {
                    literal.parse::<i64>().ok().map(Number::from)
                };
                let Some(number) = number else {
                    return Err(ManifestError::syntax(line, format!("invalid number {}", literal)));
                };
                tokens.push(Token::Number(number));
                rest = &rest[m.end()..];
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let Some(m) = WORD_REGEX.find(rest) else {
                    return Err(ManifestError::syntax(line, format!("unexpected character `{}`", c)));
                };
                let word = m.as_str().to_string();
                let after = &rest[m.end()..];
                if let Some(after_colon) = after.strip_prefix(':')
                    && !after_colon.starts_with(':')
                {
                    tokens.push(Token::Label(word));
                    rest = after_colon;
                } else {
                    tokens.push(Token::Word(word));
                    rest = after;
                }
            }
            other => {
                return Err(ManifestError::syntax(
                    line,
                    format!("unexpected character `{}`", other),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Lex a quoted string. Returns the value, whether it interpolates, and the
/// remaining input.
fn lex_string(input: &str, line: usize) -> Result<(String, bool, &str)> {
    let mut chars = input.char_indices();
    let Some((_, quote)) = chars.next() else {
        return Err(ManifestError::syntax(line, "expected string"));
    };
    let mut value = String::new();
    let mut interpolated = false;

    while let Some((idx, ch)) = chars.next() {
        if ch == quote {
            return Ok((value, interpolated, &input[idx + ch.len_utf8()..]));
        }
        if ch == '\\' {
            let Some((_, escaped)) = chars.next() else {
                break;
            };
            match (quote, escaped) {
                (_, e) if e == quote || e == '\\' => value.push(e),
                ('"', 'n') => value.push('\n'),
                ('"', 't') => value.push('\t'),
                ('"', 'r') => value.push('\r'),
                ('"', e) => value.push(e),
                (_, e) => {
                    value.push('\\');
                    value.push(e);
                }
            }
            continue;
        }
        if quote == '"' && ch == '#' && input[idx + 1..].starts_with(['{', '$', '@']) {
            interpolated = true;
        }
        value.push(ch);
    }

    Err(ManifestError::syntax(line, "unterminated string"))
}

/// `%w[a b]` and `%i[a b]` word arrays.
fn lex_percent_array(input: &str, line: usize) -> Result<(Vec<Token>, &str)> {
    let mut chars = input[1..].chars();
    let (Some(kind @ ('w' | 'W' | 'i' | 'I')), Some(open)) = (chars.next(), chars.next()) else {
        return Err(ManifestError::syntax(line, "unsupported percent literal"));
    };
    let close = match open {
        '[' => ']',
        '(' => ')',
        '{' => '}',
        '<' => '>',
        other => other,
    };

    let body_start = 2 + open.len_utf8();
    let Some(body_len) = input[body_start..].find(close) else {
        return Err(ManifestError::syntax(line, "unterminated percent literal"));
    };
    let body = &input[body_start..body_start + body_len];

    let mut tokens = vec![Token::LBracket];
    for (idx, word) in body.split_whitespace().enumerate() {
        if idx > 0 {
            tokens.push(Token::Comma);
        }
        tokens.push(if kind.eq_ignore_ascii_case(&'i') {
            Token::Symbol(word.to_string())
        } else {
            Token::Str(word.to_string())
        });
    }
    tokens.push(Token::RBracket);

    Ok((tokens, &input[body_start + body_len + close.len_utf8()..]))
}
