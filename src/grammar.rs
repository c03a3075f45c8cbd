//! L-system grammars and their expansion into instruction strings.
//!
//! A [`Grammar`] is an axiom, an ordered list of [`Rule`]s, and a depth.
//! [`Grammar::expand`] rewrites the axiom through `depth` generations and
//! returns the final symbol string, which the interpreter then walks.

use log::debug;
use thiserror::Error;

/// Default cap on the number of symbols one expansion may produce.
///
/// Rewrite output grows exponentially with depth, so every grammar carries a
/// limit; renders that blow past it fail with [`GrammarError::TooLarge`]
/// instead of exhausting memory.
pub const DEFAULT_MAX_SYMBOLS: usize = 1 << 20;

/// Errors raised while building or expanding a grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("rule element must be exactly one symbol, got {element:?}")]
    Malformed { element: String },

    #[error("expansion exceeded {limit} symbols during pass {depth}")]
    TooLarge { limit: usize, depth: u32 },
}

/// A single rewrite rule: occurrences of `element` become `replacement`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// The symbol this rule rewrites.
    pub element: char,

    /// The symbol string substituted for the element. May be empty, which
    /// erases the element.
    pub replacement: String,
}

impl Rule {
    /// Creates a rule from an element symbol and its replacement.
    pub fn new(element: char, replacement: impl Into<String>) -> Self {
        Self {
            element,
            replacement: replacement.into(),
        }
    }

    /// Builds a rule from wire-format strings.
    ///
    /// Task files carry elements as strings; only single-symbol elements are
    /// valid grammar.
    pub fn parse(element: &str, replacement: impl Into<String>) -> Result<Self, GrammarError> {
        let mut symbols = element.chars();
        match (symbols.next(), symbols.next()) {
            (Some(sym), None) => Ok(Self::new(sym, replacement)),
            _ => Err(GrammarError::Malformed {
                element: element.to_string(),
            }),
        }
    }
}

/// An L-system grammar: axiom, ordered rewrite rules, and expansion depth.
///
/// When several rules target the same element, the first one in list order
/// wins at every position; later duplicates are never consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    /// Initial symbol string before any rewriting.
    pub axiom: String,

    /// Ordered rewrite rules.
    pub rules: Vec<Rule>,

    /// Number of rewrite passes [`expand`](Self::expand) performs.
    pub depth: u32,

    /// Growth cap checked on every pass, in symbols.
    pub max_symbols: usize,
}

impl Grammar {
    /// Creates a grammar with no rules.
    pub fn new(axiom: impl Into<String>, depth: u32) -> Self {
        Self {
            axiom: axiom.into(),
            rules: Vec::new(),
            depth,
            max_symbols: DEFAULT_MAX_SYMBOLS,
        }
    }

    /// Appends a rewrite rule (builder pattern).
    pub fn with_rule(mut self, element: char, replacement: impl Into<String>) -> Self {
        self.rules.push(Rule::new(element, replacement));
        self
    }

    /// Replaces the growth cap (builder pattern).
    pub fn with_max_symbols(mut self, max_symbols: usize) -> Self {
        self.max_symbols = max_symbols;
        self
    }

    /// Expands the axiom through `depth` rewrite passes and returns the
    /// resulting instruction string.
    ///
    /// Each pass reads the current string left to right and appends into a
    /// fresh output buffer: the first matching rule contributes its
    /// replacement, unmatched symbols are copied through. Replacement text is
    /// never rescanned within the pass that produced it, so every pass is one
    /// whole generation of the L-system.
    ///
    /// Depth 0 returns the axiom unchanged, as does any depth with an empty
    /// rule list.
    pub fn expand(&self) -> Result<String, GrammarError> {
        let mut current = self.axiom.clone();
        if self.rules.is_empty() {
            return Ok(current);
        }

        for pass in 0..self.depth {
            current = self.rewrite_pass(&current, pass + 1)?;
            debug!(
                "expansion pass {}/{}: {} symbols",
                pass + 1,
                self.depth,
                current.chars().count()
            );
        }
        Ok(current)
    }

    /// Runs one rewrite generation over `input`.
    fn rewrite_pass(&self, input: &str, pass: u32) -> Result<String, GrammarError> {
        let mut output = String::with_capacity(input.len());
        let mut emitted = 0usize;

        for sym in input.chars() {
            match self.rules.iter().find(|rule| rule.element == sym) {
                Some(rule) => {
                    emitted += rule.replacement.chars().count();
                    output.push_str(&rule.replacement);
                }
                None => {
                    emitted += 1;
                    output.push(sym);
                }
            }
            if emitted > self.max_symbols {
                return Err(GrammarError::TooLarge {
                    limit: self.max_symbols,
                    depth: pass,
                });
            }
        }

        Ok(output)
    }
}
