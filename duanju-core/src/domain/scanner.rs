//! The segmentation automaton.
//!
//! A [`Scanner`] holds all mutable state of one segmentation run: the
//! current automaton state, the quote stack, the sentence buffer and the
//! line counter. It is created fresh for every call, so independent runs
//! share nothing and may execute concurrently.

use crate::domain::quote_stack::QuoteStack;
use crate::domain::state::State;
use crate::domain::symbol::{Symbol, SPACES};
use crate::error::Error;
use crate::output::Sentence;

/// Per-run scan state.
#[derive(Debug)]
pub(crate) struct Scanner {
    state: State,
    quotes: QuoteStack,
    buffer: String,
    sentences: Vec<Sentence>,
    line: usize,
    error_tolerant: bool,
}

impl Scanner {
    pub(crate) fn new(error_tolerant: bool) -> Self {
        Self {
            state: State::Start,
            quotes: QuoteStack::new(),
            buffer: String::new(),
            sentences: Vec::new(),
            line: 1,
            error_tolerant,
        }
    }

    /// Runs the automaton over `text`, returning sentences in input order.
    ///
    /// Trailing boundary whitespace of the whole input is trimmed before
    /// the loop; the residual buffer is trimmed and flushed at end of
    /// stream so input without a final terminator still yields its last
    /// sentence.
    pub(crate) fn scan(mut self, text: &str) -> Result<Vec<Sentence>, Error> {
        let text = text.trim_end_matches(SPACES);

        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
            }
            self.state = self.advance(ch);
            match self.state {
                State::Start => {
                    if !self.buffer.is_empty() {
                        let done = std::mem::take(&mut self.buffer);
                        self.sentences.push(Sentence::new(done));
                    }
                    // Boundary whitespace is discarded; any other
                    // character opens the next sentence.
                    if Symbol::of(ch) != Symbol::Space {
                        self.buffer.push(ch);
                    }
                }
                State::End | State::Sentence | State::Quote => {
                    self.buffer.push(ch);
                }
                State::Error => {
                    return Err(Error::Syntax {
                        character: ch,
                        line: self.line,
                        partial: std::mem::take(&mut self.buffer),
                    });
                }
            }
        }

        let tail = self.buffer.trim_matches(SPACES);
        if !tail.is_empty() {
            self.sentences.push(Sentence::new(tail.to_string()));
        }
        Ok(self.sentences)
    }

    /// One transition step: classify the character, maintain quote depth,
    /// then apply the depth override and error recovery.
    fn advance(&mut self, ch: char) -> State {
        let symbol = Symbol::of(ch);

        // Depth accounting tracks every quote mark literally, whatever
        // the current state.
        match symbol {
            Symbol::QuoteOpen => self.quotes.push(ch),
            Symbol::QuoteClose => self.quotes.pop(),
            _ => {}
        }

        let mut next = self.state.transition(symbol);

        // A closing quote that only unwinds an inner nesting level keeps
        // the automaton inside the outer quoted region.
        if self.state == State::Quote && symbol == Symbol::QuoteClose {
            next = if self.quotes.is_empty() {
                State::Sentence
            } else {
                State::Quote
            };
        }

        if next == State::Error && self.error_tolerant {
            next = State::Sentence;
        }
        next
    }
}
