use thiserror::Error;

use crate::nfa::{Nfa, State, StateId, Transition};

/// Maximum number of fragments the construction stack may hold.
///
/// Only right-nested operands keep fragments pending; left-associated
/// chains never exceed depth two, so this bound is generous in practice.
pub const MAX_STACK_DEPTH: usize = 128;

/// Errors produced while compiling a postfix token stream.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CompileError {
    #[error("pattern too deeply nested (more than {MAX_STACK_DEPTH} pending fragments)")]
    StackOverflow,
    #[error("operator {0:?} without enough operands in postfix stream")]
    MissingOperand(char),
    #[error("postfix stream left {0} fragments instead of one")]
    UnbalancedFragments(usize),
}

/// Compile a postfix token stream into an [`Nfa`] by Thompson construction.
///
/// Each literal pushes a two-state fragment; each operator pops its operands
/// and pushes the combined fragment, wiring the pieces together with epsilon
/// transitions. The postfix produced by [`crate::parser::parse`] always
/// leaves exactly one fragment, spanning the whole pattern, whose entry
/// becomes the automaton's start state. Hand-fed postfix that pops an empty
/// stack or leaves extra fragments is reported, not trusted.
pub fn compile(postfix: &str) -> Result<Nfa, CompileError> {
    let mut c = Compiler::new();
    for token in postfix.chars() {
        match token {
            '.' => c.concatenation(token)?,
            '|' => c.alternation(token)?,
            '*' => c.zero_or_more(token)?,
            '+' => c.one_or_more(token)?,
            literal => c.literal(literal)?,
        }
    }
    c.finish()
}

/// A partially built sub-automaton with one entry and one exit state.
///
/// Lives only on the construction stack; never part of the finished [`Nfa`].
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: StateId,
    end: StateId,
}

struct Compiler {
    states: Vec<State>,
    stack: Vec<Fragment>,
    start: StateId,
}

impl Compiler {
    fn new() -> Self {
        Compiler {
            states: Vec::new(),
            stack: Vec::new(),
            start: 0,
        }
    }

    fn add_state(&mut self, accept: bool) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(accept));
        id
    }

    /// Attach one more outgoing transition to `from`.
    ///
    /// Construction only ever adds edges to fresh states or to fragment
    /// exits, which have no edges yet, so a free slot always exists.
    fn add_edge(&mut self, from: StateId, label: Option<char>, to: StateId) {
        let state = &mut self.states[from];
        let slot = if state.out[0].is_none() { 0 } else { 1 };
        debug_assert!(state.out[slot].is_none());
        state.out[slot] = Some(Transition { label, to });
    }

    fn push(&mut self, frag: Fragment) -> Result<(), CompileError> {
        if self.stack.len() >= MAX_STACK_DEPTH {
            return Err(CompileError::StackOverflow);
        }
        // The start pointer tracks the most recent fragment; the final push
        // spans the whole pattern.
        self.start = frag.start;
        self.stack.push(frag);
        Ok(())
    }

    fn pop(&mut self, op: char) -> Result<Fragment, CompileError> {
        self.stack.pop().ok_or(CompileError::MissingOperand(op))
    }

    /// Literal `c`: entry --c--> exit.
    fn literal(&mut self, c: char) -> Result<(), CompileError> {
        let end = self.add_state(true);
        let start = self.add_state(false);
        self.add_edge(start, Some(c), end);
        self.push(Fragment { start, end })
    }

    /// Concatenation: splice the first fragment's exit to the second's entry.
    fn concatenation(&mut self, op: char) -> Result<(), CompileError> {
        let f2 = self.pop(op)?;
        let f1 = self.pop(op)?;
        self.add_edge(f1.end, None, f2.start);
        self.states[f1.end].accept = false;
        self.push(Fragment {
            start: f1.start,
            end: f2.end,
        })
    }

    /// Alternation: a new entry forks to both operands, both exits rejoin.
    fn alternation(&mut self, op: char) -> Result<(), CompileError> {
        let f2 = self.pop(op)?;
        let f1 = self.pop(op)?;
        let end = self.add_state(true);
        let start = self.add_state(false);
        self.add_edge(start, None, f1.start);
        self.add_edge(start, None, f2.start);
        self.add_edge(f1.end, None, end);
        self.states[f1.end].accept = false;
        self.add_edge(f2.end, None, end);
        self.states[f2.end].accept = false;
        self.push(Fragment { start, end })
    }

    /// Zero-or-more: the new entry may skip the body entirely; the old exit
    /// loops back to the body or leaves.
    fn zero_or_more(&mut self, op: char) -> Result<(), CompileError> {
        let f = self.pop(op)?;
        let end = self.add_state(true);
        let start = self.add_state(false);
        self.add_edge(start, None, f.start);
        self.add_edge(start, None, end);
        self.add_edge(f.end, None, end);
        self.add_edge(f.end, None, f.start);
        self.states[f.end].accept = false;
        self.push(Fragment { start, end })
    }

    /// One-or-more: like zero-or-more, but the entry cannot skip the body.
    fn one_or_more(&mut self, op: char) -> Result<(), CompileError> {
        let f = self.pop(op)?;
        let end = self.add_state(true);
        let start = self.add_state(false);
        self.add_edge(start, None, f.start);
        self.add_edge(f.end, None, end);
        self.add_edge(f.end, None, f.start);
        self.states[f.end].accept = false;
        self.push(Fragment { start, end })
    }

    fn finish(self) -> Result<Nfa, CompileError> {
        if self.stack.len() != 1 {
            return Err(CompileError::UnbalancedFragments(self.stack.len()));
        }
        Ok(Nfa {
            states: self.states,
            start: self.start,
        })
    }
}
