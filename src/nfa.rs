/// Index of a state in an [`Nfa`]'s arena.
pub type StateId = usize;

/// A single outgoing edge of a state.
///
/// `label == None` is an epsilon transition: it is followed without
/// consuming input. `label == Some(c)` consumes exactly the character `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub label: Option<char>,
    pub to: StateId,
}

/// One NFA state: up to two outgoing transitions and an accept flag.
///
/// Two transitions only ever appear on states produced by alternation and
/// the `*`/`+` splices; every other state has zero or one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub out: [Option<Transition>; 2],
    pub accept: bool,
}

impl State {
    pub fn new(accept: bool) -> Self {
        State {
            out: [None, None],
            accept,
        }
    }

    /// Iterate over the populated transitions.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.out.iter().flatten()
    }
}

/// A compiled automaton: an arena of states plus the designated start state.
///
/// The arena is the sole owner of every state the compiler ever allocated,
/// independent of the transition graph's topology — `*` and `+` introduce
/// cycles, but transitions hold ids, not references, so dropping the `Vec`
/// frees every state exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pub states: Vec<State>,
    pub start: StateId,
}

impl Nfa {
    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
