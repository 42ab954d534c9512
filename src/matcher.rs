use crate::nfa::{Nfa, StateId};

/// Test whether `input` as a whole belongs to the language of `nfa`.
///
/// Subset-construction-style simulation: a frontier of simultaneously
/// possible states is advanced one input character at a time, with no
/// backtracking, so matching costs at most (states × input length). All
/// frontier storage is local to this call — nothing on the shared [`Nfa`]
/// is mutated, and any number of matches may run against one automaton
/// concurrently or interleaved.
pub fn is_match(nfa: &Nfa, input: &str) -> bool {
    let mut current = Frontier::new(nfa.len());
    let mut next = Frontier::new(nfa.len());

    current.insert(nfa.start);
    epsilon_closure(nfa, &mut current);

    for c in input.chars() {
        next.clear();
        for &id in current.iter() {
            for t in nfa.states[id].transitions() {
                if t.label == Some(c) {
                    next.insert(t.to);
                }
            }
        }
        epsilon_closure(nfa, &mut next);
        // An empty frontier is valid: no match is possible from here on,
        // but the remaining input is still consumed vacuously.
        std::mem::swap(&mut current, &mut next);
    }

    current.iter().any(|&id| nfa.states[id].accept)
}

/// Expand `frontier` to its epsilon-closure.
///
/// Worklist expansion over the frontier's own list: every state appended is
/// eventually scanned in turn, and insertion is idempotent, so growth is
/// monotone and bounded by the automaton's state count. This terminates
/// even on the cyclic graphs produced by `*` and `+`.
fn epsilon_closure(nfa: &Nfa, frontier: &mut Frontier) {
    let mut i = 0;
    while i < frontier.ids.len() {
        let id = frontier.ids[i];
        for t in nfa.states[id].transitions() {
            if t.label.is_none() {
                frontier.insert(t.to);
            }
        }
        i += 1;
    }
}

/// A set of automaton states, owned by a single match call.
///
/// The id list drives iteration; the bitmap makes insertion idempotent.
struct Frontier {
    ids: Vec<StateId>,
    seen: Vec<bool>,
}

impl Frontier {
    fn new(state_count: usize) -> Self {
        Frontier {
            ids: Vec::with_capacity(state_count),
            seen: vec![false; state_count],
        }
    }

    /// Add a state; duplicates are suppressed.
    fn insert(&mut self, id: StateId) {
        if !self.seen[id] {
            self.seen[id] = true;
            self.ids.push(id);
        }
    }

    fn clear(&mut self) {
        for &id in &self.ids {
            self.seen[id] = false;
        }
        self.ids.clear();
    }

    fn iter(&self) -> std::slice::Iter<'_, StateId> {
        self.ids.iter()
    }
}
