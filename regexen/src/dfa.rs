//! Deterministic finite automata and subset construction.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::alphabet::Alphabet;
use crate::nfa::{Nfa, NfaState};

/// A deterministic finite automaton: `(q0, F, δ)` with `δ` total over Σ on
/// every state built by [`subset_construct`]. Every state built there is
/// reachable, so the total-transition invariant holds on the whole state set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    alphabet: Alphabet,
    initial: usize,
    accepting: Vec<bool>,
    transitions: Vec<Vec<usize>>,
}

impl Dfa {
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    pub fn initial_state(&self) -> usize {
        self.initial
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting[state]
    }

    /// `δ(state, a)`, or `None` if `a` is not in Σ.
    pub fn step(&self, state: usize, a: char) -> Option<usize> {
        self.alphabet
            .index_of(a)
            .map(|symbol| self.transitions[state][symbol])
    }

    /// Whether `w`, a string over Σ, is accepted. A character outside Σ has
    /// no defined transition and is treated as rejecting the input, since
    /// `w` is then not a string over the automaton's alphabet at all.
    pub fn accepts(&self, w: &str) -> bool {
        let mut state = self.initial;
        for a in w.chars() {
            match self.step(state, a) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.accepting[state]
    }

    /// Reverses the automaton: initial becomes `F`, the sole final state is
    /// the old `q0`, and every edge `p --a--> q` becomes `q --a--> p`. The
    /// result is generally nondeterministic, since several DFA states may
    /// transition to the same target on the same symbol.
    pub fn reverse(&self) -> Nfa {
        let n = self.state_count();
        let mut states = vec![NfaState::new(self.alphabet.len()); n];

        for (p, row) in self.transitions.iter().enumerate() {
            for (symbol, &q) in row.iter().enumerate() {
                states[q].transitions[symbol].push(p);
            }
        }

        let initial: Vec<usize> = (0..n).filter(|&q| self.accepting[q]).collect();
        let mut accepting = vec![false; n];
        accepting[self.initial] = true;

        Nfa::from_parts(self.alphabet.clone(), states, initial, accepting)
    }
}

/// Determinizes `nfa` by subset construction.
///
/// DFA states are reachable subsets of NFA states, canonicalized as
/// [`BTreeSet`]s: a `BTreeSet`'s iteration order is sorted by construction,
/// so using it directly as a `HashMap` key gives order-invariant set
/// identity. The empty set is a state like any other and becomes the sink
/// once every symbol from every state in it maps back to it.
pub fn subset_construct(nfa: &Nfa) -> Dfa {
    let alphabet = nfa.alphabet().clone();

    let mut state_index: HashMap<BTreeSet<usize>, usize> = HashMap::new();
    let mut accepting: Vec<bool> = Vec::new();
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut worklist: VecDeque<BTreeSet<usize>> = VecDeque::new();

    let mut intern = |set: BTreeSet<usize>,
                       state_index: &mut HashMap<BTreeSet<usize>, usize>,
                       accepting: &mut Vec<bool>,
                       rows: &mut Vec<Vec<usize>>,
                       worklist: &mut VecDeque<BTreeSet<usize>>|
     -> usize {
        if let Some(&idx) = state_index.get(&set) {
            return idx;
        }
        let idx = rows.len();
        accepting.push(set.iter().any(|&q| nfa.is_accepting(q)));
        rows.push(Vec::new());
        state_index.insert(set.clone(), idx);
        worklist.push_back(set);
        idx
    };

    let initial_set = nfa.epsilon_closure(nfa.initial_states().iter().copied());
    let initial = intern(
        initial_set,
        &mut state_index,
        &mut accepting,
        &mut rows,
        &mut worklist,
    );

    while let Some(set) = worklist.pop_front() {
        let from = *state_index
            .get(&set)
            .expect("every queued set was already interned");
        let mut row = Vec::with_capacity(alphabet.len());
        for &a in alphabet.symbols() {
            let target = nfa.step(&set, a);
            let to = intern(
                target,
                &mut state_index,
                &mut accepting,
                &mut rows,
                &mut worklist,
            );
            row.push(to);
        }
        rows[from] = row;
    }

    Dfa {
        alphabet,
        initial,
        accepting,
        transitions: rows,
    }
}
