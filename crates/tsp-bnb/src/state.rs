use std::rc::Rc;

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-size visited set packed into 64-bit words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visited {
    words: Vec<u64>,
    len: usize,
    count: usize,
}

impl Visited {
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
            count: 0,
        }
    }

    #[inline(always)]
    pub fn contains(&self, node: usize) -> bool {
        self.words[node / WORD_BITS] & (1 << (node % WORD_BITS)) != 0
    }

    /// Returns `false` if `node` was already present.
    pub fn insert(&mut self, node: usize) -> bool {
        let word = &mut self.words[node / WORD_BITS];
        let bit = 1 << (node % WORD_BITS);
        if *word & bit != 0 {
            return false;
        }
        *word |= bit;
        self.count += 1;
        true
    }

    /// Returns `false` if `node` was not present.
    pub fn remove(&mut self, node: usize) -> bool {
        let word = &mut self.words[node / WORD_BITS];
        let bit = 1 << (node % WORD_BITS);
        if *word & bit == 0 {
            return false;
        }
        *word &= !bit;
        self.count -= 1;
        true
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count == self.len
    }

    /// Unvisited nodes in ascending index order.
    pub fn unvisited(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&node| !self.contains(node))
    }
}

/// Persistent path: each step points at the prefix it extends, so sibling
/// states share their common prefix instead of copying it.
#[derive(Debug)]
pub struct Trail {
    node: usize,
    len: usize,
    parent: Option<Rc<Trail>>,
}

impl Trail {
    pub fn root(node: usize) -> Rc<Self> {
        Rc::new(Self {
            node,
            len: 1,
            parent: None,
        })
    }

    pub fn extend(self: &Rc<Self>, node: usize) -> Rc<Self> {
        Rc::new(Self {
            node,
            len: self.len + 1,
            parent: Some(Rc::clone(self)),
        })
    }

    #[inline(always)]
    pub fn last(&self) -> usize {
        self.node
    }

    /// Number of nodes on the path.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.len
    }

    /// Materialises the path from the root.
    pub fn to_vec(&self) -> Vec<usize> {
        let mut path = vec![0; self.len];
        let mut cursor = Some(self);
        let mut slot = self.len;
        while let Some(step) = cursor {
            slot -= 1;
            path[slot] = step.node;
            cursor = step.parent.as_deref();
        }
        path
    }
}

/// A partial tour in the best-first frontier.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub visited: Visited,
    pub trail: Rc<Trail>,
    pub cost: f64,
}

impl SearchState {
    pub fn initial(num_nodes: usize, start: usize) -> Self {
        let mut visited = Visited::new(num_nodes);
        visited.insert(start);
        Self {
            visited,
            trail: Trail::root(start),
            cost: 0.0,
        }
    }

    /// Child after moving to `next` at total cost `cost`. The visited set is
    /// an independent copy; the path prefix is shared.
    pub fn child(&self, next: usize, cost: f64) -> Self {
        let mut visited = self.visited.clone();
        visited.insert(next);
        let child = Self {
            visited,
            trail: self.trail.extend(next),
            cost,
        };
        debug_assert_eq!(child.visited.count(), child.trail.depth());
        child
    }

    #[inline(always)]
    pub fn last(&self) -> usize {
        self.trail.last()
    }

    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.trail.depth()
    }

    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.visited.is_full()
    }
}
