use derive_new::new;
use tracing::warn;

/// One step of a shortest edit script, by position in the old and new sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    Equal { old_index: usize, new_index: usize },
    Delete { old_index: usize },
    Insert { new_index: usize },
}

impl Edit {
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

/// Myers' O((N+M)D) shortest edit script over exact element equality.
///
/// Every round `d` snapshots the furthest-reaching `x` per diagonal, and the
/// path is rebuilt by walking those snapshots back from `(n, m)`. Memory is
/// O(D * (N + M)), fine for statement-sized inputs.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// One move of the backtracked path, from one grid point to the next. A
/// diagonal move is a kept element, a horizontal one a deletion and a vertical
/// one an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    from: (isize, isize),
    to: (isize, isize),
}

impl Move {
    fn edit(&self) -> Edit {
        let ((from_x, from_y), (to_x, to_y)) = (self.from, self.to);
        match (to_x > from_x, to_y > from_y) {
            (true, true) => Edit::Equal {
                old_index: from_x as usize,
                new_index: from_y as usize,
            },
            (true, false) => Edit::Delete {
                old_index: from_x as usize,
            },
            _ => Edit::Insert {
                new_index: from_y as usize,
            },
        }
    }
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    /// Position of diagonal `k` in a frontier vector.
    fn slot(&self, k: isize) -> usize {
        (k + (self.a.len() + self.b.len()) as isize) as usize
    }

    /// Diagonal the round-`d` path on diagonal `k` came from. The lower edge
    /// is only reachable by insertion, the upper edge only by deletion, and
    /// in between a deletion wins only when strictly further along.
    fn predecessor(&self, frontier: &[isize], d: isize, k: isize) -> isize {
        let came_by_deletion = k != -d
            && (k == d || frontier[self.slot(k - 1)] + 1 > frontier[self.slot(k + 1)]);
        if came_by_deletion { k - 1 } else { k + 1 }
    }
}

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Option<Vec<Vec<isize>>>;
    type EditPath = Option<Vec<Move>>;
    type EditScript = Vec<Edit>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        if n + m == 0 {
            return Some(Vec::new());
        }

        let mut frontier = vec![0isize; 2 * (n + m) as usize + 1];
        let mut rounds = Vec::new();

        for d in 0..=(n + m) {
            rounds.push(frontier.clone());

            for k in (-d..=d).step_by(2) {
                let from = self.predecessor(&frontier, d, k);
                // a deletion moves one step right of the predecessor's x
                let mut x = frontier[self.slot(from)] + isize::from(from < k);
                let mut y = x - k;

                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }
                frontier[self.slot(k)] = x;

                if x >= n && y >= m {
                    return Some(rounds);
                }
            }
        }

        None
    }

    fn backtrack(&self) -> Self::EditPath {
        let rounds = self.compute_shortest_edit()?;
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut moves = Vec::new();

        for (d, frontier) in rounds.iter().enumerate().rev() {
            let d = d as isize;
            let prev_k = self.predecessor(frontier, d, x - y);
            let prev_x = frontier[self.slot(prev_k)];
            let prev_y = prev_x - prev_k;

            // the snake that followed the edit of this round
            while x > prev_x && y > prev_y {
                moves.push(Move {
                    from: (x - 1, y - 1),
                    to: (x, y),
                });
                (x, y) = (x - 1, y - 1);
            }

            if d > 0 {
                moves.push(Move {
                    from: (prev_x, prev_y),
                    to: (x, y),
                });
            }
            (x, y) = (prev_x, prev_y);
        }

        Some(moves)
    }

    fn diff(&self) -> Self::EditScript {
        let Some(moves) = self.backtrack() else {
            warn!(
                old_len = self.a.len(),
                new_len = self.b.len(),
                "shortest edit search did not terminate, falling back to linear scan"
            );
            return linear_scan(self.a, self.b);
        };

        let edits = moves.iter().rev().map(Move::edit).collect::<Vec<_>>();

        if !is_valid_script(&edits, self.a, self.b) {
            warn!(
                old_len = self.a.len(),
                new_len = self.b.len(),
                "backtracked edit script is inconsistent, falling back to linear scan"
            );
            return linear_scan(self.a, self.b);
        }

        edits
    }
}

/// Pairwise positional comparison: equal positions are kept, every other
/// position is deleted then inserted, and any tail is deleted or inserted
/// wholesale. Correct but not minimal.
pub fn linear_scan<T: Eq>(a: &[T], b: &[T]) -> Vec<Edit> {
    let common = a.len().min(b.len());
    let mut edits = Vec::with_capacity(a.len() + b.len());

    for index in 0..common {
        if a[index] == b[index] {
            edits.push(Edit::Equal {
                old_index: index,
                new_index: index,
            });
        } else {
            edits.push(Edit::Delete { old_index: index });
            edits.push(Edit::Insert { new_index: index });
        }
    }

    edits.extend((common..a.len()).map(|old_index| Edit::Delete { old_index }));
    edits.extend((common..b.len()).map(|new_index| Edit::Insert { new_index }));

    edits
}

/// Checks that `edits` walks both sequences exactly once, in order, and only
/// pairs equal elements.
pub fn is_valid_script<T: Eq>(edits: &[Edit], a: &[T], b: &[T]) -> bool {
    let (mut next_old, mut next_new) = (0, 0);

    for edit in edits {
        match *edit {
            Edit::Equal {
                old_index,
                new_index,
            } => {
                if old_index != next_old || new_index != next_new {
                    return false;
                }
                if a.get(old_index).zip(b.get(new_index)).is_none_or(|(x, y)| x != y) {
                    return false;
                }
                next_old += 1;
                next_new += 1;
            }
            Edit::Delete { old_index } => {
                if old_index != next_old || old_index >= a.len() {
                    return false;
                }
                next_old += 1;
            }
            Edit::Insert { new_index } => {
                if new_index != next_new || new_index >= b.len() {
                    return false;
                }
                next_new += 1;
            }
        }
    }

    next_old == a.len() && next_new == b.len()
}
