//! Step-by-step Gauss–Jordan elimination.
//!
//! [`EliminationIterator`] reduces a copy of a matrix to reduced row echelon
//! form one elementary row operation at a time. Each call to `next` performs
//! a single operation and yields the matrix after it, so a caller can show
//! the whole derivation or replay the operations on another matrix (an
//! augmented right-hand side, an identity for inversion).
//!
//! The forward pass walks pivot columns left to right: each pivot is scaled
//! to one, swapped up to the next unused row and cleared below. The backward
//! pass then clears above every pivot, last pivot first. A final
//! [`RowOperation::Noop`] step carries the reduced matrix.

use std::fmt;

use cmat_complex::Complex;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::matrix::{Matrix, FORM};

/// An elementary row operation. Rows are zero-based.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowOperation {
    /// Exchange two rows.
    Swap {
        /// First row.
        first: usize,
        /// Second row.
        second: usize,
    },
    /// `row[target] += scalar * row[source]`.
    Add {
        /// Row that changes.
        target: usize,
        /// Row that is added.
        source: usize,
        /// Multiplier applied to the source row.
        scalar: Complex,
    },
    /// `row *= scalar`.
    Multiply {
        /// Row that changes.
        row: usize,
        /// Multiplier.
        scalar: Complex,
    },
    /// No change.
    Noop,
}

impl fmt::Display for RowOperation {
    /// Renders with one-based row labels, e.g. `(2) * R1 + R3 -> R3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap { first, second } => write!(f, "R{} <-> R{}", first + 1, second + 1),
            Self::Add {
                target,
                source,
                scalar,
            } => write!(
                f,
                "({scalar}) * R{} + R{} -> R{}",
                source + 1,
                target + 1,
                target + 1
            ),
            Self::Multiply { row, scalar } => write!(f, "({scalar}) * R{} -> R{}", row + 1, row + 1),
            Self::Noop => write!(f, "-"),
        }
    }
}

/// The matrix after an operation, together with that operation.
#[derive(Clone, Debug, PartialEq)]
pub struct EliminationStep {
    /// Snapshot of the matrix after `operation` was applied.
    pub matrix: Matrix,
    /// The operation that produced `matrix`.
    pub operation: RowOperation,
}

impl fmt::Display for EliminationStep {
    /// A rule, the operation centered over the matrix, then the matrix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.matrix.rendered_width();
        let operation = self.operation.to_string();
        let padding = width.saturating_sub(operation.chars().count()) / 2;
        writeln!(f, "{}", "-".repeat(width))?;
        writeln!(f, "{:padding$}{operation}", "")?;
        write!(f, "{}", self.matrix)
    }
}

/// Where the elimination currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EliminationState {
    /// Looking for the next pivot.
    ScanningForPivot,
    /// Scaling the pivot to one.
    NormalizingPivot,
    /// Swapping the pivot row up to the next unused row.
    MovingPivotUp,
    /// Clearing the pivot column below the pivot.
    EliminatingBelow,
    /// Clearing the pivot columns above each pivot.
    EliminatingAbove,
    /// Fully reduced.
    Done,
}

/// Lazily reduces a matrix to reduced row echelon form.
#[derive(Clone, Debug)]
pub struct EliminationIterator {
    matrix: Matrix,
    state: EliminationState,
    /// Current pivot position (row, column).
    pivot: (usize, usize),
    /// First column the pivot scan considers.
    next_column: usize,
    /// Rows already holding a pivot.
    used_rows: usize,
    /// Final pivot positions, in discovery order.
    pivots: SmallVec<[(usize, usize); 8]>,
    /// Pivots not yet cleared by the backward pass.
    sweep: usize,
    finished: bool,
}

impl EliminationIterator {
    /// Starts eliminating a copy of `matrix`.
    #[must_use]
    pub fn new(matrix: &Matrix) -> Self {
        Self {
            matrix: matrix.clone(),
            state: EliminationState::ScanningForPivot,
            pivot: (0, 0),
            next_column: 0,
            used_rows: 0,
            pivots: SmallVec::new(),
            sweep: 0,
            finished: false,
        }
    }

    /// Current state of the machine.
    #[must_use]
    pub fn state(&self) -> EliminationState {
        self.state
    }

    /// Pivot positions `(row, column)` found so far.
    #[must_use]
    pub fn pivots(&self) -> &[(usize, usize)] {
        &self.pivots
    }

    /// The working matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Runs the remaining steps and returns the reduced matrix.
    #[must_use]
    pub fn finish(mut self) -> Matrix {
        self.by_ref().for_each(drop);
        self.matrix
    }

    /// Runs the remaining steps and returns the reduced matrix with its pivots.
    #[must_use]
    pub fn finish_with_pivots(mut self) -> (Matrix, Vec<(usize, usize)>) {
        self.by_ref().for_each(drop);
        (self.matrix, self.pivots.into_vec())
    }

    fn find_pivot(&self) -> Option<(usize, usize)> {
        (self.next_column..self.matrix.columns()).find_map(|col| {
            (self.used_rows..self.matrix.rows())
                .find(|&row| !self.matrix[(row, col)].is_zero())
                .map(|row| (row, col))
        })
    }

    fn emit(&mut self, operation: RowOperation) -> EliminationStep {
        self.matrix.apply_operation(&operation);
        trace!(%operation, "row operation");
        EliminationStep {
            matrix: self.matrix.clone(),
            operation,
        }
    }
}

impl Iterator for EliminationIterator {
    type Item = EliminationStep;

    fn next(&mut self) -> Option<EliminationStep> {
        loop {
            match self.state {
                EliminationState::ScanningForPivot => {
                    if let Some(pivot) = self.find_pivot() {
                        debug!(row = pivot.0, column = pivot.1, "found pivot");
                        self.pivot = pivot;
                        self.state = EliminationState::NormalizingPivot;
                    } else {
                        self.sweep = self.pivots.len();
                        self.state = EliminationState::EliminatingAbove;
                    }
                }
                EliminationState::NormalizingPivot => {
                    self.state = EliminationState::MovingPivotUp;
                    let (row, col) = self.pivot;
                    let value = self.matrix[(row, col)];
                    if value != Complex::ONE {
                        let scalar = value.reciprocal(FORM);
                        return Some(self.emit(RowOperation::Multiply { row, scalar }));
                    }
                }
                EliminationState::MovingPivotUp => {
                    self.state = EliminationState::EliminatingBelow;
                    let (row, col) = self.pivot;
                    let target = self.used_rows;
                    self.used_rows += 1;
                    self.pivots.push((target, col));
                    if row != target {
                        self.pivot = (target, col);
                        return Some(self.emit(RowOperation::Swap {
                            first: row,
                            second: target,
                        }));
                    }
                }
                EliminationState::EliminatingBelow => {
                    let (row, col) = self.pivot;
                    let below = (row + 1..self.matrix.rows())
                        .find(|&r| !self.matrix[(r, col)].is_zero());
                    if let Some(target) = below {
                        let scalar = -self.matrix[(target, col)];
                        return Some(self.emit(RowOperation::Add {
                            target,
                            source: row,
                            scalar,
                        }));
                    }
                    self.next_column = col + 1;
                    self.state = EliminationState::ScanningForPivot;
                }
                EliminationState::EliminatingAbove => {
                    while self.sweep > 0 {
                        let (row, col) = self.pivots[self.sweep - 1];
                        let above = (0..row).rev().find(|&r| !self.matrix[(r, col)].is_zero());
                        if let Some(target) = above {
                            let scalar = -self.matrix[(target, col)];
                            return Some(self.emit(RowOperation::Add {
                                target,
                                source: row,
                                scalar,
                            }));
                        }
                        self.sweep -= 1;
                    }
                    self.state = EliminationState::Done;
                }
                EliminationState::Done => {
                    if self.finished {
                        return None;
                    }
                    self.finished = true;
                    debug!(rank = self.pivots.len(), "elimination finished");
                    return Some(EliminationStep {
                        matrix: self.matrix.clone(),
                        operation: RowOperation::Noop,
                    });
                }
            }
        }
    }
}

impl std::iter::FusedIterator for EliminationIterator {}
