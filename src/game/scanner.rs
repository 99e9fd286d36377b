//! Line detection over one player's sorted move coordinates.
//!
//! The scan works on a row-major-sorted snapshot of a single player's moves.
//! Each starting index is examined independently against the four board
//! directions, which makes the whole pass embarrassingly parallel:
//! [`LineScanner`] fans the starting indices out over scoped worker threads
//! and joins before returning.

use std::sync::mpsc;
use std::thread;

use super::grid::{GridIndex, WinLine};

/// Scan directions as `(d_row, d_col)` steps: horizontal, vertical,
/// diagonal-right and diagonal-left. All have non-negative `d_row`, so a run
/// always continues at a strictly later position in row-major order.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find runs of length >= `threshold` in a sorted, duplicate-free sequence of
/// one player's coordinates. Returns one [`WinLine`] per qualifying run start.
///
/// Every index is scanned as a potential run start, including indices in the
/// middle of a longer run, so a run of length `threshold + k` yields `k + 1`
/// overlapping lines. Callers must tolerate overlapping segments; any one of
/// them is sufficient evidence of a win.
pub fn find_winning_runs(sorted_moves: &[GridIndex], threshold: usize) -> Vec<WinLine> {
    let mut lines = Vec::new();
    for start in 0..sorted_moves.len() {
        scan_from(sorted_moves, start, threshold, &mut lines);
    }
    lines
}

/// Scan all four directions from one starting index, appending qualifying
/// lines to `out`.
fn scan_from(moves: &[GridIndex], start: usize, threshold: usize, out: &mut Vec<WinLine>) {
    for (d_row, d_col) in DIRECTIONS {
        let mut len = 1;
        let mut current = start;

        'walk: loop {
            let wanted = moves[current].offset(d_row, d_col);
            for next in current + 1..moves.len() {
                if moves[next] == wanted {
                    len += 1;
                    current = next;
                    continue 'walk;
                }
                if moves[next] > wanted {
                    // Sorted input: the wanted coordinate cannot appear later.
                    break;
                }
            }
            break;
        }

        if len >= threshold {
            out.push(WinLine {
                start: moves[start],
                end: moves[current],
            });
        }
    }
}

/// Data-parallel wrapper around [`find_winning_runs`].
///
/// Starting indices are partitioned into contiguous chunks, one scoped worker
/// thread per chunk, all reading the same immutable snapshot. Workers report
/// lines over a channel; the scan joins before returning, so the caller never
/// observes a scan in flight. Output is sorted to keep results deterministic
/// regardless of worker completion order.
#[derive(Debug, Clone)]
pub struct LineScanner {
    num_threads: usize,
}

impl LineScanner {
    pub fn new(num_threads: usize) -> Self {
        LineScanner {
            num_threads: num_threads.max(1),
        }
    }

    pub fn scan(&self, sorted_moves: &[GridIndex], threshold: usize) -> Vec<WinLine> {
        if sorted_moves.len() < threshold {
            return Vec::new();
        }

        let workers = self.num_threads.min(sorted_moves.len());
        let chunk = sorted_moves.len().div_ceil(workers);
        let (tx, rx) = mpsc::channel::<Vec<WinLine>>();

        thread::scope(|s| {
            for worker in 0..workers {
                let tx = tx.clone();
                let lo = worker * chunk;
                let hi = (lo + chunk).min(sorted_moves.len());
                s.spawn(move || {
                    let mut local = Vec::new();
                    for start in lo..hi {
                        scan_from(sorted_moves, start, threshold, &mut local);
                    }
                    if !local.is_empty() {
                        let _ = tx.send(local);
                    }
                });
            }
        });
        drop(tx);

        let mut lines: Vec<WinLine> = rx.iter().flatten().collect();
        lines.sort_unstable();
        lines
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<GridIndex> {
        let mut v: Vec<GridIndex> = coords
            .iter()
            .map(|&(row, col)| GridIndex::new(row, col))
            .collect();
        v.sort_unstable();
        v
    }

    fn line(start: (i32, i32), end: (i32, i32)) -> WinLine {
        WinLine {
            start: GridIndex::new(start.0, start.1),
            end: GridIndex::new(end.0, end.1),
        }
    }

    #[test]
    fn test_horizontal_run_of_five() {
        let moves = cells(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let lines = find_winning_runs(&moves, 5);
        assert_eq!(lines, vec![line((0, 0), (0, 4))]);
    }

    #[test]
    fn test_diagonal_right_run() {
        let moves = cells(&[(0, 0), (1, 1), (2, 2)]);
        let lines = find_winning_runs(&moves, 3);
        assert_eq!(lines, vec![line((0, 0), (2, 2))]);
    }

    #[test]
    fn test_diagonal_left_run() {
        let moves = cells(&[(0, 2), (1, 1), (2, 0)]);
        let lines = find_winning_runs(&moves, 3);
        assert_eq!(lines, vec![line((0, 2), (2, 0))]);
    }

    #[test]
    fn test_vertical_run() {
        let moves = cells(&[(0, 3), (1, 3), (2, 3)]);
        let lines = find_winning_runs(&moves, 3);
        assert_eq!(lines, vec![line((0, 3), (2, 3))]);
    }

    #[test]
    fn test_scattered_moves_no_run() {
        let moves = cells(&[(0, 0), (0, 2), (1, 1), (2, 1)]);
        // Several length-2 contacts but no direction reaches 3.
        assert!(find_winning_runs(&moves, 3).is_empty());
    }

    #[test]
    fn test_short_sequences_produce_nothing() {
        assert!(find_winning_runs(&[], 3).is_empty());
        assert!(find_winning_runs(&cells(&[(0, 0)]), 3).is_empty());
        assert!(find_winning_runs(&cells(&[(0, 0), (0, 1)]), 3).is_empty());
    }

    #[test]
    fn test_run_with_gap_does_not_count() {
        let moves = cells(&[(0, 0), (0, 1), (0, 3), (0, 4)]);
        assert!(find_winning_runs(&moves, 3).is_empty());
    }

    #[test]
    fn test_overlong_run_reports_overlapping_sub_runs() {
        // A 6-long run with threshold 5: both (0,0) and (0,1) qualify as run
        // starts. This pins the every-index-is-a-start behavior.
        let moves = cells(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        let lines = find_winning_runs(&moves, 5);
        assert_eq!(lines, vec![line((0, 0), (0, 5)), line((0, 1), (0, 5))]);
    }

    #[test]
    fn test_two_separate_runs_both_reported() {
        let moves = cells(&[(0, 0), (0, 1), (0, 2), (4, 0), (5, 0), (6, 0)]);
        let mut lines = find_winning_runs(&moves, 3);
        lines.sort_unstable();
        assert_eq!(lines, vec![line((0, 0), (0, 2)), line((4, 0), (6, 0))]);
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        // Dense cluster with runs in several directions.
        let moves = cells(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 2),
            (3, 3),
            (4, 4),
        ]);
        let mut sequential = find_winning_runs(&moves, 3);
        sequential.sort_unstable();

        for threads in [1, 2, 4, 8] {
            let parallel = LineScanner::new(threads).scan(&moves, 3);
            assert_eq!(parallel, sequential, "threads = {threads}");
        }
    }

    #[test]
    fn test_parallel_scan_below_threshold_is_empty() {
        let moves = cells(&[(0, 0), (0, 1)]);
        assert!(LineScanner::new(4).scan(&moves, 3).is_empty());
    }

    #[test]
    fn test_scanner_zero_threads_clamps_to_one() {
        let moves = cells(&[(0, 0), (0, 1), (0, 2)]);
        let lines = LineScanner::new(0).scan(&moves, 3);
        assert_eq!(lines, vec![line((0, 0), (0, 2))]);
    }
}
