//! Rewriting of direction words into canonical form.
//!
//! One pass applies, in order and at most once each:
//!
//! 1. undo backward: `X B Y -> X·Y` where the step back cancels `X` and
//!    turns `Y` accordingly; a trailing `X B` is dropped and turns the
//!    holonomy
//! 2. merge `Y R R X -> Y' L X'` and the mirrored `Y L L X -> Y' R X'`
//! 3. `Y R F^n R X -> Y' (L F)^n L X'`
//!
//! Passes repeat until the word stops changing.

use tracing::warn;

use super::direction::Direction;

/// Upper bound on rewriting passes before giving up on a fixed point.
pub const MAX_SIMPLIFY_PASSES: usize = 4096;

/// Simplify `directions` to a fixed point, threading the holonomy.
pub fn simplify(directions: Vec<Direction>, holonomy: Direction) -> (Vec<Direction>, Direction) {
    let mut word = directions;
    let mut holonomy = holonomy;

    for _ in 0..MAX_SIMPLIFY_PASSES {
        let (next, next_holonomy) = simplify_once(&word, holonomy);
        holonomy = next_holonomy;
        if next == word {
            return (next, holonomy);
        }
        word = next;
    }

    warn!(
        word_len = word.len(),
        passes = MAX_SIMPLIFY_PASSES,
        "Direction word did not reach a fixed point"
    );
    (word, holonomy)
}

fn simplify_once(input: &[Direction], holonomy: Direction) -> (Vec<Direction>, Direction) {
    let mut holonomy = holonomy;
    if input.len() < 2 {
        return (input.to_vec(), holonomy);
    }

    let first = undo_backward(input, &mut holonomy);
    if first.len() < 3 {
        return (first, holonomy);
    }

    let second = merge_turns(&first, &mut holonomy);
    if second.len() < 4 {
        return (second, holonomy);
    }

    let third = unfold_right_corridor(&second, &mut holonomy);
    (third, holonomy)
}

fn undo_backward(input: &[Direction], holonomy: &mut Direction) -> Vec<Direction> {
    let mut out = Vec::with_capacity(input.len());
    let last_index = input.len() - 1;

    for i in 1..input.len() {
        let (fst, cur) = (input[i - 1], input[i]);

        if cur == Direction::Backward {
            if i == last_index {
                *holonomy = holonomy.add(fst.opposite());
            } else {
                let next = input[i + 1];
                out.push(match fst {
                    Direction::Left => next.clockwise(),
                    Direction::Right => next.anticlockwise(),
                    Direction::Forward => next.opposite(),
                    Direction::Backward => next,
                });
                out.extend_from_slice(&input[i + 2..]);
            }
            return out;
        }

        out.push(fst);
        if i == last_index {
            out.push(cur);
        }
    }
    out
}

fn merge_turns(input: &[Direction], holonomy: &mut Direction) -> Vec<Direction> {
    let mut out = Vec::with_capacity(input.len());
    let last_index = input.len() - 1;

    for i in 2..input.len() {
        let (fst, snd, cur) = (input[i - 2], input[i - 1], input[i]);

        if snd == cur && (cur == Direction::Right || cur == Direction::Left) {
            let (turn, replacement): (fn(Direction) -> Direction, Direction) =
                if cur == Direction::Right {
                    (Direction::clockwise, Direction::Left)
                } else {
                    (Direction::anticlockwise, Direction::Right)
                };

            out.push(turn(fst));
            out.push(replacement);
            if i == last_index {
                *holonomy = turn(*holonomy);
            } else {
                out.push(turn(input[i + 1]));
                out.extend_from_slice(&input[i + 2..]);
            }
            return out;
        }

        out.push(fst);
        if i == last_index {
            out.push(snd);
            out.push(cur);
        }
    }
    out
}

fn unfold_right_corridor(input: &[Direction], holonomy: &mut Direction) -> Vec<Direction> {
    let mut out = Vec::with_capacity(input.len() + 2);
    let mut i = 0;

    while i < input.len() {
        if i + 1 >= input.len() || input[i + 1] != Direction::Right {
            out.push(input[i]);
            i += 1;
            continue;
        }

        let forwards = input[i + 2..]
            .iter()
            .take_while(|&&d| d == Direction::Forward)
            .count();
        let closing = i + 2 + forwards;

        if forwards == 0 || input.get(closing) != Some(&Direction::Right) {
            out.push(input[i]);
            i += 1;
            continue;
        }

        out.push(input[i].clockwise());
        for _ in 0..forwards {
            out.push(Direction::Left);
            out.push(Direction::Forward);
        }
        out.push(Direction::Left);

        match input.get(closing + 1) {
            Some(&x) => {
                out.push(x.clockwise());
                out.extend_from_slice(&input[closing + 2..]);
            }
            None => *holonomy = holonomy.clockwise(),
        }
        return out;
    }
    out
}
