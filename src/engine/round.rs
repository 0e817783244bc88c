//! Rounds and round content draws

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::DrawMode;

/// One challenge within a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based
    pub index: u32,
    /// Indices into the session's content table, in presentation order
    pub content: Vec<usize>,
    pub time_budget_secs: u32,
}

impl Round {
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Draw the content for round `index` from a table of `table_len` entries.
///
/// Random and growing draws never reproduce `previous` when the table has
/// more than one entry.
pub fn draw<R: Rng + ?Sized>(
    mode: DrawMode,
    table_len: usize,
    items: usize,
    index: u32,
    previous: Option<&[usize]>,
    rng: &mut R,
) -> Vec<usize> {
    if table_len == 0 {
        return Vec::new();
    }

    match mode {
        DrawMode::Pinned(item) => vec![item.min(table_len - 1)],
        DrawMode::Sequential => {
            let start = (index.saturating_sub(1) as usize).saturating_mul(items);
            (0..items).map(|offset| (start + offset) % table_len).collect()
        }
        DrawMode::Random => draw_random(table_len, items, previous, rng),
        DrawMode::Growing => draw_growing(table_len, items, previous.unwrap_or(&[]), rng),
    }
}

fn draw_random<R: Rng + ?Sized>(
    table_len: usize,
    items: usize,
    previous: Option<&[usize]>,
    rng: &mut R,
) -> Vec<usize> {
    let mut content: Vec<usize> = (0..items).map(|_| rng.gen_range(0..table_len)).collect();

    if table_len > 1 {
        if let Some(prev) = previous {
            if prev == content.as_slice() {
                content[0] = pick_other(table_len, prev[0], rng);
            }
        }
    }

    content
}

fn draw_growing<R: Rng + ?Sized>(
    table_len: usize,
    items: usize,
    previous: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let mut content: Vec<usize> = previous.to_vec();
    if content.len() >= items {
        // At the clamp: rotate the oldest item out
        let excess = content.len() + 1 - items;
        content.drain(..excess.min(content.len()));
    }

    while content.len() < items {
        // A fully rotated-out sequence still must not repeat the last round
        let next = match content.last().or(previous.last()) {
            Some(&last) if table_len > 1 => pick_other(table_len, last, rng),
            _ => rng.gen_range(0..table_len),
        };
        content.push(next);
    }

    content
}

/// Uniform pick from `0..table_len` excluding `avoid`; needs `table_len >= 2`
fn pick_other<R: Rng + ?Sized>(table_len: usize, avoid: usize, rng: &mut R) -> usize {
    let pick = rng.gen_range(0..table_len - 1);
    if pick >= avoid {
        pick + 1
    } else {
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_random_never_repeats_previous() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut previous = draw(DrawMode::Random, 6, 1, 1, None, &mut rng);
        for index in 2..500 {
            let content = draw(DrawMode::Random, 6, 1, index, Some(&previous), &mut rng);
            assert_ne!(content, previous);
            previous = content;
        }
    }

    #[test]
    fn test_random_with_two_entries_alternates() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut previous = vec![0];
        for index in 1..50 {
            let content = draw(DrawMode::Random, 2, 1, index, Some(&previous), &mut rng);
            assert_eq!(content, vec![1 - previous[0]]);
            previous = content;
        }
    }

    #[test]
    fn test_single_entry_table_may_repeat() {
        let mut rng = SmallRng::seed_from_u64(1);
        let content = draw(DrawMode::Random, 1, 1, 2, Some(&[0]), &mut rng);
        assert_eq!(content, vec![0]);
    }

    #[test]
    fn test_sequential_wraps() {
        let mut rng = SmallRng::seed_from_u64(0);
        let rounds: Vec<Vec<usize>> = (1..=6)
            .map(|i| draw(DrawMode::Sequential, 4, 1, i, None, &mut rng))
            .collect();
        assert_eq!(rounds, vec![vec![0], vec![1], vec![2], vec![3], vec![0], vec![1]]);
    }

    #[test]
    fn test_growing_extends_then_rotates() {
        let mut rng = SmallRng::seed_from_u64(9);
        let first = draw(DrawMode::Growing, 8, 1, 1, None, &mut rng);
        assert_eq!(first.len(), 1);

        let second = draw(DrawMode::Growing, 8, 2, 2, Some(&first), &mut rng);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0], first[0]);
        assert_ne!(second[1], second[0]);

        let rotated = draw(DrawMode::Growing, 8, 2, 3, Some(&second), &mut rng);
        assert_eq!(rotated.len(), 2);
        assert_eq!(rotated[0], second[1]);
        assert_ne!(rotated, second);
    }

    #[test]
    fn test_growing_single_item_never_repeats_previous() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut previous = draw(DrawMode::Growing, 6, 1, 1, None, &mut rng);
        for index in 2..200 {
            let content = draw(DrawMode::Growing, 6, 1, index, Some(&previous), &mut rng);
            assert_eq!(content.len(), 1);
            assert_ne!(content, previous);
            previous = content;
        }
    }

    #[test]
    fn test_pinned_is_fixed() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(draw(DrawMode::Pinned(2), 4, 1, 1, None, &mut rng), vec![2]);
        assert_eq!(draw(DrawMode::Pinned(2), 4, 1, 2, Some(&[2]), &mut rng), vec![2]);
    }
}
