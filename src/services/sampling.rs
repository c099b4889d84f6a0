use rand::Rng;
use rand::seq::index;

/// Draws `min(amount, rows.len())` distinct rows in random draw order.
pub fn sample_rows<'a, T, R: Rng + ?Sized>(
    rows: &[&'a T],
    amount: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    let amount = amount.min(rows.len());
    index::sample(rng, rows.len(), amount)
        .into_iter()
        .map(|i| rows[i])
        .collect()
}
