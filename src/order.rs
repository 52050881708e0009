use crate::alignment::SlotMatch;

/// Scores how consistently the matched words preserve the pattern's relative order.
///
/// Each matched slot contributes `1 - |slot - word - mean_offset| / total_len`, where the mean
/// offset is taken over all matched slots and `total_len` is the longer of the pattern and the
/// string. The average contribution is remapped from `[0, 1]` to `[-1, 1]`, so a pattern found
/// in order (even if shifted) scores 1 while scattered matches score near or below 0.
///
/// Returns 0 when no slot matched.
pub fn order_score(matches: &[SlotMatch], string_len: usize) -> f64 {
    let offsets = matches
        .iter()
        .filter_map(|m| m.word.map(|word| m.slot as f64 - word as f64))
        .collect::<Vec<f64>>();
    if offsets.is_empty() {
        return 0.0;
    }

    let count = offsets.len() as f64;
    let mean_offset = offsets.iter().sum::<f64>() / count;
    let total_len = matches.len().max(string_len) as f64;

    let contribution = offsets
        .iter()
        .map(|offset| 1.0 - (offset - mean_offset).abs() / total_len)
        .sum::<f64>()
        / count;

    (contribution - 0.5) / 0.5
}
