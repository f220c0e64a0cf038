//! Case-insensitive substring filtering.

/// Options whose lowercase form contains the lowercase `query`, in their
/// original order. An empty query matches every option.
pub fn filter_options<'a, S: AsRef<str>>(options: &'a [S], query: &str) -> Vec<&'a str> {
    filter_positions(options, query)
        .into_iter()
        .map(|position| options[position].as_ref())
        .collect()
}

/// Positions in `options` of the entries [`filter_options`] keeps.
pub fn filter_positions<S: AsRef<str>>(options: &[S], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.as_ref().to_lowercase().contains(&needle))
        .map(|(position, _)| position)
        .collect()
}
