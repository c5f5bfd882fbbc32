//! Container aliases and helpers

/// Hash map used across libdai-rs
pub type HashMap<K, V, S = hashbrown::DefaultHashBuilder> = hashbrown::HashMap<K, V, S>;

/// Concatenate two slices into a new vector
pub fn concat<T: Clone>(u: &[T], v: &[T]) -> Vec<T> {
    let mut w = Vec::with_capacity(u.len() + v.len());
    w.extend_from_slice(u);
    w.extend_from_slice(v);
    w
}
