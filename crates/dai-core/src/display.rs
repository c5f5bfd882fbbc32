//! Text layout for standard containers
//!
//! Sequences print as `(a, b, c)`, sets as `{a, b}`, maps as `{k->v, ...}`
//! and pairs as `(a, b)`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

fn write_joined<T>(
    f: &mut Formatter<'_>,
    items: impl IntoIterator<Item = T>,
    mut each: impl FnMut(&mut Formatter<'_>, T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        each(f, item)?;
    }
    Ok(())
}

/// Displays a slice as `(a, b, c)`
#[derive(Debug, Clone, Copy)]
pub struct Seq<'a, T>(pub &'a [T]);

impl<T: Display> Display for Seq<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_joined(f, self.0, |f, x| write!(f, "{x}"))?;
        f.write_str(")")
    }
}

/// Displays an ordered set as `{a, b}`
#[derive(Debug, Clone, Copy)]
pub struct Set<'a, T>(pub &'a BTreeSet<T>);

impl<T: Display> Display for Set<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        write_joined(f, self.0, |f, x| write!(f, "{x}"))?;
        f.write_str("}")
    }
}

/// Displays an ordered map as `{k1->v1, k2->v2}`
#[derive(Debug, Clone, Copy)]
pub struct Map<'a, K, V>(pub &'a BTreeMap<K, V>);

impl<K: Display, V: Display> Display for Map<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        write_joined(f, self.0, |f, (k, v)| write!(f, "{k}->{v}"))?;
        f.write_str("}")
    }
}

/// Displays a pair as `(a, b)`
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a, A, B>(pub &'a (A, B));

impl<A: Display, B: Display> Display for Pair<'_, A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.0, self.0.1)
    }
}

/// `.display()` for containers with a libdai text layout
pub trait ContainerDisplay {
    fn display(&self) -> impl Display + '_;
}

impl<T: Display> ContainerDisplay for [T] {
    fn display(&self) -> impl Display + '_ {
        Seq(self)
    }
}

impl<T: Display> ContainerDisplay for BTreeSet<T> {
    fn display(&self) -> impl Display + '_ {
        Set(self)
    }
}

impl<K: Display, V: Display> ContainerDisplay for BTreeMap<K, V> {
    fn display(&self) -> impl Display + '_ {
        Map(self)
    }
}

impl<A: Display, B: Display> ContainerDisplay for (A, B) {
    fn display(&self) -> impl Display + '_ {
        Pair(self)
    }
}
