use std::fmt::{Display, Formatter, Result};

// Implements `Display` by displaying each element of an iterator in order, separated by a
// separator.
pub struct DisplayIterSeparated<I, S> {
  iter: I,
  separator: S,
}

impl<I, S> DisplayIterSeparated<I, S> {
  pub fn new(iter: I, separator: S) -> DisplayIterSeparated<I, S> {
    DisplayIterSeparated { iter, separator }
  }
}

impl<I, S> Display for DisplayIterSeparated<I, S>
where
  I: Clone + Iterator,
  I::Item: Display,
  S: Display,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let mut iter = self.iter.clone();
    match iter.next() {
      Some(first) => {
        first.fmt(f)?;
        iter.try_for_each(|item| self.separator.fmt(f).and_then(|()| item.fmt(f)))
      }
      None => Ok(()),
    }
  }
}
