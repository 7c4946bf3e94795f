use kind::{BoxK, OptionK, ResultK, VecK};

use crate::showk::{CanonicalShowK, ShowK};

/// A type with a canonical string rendering.
///
/// Strings render as their contents, without quotes, so that `Some("baz")` shows as `Some(baz)`.
pub trait Show {
  fn show(&self) -> String;
}

/// Renders values of type `A` to strings.
///
/// Any `Fn(&A) -> String` is a renderer. Renderers must be total.
pub trait Render<A: ?Sized> {
  fn render(&self, value: &A) -> String;
}

impl<A, F> Render<A> for F
where
  A: ?Sized,
  F: Fn(&A) -> String,
{
  fn render(&self, value: &A) -> String {
    self(value)
  }
}

/// The renderer that defers to a type's [`Show`] impl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Canonical;

impl<A: Show + ?Sized> Render<A> for Canonical {
  fn render(&self, value: &A) -> String {
    value.show()
  }
}

macro_rules! show_via_display {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Show for $ty {
        fn show(&self) -> String {
          self.to_string()
        }
      }
    )*
  };
}

show_via_display!(
  i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
  String,
);

impl Show for () {
  fn show(&self) -> String {
    "()".to_owned()
  }
}

impl<T: Show + ?Sized> Show for &T {
  fn show(&self) -> String {
    (**self).show()
  }
}

impl<A: Show, B: Show> Show for (A, B) {
  fn show(&self) -> String {
    format!("({}, {})", self.0.show(), self.1.show())
  }
}

impl<A: Show, B: Show, C: Show> Show for (A, B, C) {
  fn show(&self) -> String {
    format!("({}, {}, {})", self.0.show(), self.1.show(), self.2.show())
  }
}

// Containers render through their canonical `ShowK` instance so a wrapped value shows the same
// way whether it is reached through `Show` or through `ShowK`.

impl<A: Show> Show for Option<A> {
  fn show(&self) -> String {
    OptionK::instance().show_k::<A, _>(self, &Canonical)
  }
}

impl<A: Show> Show for Vec<A> {
  fn show(&self) -> String {
    VecK::instance().show_k::<A, _>(self, &Canonical)
  }
}

impl<A: Show> Show for Box<A> {
  fn show(&self) -> String {
    BoxK::instance().show_k::<A, _>(self, &Canonical)
  }
}

impl<A: Show, E: Show> Show for Result<A, E> {
  fn show(&self) -> String {
    ResultK::<E>::instance().show_k::<A, _>(self, &Canonical)
  }
}
