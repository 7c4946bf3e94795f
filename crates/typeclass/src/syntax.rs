use kind::Wrapped;

use crate::show::{Canonical, Render, Show};
use crate::showk::{CanonicalShowK, ShowK};

/// Method syntax for rendering a wrapped value with a [`ShowK`] instance.
///
/// ```
/// use typeclass::ShowKSyntax;
///
/// assert_eq!(Some(1).show_k(), "Some(1)");
/// assert_eq!(Some(1).show_k_with(&|n: &i32| format!("{n:03}")), "Some(001)");
/// ```
pub trait ShowKSyntax: Wrapped {
  /// Render with the canonical instance and the inner type's [`Show`].
  fn show_k(&self) -> String
  where
    Self::K: CanonicalShowK,
    Self::Inner: Show,
  {
    self.show_k_with(&Canonical)
  }

  /// Render with the canonical instance and an explicit inner renderer.
  fn show_k_with<R>(&self, inner: &R) -> String
  where
    Self::K: CanonicalShowK,
    R: Render<Self::Inner> + ?Sized,
  {
    self.show_k_using(&<Self::K as CanonicalShowK>::instance(), inner)
  }

  /// Render with an explicit instance.
  fn show_k_using<S, R>(&self, instance: &S, inner: &R) -> String
  where
    S: ShowK<Self::K> + ?Sized,
    R: Render<Self::Inner> + ?Sized,
  {
    instance.show_k::<Self::Inner, R>(self.as_kind(), inner)
  }
}

impl<T: Wrapped + ?Sized> ShowKSyntax for T {}
