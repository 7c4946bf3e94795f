use std::fmt;
use std::marker::PhantomData;

use kind::Kind;

use crate::show::Render;

/// Renders any `F<A>` to a string, given a renderer for `A`.
///
/// Instances are values: a built-in constructor names its canonical instance through
/// [`CanonicalShowK`], and any other value implementing `ShowK<F>` can be passed explicitly
/// wherever a different rendering is wanted.
pub trait ShowK<F: Kind> {
  fn show_k<A, R>(&self, fa: &F::Of<A>, inner: &R) -> String
  where
    R: Render<A> + ?Sized;

  /// Derive a renderer for `F<A>` from a renderer for `A`.
  ///
  /// The derived renderer produces exactly what [`ShowK::show_k`] produces for the same inputs.
  fn algebra<A, R>(self, inner: R) -> Derived<F, Self, A, R>
  where
    Self: Sized,
    R: Render<A>,
  {
    Derived {
      instance: self,
      inner,
      _marker: PhantomData,
    }
  }
}

impl<F: Kind, S: ShowK<F> + ?Sized> ShowK<F> for &S {
  fn show_k<A, R>(&self, fa: &F::Of<A>, inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    (**self).show_k::<A, R>(fa, inner)
  }
}

/// The canonical [`ShowK`] instance of a type constructor.
///
/// Being a trait on the brand, there is at most one canonical instance per constructor.
pub trait CanonicalShowK: Kind + Sized {
  type Instance: ShowK<Self>;

  fn instance() -> Self::Instance;
}

/// Derive a renderer for `F<A>` from the canonical instance of `F`.
pub fn derive_renderer<F, A, R>(inner: R) -> Derived<F, F::Instance, A, R>
where
  F: CanonicalShowK,
  R: Render<A>,
{
  F::instance().algebra(inner)
}

/// A renderer for `F<A>` built from a [`ShowK<F>`] instance and a renderer for `A`.
pub struct Derived<F, S, A, R> {
  instance: S,
  inner: R,
  _marker: PhantomData<(fn() -> F, fn(&A))>,
}

impl<F, S, A, R> Render<F::Of<A>> for Derived<F, S, A, R>
where
  F: Kind,
  S: ShowK<F>,
  R: Render<A>,
{
  fn render(&self, fa: &F::Of<A>) -> String {
    self.instance.show_k::<A, R>(fa, &self.inner)
  }
}

impl<F, S: Clone, A, R: Clone> Clone for Derived<F, S, A, R> {
  fn clone(&self) -> Self {
    Derived {
      instance: self.instance.clone(),
      inner: self.inner.clone(),
      _marker: PhantomData,
    }
  }
}

/// A degenerate instance that ignores its input and always renders the same string.
pub struct Const<F> {
  value: String,
  _kind: PhantomData<fn() -> F>,
}

pub fn constant<F: Kind>(value: impl Into<String>) -> Const<F> {
  Const {
    value: value.into(),
    _kind: PhantomData,
  }
}

impl<F> Const<F> {
  pub fn value(&self) -> &str {
    &self.value
  }
}

impl<F: Kind> ShowK<F> for Const<F> {
  fn show_k<A, R>(&self, _fa: &F::Of<A>, _inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    self.value.clone()
  }
}

impl<F> Clone for Const<F> {
  fn clone(&self) -> Self {
    Const {
      value: self.value.clone(),
      _kind: PhantomData,
    }
  }
}

impl<F> fmt::Debug for Const<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Const").field(&self.value).finish()
  }
}
