use std::fmt;

use kind::Kind;

use crate::error::ShowKError;
use crate::show::{Canonical, Render, Show};
use crate::showk::{CanonicalShowK, ShowK};

/// A value that has already been rendered, ready to be spliced into a template.
///
/// Both `Display` and `Debug` write the rendered text, honouring width and alignment.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Shown(String);

impl Shown {
  /// Render a plain value with its [`Show`] impl.
  pub fn plain<T: Show + ?Sized>(value: &T) -> Self {
    Shown(value.show())
  }

  /// Render a wrapped value with the canonical instance of `F`.
  pub fn k<F, A>(fa: &F::Of<A>) -> Self
  where
    F: CanonicalShowK,
    A: Show,
  {
    Shown(F::instance().show_k::<A, Canonical>(fa, &Canonical))
  }

  /// Render a wrapped value with an explicit instance and inner renderer.
  pub fn with<F, S, A, R>(instance: &S, fa: &F::Of<A>, inner: &R) -> Self
  where
    F: Kind,
    S: ShowK<F> + ?Sized,
    R: Render<A> + ?Sized,
  {
    Shown(instance.show_k::<A, R>(fa, inner))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }
}

impl Show for Shown {
  fn show(&self) -> String {
    self.0.clone()
  }
}

impl fmt::Display for Shown {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(&self.0)
  }
}

impl fmt::Debug for Shown {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(&self.0)
  }
}

impl From<Shown> for String {
  fn from(shown: Shown) -> Self {
    shown.0
  }
}

/// Splice rendered arguments between literal template parts, left to right.
///
/// `parts` must hold exactly one more element than `args`.
pub fn try_interpolate(parts: &[&str], args: &[Shown]) -> Result<String, ShowKError> {
  if parts.len() != args.len() + 1 {
    return Err(ShowKError::TemplateArity {
      parts: parts.len(),
      args: args.len(),
    });
  }
  Ok(interpolate(parts, args))
}

/// Interleave literal parts and rendered arguments, `part, arg, part, arg, ...`.
///
/// Nothing is dropped when the counts disagree: once one side runs out, the rest of the other is
/// appended in order. Use [`try_interpolate`] to reject such templates instead.
pub fn interpolate(parts: &[&str], args: &[Shown]) -> String {
  let mut out = String::new();
  for idx in 0..parts.len().max(args.len()) {
    if let Some(part) = parts.get(idx) {
      out.push_str(part);
    }
    if let Some(arg) = args.get(idx) {
      out.push_str(arg.as_str());
    }
  }
  out
}
