//! Built-in [`ShowK`] instances for the standard containers.

use std::marker::PhantomData;

use base::display_iter::DisplayIterSeparated;
use kind::{BoxK, IdK, OptionK, ResultK, VecK};

use crate::show::{Canonical, Render, Show};
use crate::showk::{CanonicalShowK, ShowK};

/// `Some(a)` or `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionShowK;

impl ShowK<OptionK> for OptionShowK {
  fn show_k<A, R>(&self, fa: &Option<A>, inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    match fa {
      Some(a) => format!("Some({})", inner.render(a)),
      None => "None".to_owned(),
    }
  }
}

impl CanonicalShowK for OptionK {
  type Instance = OptionShowK;

  fn instance() -> OptionShowK {
    OptionShowK
  }
}

/// `Vec(a1, a2, ...)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VecShowK;

impl ShowK<VecK> for VecShowK {
  fn show_k<A, R>(&self, fa: &Vec<A>, inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    format!(
      "Vec({})",
      DisplayIterSeparated::new(fa.iter().map(|a| inner.render(a)), ", ")
    )
  }
}

impl CanonicalShowK for VecK {
  type Instance = VecShowK;

  fn instance() -> VecShowK {
    VecShowK
  }
}

/// Boxes are transparent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxShowK;

impl ShowK<BoxK> for BoxShowK {
  fn show_k<A, R>(&self, fa: &Box<A>, inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    inner.render(fa.as_ref())
  }
}

impl CanonicalShowK for BoxK {
  type Instance = BoxShowK;

  fn instance() -> BoxShowK {
    BoxShowK
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdShowK;

impl ShowK<IdK> for IdShowK {
  fn show_k<A, R>(&self, fa: &A, inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    inner.render(fa)
  }
}

impl CanonicalShowK for IdK {
  type Instance = IdShowK;

  fn instance() -> IdShowK {
    IdShowK
  }
}

/// `Ok(a)` or `Err(e)`, rendering the error with its own renderer.
pub struct ResultShowK<E, RE> {
  error: RE,
  _error: PhantomData<fn(&E)>,
}

impl<E, RE: Render<E>> ResultShowK<E, RE> {
  pub fn new(error: RE) -> Self {
    ResultShowK {
      error,
      _error: PhantomData,
    }
  }
}

impl<E, RE: Clone> Clone for ResultShowK<E, RE> {
  fn clone(&self) -> Self {
    ResultShowK {
      error: self.error.clone(),
      _error: PhantomData,
    }
  }
}

impl<E, RE: Render<E>> ShowK<ResultK<E>> for ResultShowK<E, RE> {
  fn show_k<A, R>(&self, fa: &Result<A, E>, inner: &R) -> String
  where
    R: Render<A> + ?Sized,
  {
    match fa {
      Ok(a) => format!("Ok({})", inner.render(a)),
      Err(e) => format!("Err({})", self.error.render(e)),
    }
  }
}

impl<E: Show> CanonicalShowK for ResultK<E> {
  type Instance = ResultShowK<E, Canonical>;

  fn instance() -> Self::Instance {
    ResultShowK::new(Canonical)
  }
}
