//! Type constructors as types.
//!
//! Rust has no way to name `Option` without applying it to an argument, so each type constructor
//! is represented by an uninhabited brand implementing [`Kind`]. `<OptionK as Kind>::Of<A>` is
//! `Option<A>`.

use std::marker::PhantomData;

/// A type constructor taking one type argument.
pub trait Kind {
  type Of<A>;
}

/// `Option<_>`
pub enum OptionK {}
impl Kind for OptionK {
  type Of<A> = Option<A>;
}

/// `Vec<_>`
pub enum VecK {}
impl Kind for VecK {
  type Of<A> = Vec<A>;
}

/// `Box<_>`
pub enum BoxK {}
impl Kind for BoxK {
  type Of<A> = Box<A>;
}

/// The identity constructor, `IdK::Of<A> = A`.
pub enum IdK {}
impl Kind for IdK {
  type Of<A> = A;
}

/// `Result<_, E>` with the error type fixed.
pub struct ResultK<E>(PhantomData<fn() -> E>);
impl<E> Kind for ResultK<E> {
  type Of<A> = Result<A, E>;
}

/// A value whose type is the application of a known [`Kind`] to an inner type.
///
/// This recovers the brand from a concrete type such as `Option<i32>`, which the projection
/// `K::Of<A>` cannot do on its own.
pub trait Wrapped {
  type K: Kind;
  type Inner;

  fn as_kind(&self) -> &<Self::K as Kind>::Of<Self::Inner>;
}

impl<A> Wrapped for Option<A> {
  type K = OptionK;
  type Inner = A;

  fn as_kind(&self) -> &Option<A> {
    self
  }
}

impl<A> Wrapped for Vec<A> {
  type K = VecK;
  type Inner = A;

  fn as_kind(&self) -> &Vec<A> {
    self
  }
}

impl<A> Wrapped for Box<A> {
  type K = BoxK;
  type Inner = A;

  fn as_kind(&self) -> &Box<A> {
    self
  }
}

impl<A, E> Wrapped for Result<A, E> {
  type K = ResultK<E>;
  type Inner = A;

  fn as_kind(&self) -> &Result<A, E> {
    self
  }
}
