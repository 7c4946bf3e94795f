use std::any::{type_name, Any, TypeId};

use kind::{BoxK, IdK, Kind, OptionK, VecK};
use rustc_hash::FxHashMap;

use crate::error::ShowKError;
use crate::instances::{BoxShowK, IdShowK, OptionShowK, VecShowK};
use crate::show::Render;
use crate::showk::ShowK;

type ErasedFn<F, A> =
  Box<dyn Fn(&<F as Kind>::Of<A>, &dyn Render<A>) -> String + Send + Sync>;

// A registered instance with its concrete type erased, specialised to one inner type.
struct Erased<F: Kind, A> {
  show_k: ErasedFn<F, A>,
}

struct Entry {
  instance_name: &'static str,
  erased: Box<dyn Any + Send + Sync>,
}

/// Runtime lookup of [`ShowK`] instances keyed by type constructor and inner type.
///
/// Most code resolves instances statically through [`CanonicalShowK`](crate::CanonicalShowK).
/// The registry is for callers that pick instances at runtime, e.g. to override how one
/// constructor renders: the caller names only `F` and `A`, never the instance type, so whatever
/// was registered is what renders. Each `(F, A)` has at most one registered instance, and a lookup
/// for an unregistered pair fails immediately with [`ShowKError::NoRenderer`].
#[derive(Default)]
pub struct ShowKRegistry {
  instances: FxHashMap<TypeId, Entry>,
}

impl ShowKRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// A registry holding the canonical instances of the built-in constructors applied to `A`.
  pub fn with_builtins_for<A: 'static>() -> Self {
    let mut registry = Self::new();
    registry.insert::<OptionK, A, _>(OptionShowK);
    registry.insert::<VecK, A, _>(VecShowK);
    registry.insert::<BoxK, A, _>(BoxShowK);
    registry.insert::<IdK, A, _>(IdShowK);
    registry
  }

  fn key<F: Kind + 'static, A: 'static>() -> TypeId {
    TypeId::of::<(F, A)>()
  }

  fn insert<F, A, S>(&mut self, instance: S)
  where
    F: Kind + 'static,
    A: 'static,
    S: ShowK<F> + Send + Sync + 'static,
  {
    let show_k: ErasedFn<F, A> = Box::new(move |fa: &F::Of<A>, inner: &dyn Render<A>| {
      instance.show_k::<A, _>(fa, inner)
    });
    self.instances.insert(
      Self::key::<F, A>(),
      Entry {
        instance_name: type_name::<S>(),
        erased: Box::new(Erased::<F, A> { show_k }),
      },
    );
  }

  pub fn register<F, A, S>(&mut self, instance: S) -> Result<(), ShowKError>
  where
    F: Kind + 'static,
    A: 'static,
    S: ShowK<F> + Send + Sync + 'static,
  {
    if let Some(existing) = self.instances.get(&Self::key::<F, A>()) {
      log::debug!(
        "refusing second ShowK instance {} for {}<{}>, {} is registered",
        type_name::<S>(),
        type_name::<F>(),
        type_name::<A>(),
        existing.instance_name
      );
      return Err(ShowKError::Duplicate {
        kind: type_name::<F>(),
      });
    }
    log::debug!(
      "registering {} for {}<{}>",
      type_name::<S>(),
      type_name::<F>(),
      type_name::<A>()
    );
    self.insert::<F, A, S>(instance);
    Ok(())
  }

  /// Remove the instance for `(F, A)`, returning whether one was registered.
  pub fn unregister<F: Kind + 'static, A: 'static>(&mut self) -> bool {
    self.instances.remove(&Self::key::<F, A>()).is_some()
  }

  pub fn contains<F: Kind + 'static, A: 'static>(&self) -> bool {
    self.instances.contains_key(&Self::key::<F, A>())
  }

  pub fn len(&self) -> usize {
    self.instances.len()
  }

  pub fn is_empty(&self) -> bool {
    self.instances.is_empty()
  }

  /// Render `fa` with whichever instance is registered for `(F, A)`.
  pub fn show_k<F, A, R>(&self, fa: &F::Of<A>, inner: &R) -> Result<String, ShowKError>
  where
    F: Kind + 'static,
    A: 'static,
    R: Render<A>,
  {
    let found = self.instances.get(&Self::key::<F, A>()).and_then(|entry| {
      entry
        .erased
        .downcast_ref::<Erased<F, A>>()
        .map(|erased| (entry.instance_name, erased))
    });
    let Some((instance_name, erased)) = found else {
      log::debug!(
        "no ShowK instance for {}<{}>",
        type_name::<F>(),
        type_name::<A>()
      );
      return Err(ShowKError::NoRenderer {
        kind: type_name::<F>(),
      });
    };
    log::trace!(
      "rendering {}<{}> with {}",
      type_name::<F>(),
      type_name::<A>(),
      instance_name
    );
    let inner: &dyn Render<A> = inner;
    Ok((erased.show_k)(fa, inner))
  }
}

#[cfg(test)]
mod tests {
  use assert_matches::assert_matches;
  use kind::{BoxK, OptionK, ResultK, VecK};
  use test_utils::init_logger;

  use super::ShowKRegistry;
  use crate::error::ShowKError;
  use crate::show::Canonical;
  use crate::showk::constant;

  // Renders through the registry knowing only the constructor and inner type.
  #[allow(clippy::borrowed_box)]
  fn render_boxed(registry: &ShowKRegistry, value: &Box<i32>) -> Result<String, ShowKError> {
    registry.show_k::<BoxK, i32, _>(value, &Canonical)
  }

  #[test]
  fn test_builtins_are_registered() {
    init_logger();
    let registry = ShowKRegistry::with_builtins_for::<i32>();
    assert_eq!(registry.len(), 4);
    assert!(registry.contains::<OptionK, i32>());
    assert!(!registry.contains::<OptionK, u8>());
    assert!(!registry.contains::<ResultK<String>, i32>());
    assert_eq!(
      registry.show_k::<OptionK, i32, _>(&Some(1), &Canonical),
      Ok("Some(1)".to_owned())
    );
    assert_eq!(
      registry.show_k::<VecK, i32, _>(&vec![1, 2], &|n: &i32| format!("#{n}")),
      Ok("Vec(#1, #2)".to_owned())
    );
  }

  #[test]
  fn test_missing_instance_fails_fast() {
    init_logger();
    let registry = ShowKRegistry::new();
    assert!(registry.is_empty());
    let err = registry
      .show_k::<OptionK, i32, _>(&Some(1), &Canonical)
      .unwrap_err();
    assert_matches!(err, ShowKError::NoRenderer { kind } if kind.ends_with("OptionK"));
    assert!(err.to_string().starts_with("no ShowK instance registered for"));
  }

  #[test]
  fn test_lookup_is_per_inner_type() {
    init_logger();
    let registry = ShowKRegistry::with_builtins_for::<String>();
    assert_matches!(
      registry.show_k::<OptionK, i32, _>(&Some(1), &Canonical),
      Err(ShowKError::NoRenderer { .. })
    );
  }

  #[test]
  fn test_duplicate_registration_is_rejected() {
    init_logger();
    let mut registry = ShowKRegistry::with_builtins_for::<u8>();
    assert_matches!(
      registry.register::<OptionK, u8, _>(constant::<OptionK>("x")),
      Err(ShowKError::Duplicate { .. })
    );
    assert_eq!(
      registry.show_k::<OptionK, u8, _>(&None, &Canonical),
      Ok("None".to_owned())
    );
  }

  #[test]
  fn test_override_renders_without_naming_the_instance() {
    init_logger();
    let mut registry = ShowKRegistry::with_builtins_for::<i32>();
    assert_eq!(render_boxed(&registry, &Box::new(1)), Ok("1".to_owned()));

    assert!(registry.unregister::<BoxK, i32>());
    assert!(!registry.unregister::<BoxK, i32>());
    assert_matches!(
      render_boxed(&registry, &Box::new(1)),
      Err(ShowKError::NoRenderer { .. })
    );

    registry
      .register::<BoxK, i32, _>(constant::<BoxK>("<box>"))
      .unwrap();
    assert_eq!(render_boxed(&registry, &Box::new(1)), Ok("<box>".to_owned()));
  }
}
