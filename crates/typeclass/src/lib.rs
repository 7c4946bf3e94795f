//! The `ShowK` type class: rendering `F<A>` to a string for any `A`, given a renderer for `A`.
//!
//! * [`Show`] and [`Render`] render plain values.
//! * [`ShowK`] renders values wrapped in a type constructor ([`kind::Kind`]), with built-in
//!   instances for `Option`, `Vec`, `Box`, `Result` and the identity constructor.
//! * [`ShowKSyntax`] adds `.show_k()` to wrapped values.
//! * [`Shown`] and [`interpolate`] compose messages from mixed plain and wrapped values.
//! * [`ShowKRegistry`] resolves instances at runtime when static resolution is not an option.

pub mod error;
pub mod instances;
pub mod interp;
pub mod layout;
pub mod registry;
pub mod show;
pub mod showk;
pub mod syntax;

pub use error::ShowKError;
pub use instances::{BoxShowK, IdShowK, OptionShowK, ResultShowK, VecShowK};
pub use interp::{interpolate, try_interpolate, Shown};
pub use layout::{ShowStruct, ShowTuple};
pub use registry::ShowKRegistry;
pub use show::{Canonical, Render, Show};
pub use showk::{constant, derive_renderer, CanonicalShowK, Const, Derived, ShowK};
pub use syntax::ShowKSyntax;
