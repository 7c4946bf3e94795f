//! Generic "show" for type constructors.
//!
//! ```
//! use showk::{show, ShowK, ShowKSyntax, OptionShowK, Canonical};
//!
//! assert_eq!(OptionShowK.show_k(&Some(1), &Canonical), "Some(1)");
//! assert_eq!(Some(1).show_k(), "Some(1)");
//! assert_eq!(show!("{} {}", 1, Some(1)), "1 Some(1)");
//! ```

pub use base::pretty::RenderConfig;
pub use kind::{BoxK, IdK, Kind, OptionK, ResultK, VecK, Wrapped};
pub use typeclass::{
  constant, derive_renderer, interpolate, try_interpolate, BoxShowK, Canonical, CanonicalShowK,
  Const, Derived, IdShowK, OptionShowK, Render, ResultShowK, Show, ShowK, ShowKError,
  ShowKRegistry, ShowKSyntax, ShowStruct, ShowTuple, Shown, VecShowK,
};

/// `format!` for [`Show`] values.
///
/// Every argument is rendered with its [`Show`] impl, so wrapped values go through the canonical
/// [`ShowK`] instance of their constructor. An argument rendered some other way can be passed as a
/// [`Shown`]. Arguments are evaluated left to right, and an argument without a `Show` impl is a
/// compile error.
///
/// Only positional placeholders (`{}`, `{0}`, with any format spec such as `{:>5}`) take their
/// value from the argument list. A name captured inline, as in `show!("{x}")`, is formatted with
/// its own `Display` impl and never reaches `Show`.
#[macro_export]
macro_rules! show {
  ($template:literal $(, $arg:expr)* $(,)?) => {
    ::std::format!($template $(, $crate::Shown::plain(&$arg))*)
  };
}

#[cfg(test)]
mod tests {
  use expect_test::expect;
  use test_utils::Counter;

  use crate::{
    constant, derive_renderer, Canonical, OptionK, OptionShowK, Render, RenderConfig, Show, ShowK,
    ShowKSyntax, ShowStruct, Shown, VecK,
  };

  struct Foo {
    bar: Option<i32>,
    baz: Option<String>,
  }

  impl Show for Foo {
    fn show(&self) -> String {
      ShowStruct::new("Foo")
        .field("bar", &self.bar)
        .field("baz", &self.baz)
        .finish()
    }
  }

  #[test]
  fn test_option_scenario() {
    let int = |n: &i32| n.to_string();
    assert_eq!(OptionShowK.show_k(&Some(1), &int), "Some(1)");
    assert_eq!(OptionShowK.show_k(&None, &int), "None");
  }

  #[test]
  fn test_show_macro_mixes_plain_and_wrapped() {
    assert_eq!(show!("{} {}", 1, Some(1)), "1 Some(1)");
    assert_eq!(show!("no args"), "no args");
    assert_eq!(show!("{}: {}", "list", vec![1, 2],), "list: Vec(1, 2)");
  }

  #[test]
  fn test_show_macro_honours_format_spec() {
    assert_eq!(show!("[{:>5}]", 1), "[    1]");
    assert_eq!(show!("[{:<8}]", Some(1)), "[Some(1) ]");
    assert_eq!(show!("{:?}", Some(2)), show!("{}", Some(2)));
    assert_eq!(show!("{1} {0}", 1, None::<u8>), "None 1");
  }

  #[test]
  fn test_show_macro_accepts_prerendered() {
    let hidden = Shown::with::<OptionK, _, _, _>(&constant::<OptionK>("***"), &Some(1), &Canonical);
    assert_eq!(show!("token={}", hidden), "token=***");
  }

  #[test]
  fn test_show_macro_evaluates_left_to_right() {
    let counter = Counter::default();
    let next = || {
      counter.tick();
      counter.count()
    };
    assert_eq!(show!("{} {} {}", next(), next(), Some(next())), "1 2 Some(3)");
  }

  #[test]
  fn test_aggregate_scenario() {
    let foo = Foo {
      bar: Some(1),
      baz: Some("baz".to_owned()),
    };
    assert_eq!(foo.show(), "Foo(bar = Some(1), baz = Some(baz))");
    assert_eq!(Some(foo).show_k(), "Some(Foo(bar = Some(1), baz = Some(baz)))");
  }

  #[test]
  fn test_aggregate_narrow_layout() {
    let shown = ShowStruct::new("Foo")
      .with_config(RenderConfig::with_width(16))
      .field("bar", &Some(1))
      .field("baz", &None::<String>)
      .finish();
    let expect = expect![[r#"
        Foo(
          bar = Some(1),
          baz = None
        )"#]];
    expect.assert_eq(&shown);
  }

  #[test]
  fn test_derived_renderer_equals_show_k() {
    let int = |n: &i32| format!("#{n}");
    let derived = derive_renderer::<VecK, i32, _>(int);
    let value = vec![1, 2];
    assert_eq!(derived.render(&value), crate::VecShowK.show_k(&value, &int));
    assert_eq!(derived.render(&value), "Vec(#1, #2)");
  }

  #[test]
  fn test_constant_placeholder() {
    let placeholder = constant::<VecK>("Vec(..)");
    assert_eq!(vec![1, 2, 3].show_k_using(&placeholder, &Canonical), "Vec(..)");
  }
}
