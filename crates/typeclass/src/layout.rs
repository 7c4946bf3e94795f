//! Labelled renderings for user-defined aggregates.
//!
//! ```
//! use typeclass::{ShowStruct, Show};
//!
//! struct Foo {
//!   bar: Option<i32>,
//!   baz: Option<String>,
//! }
//!
//! impl Show for Foo {
//!   fn show(&self) -> String {
//!     ShowStruct::new("Foo")
//!       .field("bar", &self.bar)
//!       .field("baz", &self.baz)
//!       .finish()
//!   }
//! }
//!
//! let foo = Foo { bar: Some(1), baz: Some("baz".to_owned()) };
//! assert_eq!(foo.show(), "Foo(bar = Some(1), baz = Some(baz))");
//! ```

use base::pretty::{text_lines, DocAllocator, DocBuilder, PrettyShow, RcAllocator, RenderConfig};

use crate::show::{Render, Show};

/// Builds `Name(label = value, ...)`.
///
/// Fields stay on one line while they fit in the configured width and otherwise go one per line,
/// indented by two.
#[derive(Clone, Debug)]
pub struct ShowStruct {
  name: String,
  fields: Vec<(String, String)>,
  config: RenderConfig,
}

impl ShowStruct {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      fields: Vec::new(),
      config: RenderConfig::default(),
    }
  }

  pub fn with_config(mut self, config: RenderConfig) -> Self {
    self.config = config;
    self
  }

  pub fn field<T: Show + ?Sized>(self, label: impl Into<String>, value: &T) -> Self {
    let rendered = value.show();
    self.rendered_field(label, rendered)
  }

  pub fn field_with<A, R>(self, label: impl Into<String>, value: &A, renderer: &R) -> Self
  where
    A: ?Sized,
    R: Render<A> + ?Sized,
  {
    let rendered = renderer.render(value);
    self.rendered_field(label, rendered)
  }

  pub fn rendered_field(mut self, label: impl Into<String>, rendered: impl Into<String>) -> Self {
    self.fields.push((label.into(), rendered.into()));
    self
  }

  pub fn finish(&self) -> String {
    self.pretty_string(&self.config)
  }
}

impl PrettyShow for ShowStruct {
  fn pretty<'a>(&self, a: &'a RcAllocator) -> DocBuilder<'a, RcAllocator> {
    let fields = self.fields.iter().map(|(label, value)| {
      a.text(label.clone())
        .append(a.text(" = "))
        .append(text_lines(a, value))
    });
    enclose_fields(a, &self.name, fields)
  }
}

/// Builds `Name(value, ...)` with the same layout rules as [`ShowStruct`].
#[derive(Clone, Debug)]
pub struct ShowTuple {
  name: String,
  fields: Vec<String>,
  config: RenderConfig,
}

impl ShowTuple {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      fields: Vec::new(),
      config: RenderConfig::default(),
    }
  }

  pub fn with_config(mut self, config: RenderConfig) -> Self {
    self.config = config;
    self
  }

  pub fn field<T: Show + ?Sized>(mut self, value: &T) -> Self {
    self.fields.push(value.show());
    self
  }

  pub fn field_with<A, R>(mut self, value: &A, renderer: &R) -> Self
  where
    A: ?Sized,
    R: Render<A> + ?Sized,
  {
    self.fields.push(renderer.render(value));
    self
  }

  pub fn finish(&self) -> String {
    self.pretty_string(&self.config)
  }
}

impl PrettyShow for ShowTuple {
  fn pretty<'a>(&self, a: &'a RcAllocator) -> DocBuilder<'a, RcAllocator> {
    let fields = self.fields.iter().map(|value| text_lines(a, value));
    enclose_fields(a, &self.name, fields)
  }
}

// A constructor with no fields renders as its bare name.
fn enclose_fields<'a, I>(a: &'a RcAllocator, name: &str, fields: I) -> DocBuilder<'a, RcAllocator>
where
  I: ExactSizeIterator<Item = DocBuilder<'a, RcAllocator>>,
{
  if fields.len() == 0 {
    return a.text(name.to_owned());
  }
  let body = a.intersperse(fields, a.text(",").append(a.line()));
  a.text(name.to_owned()).append(
    a.line_()
      .append(body)
      .nest(2)
      .append(a.line_())
      .parens()
      .group(),
  )
}
