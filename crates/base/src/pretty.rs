pub use pretty::{DocAllocator, DocBuilder, RcAllocator};

/// Layout options for documents produced through [`PrettyShow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
  /// Column at which grouped documents break onto multiple lines.
  pub width: usize,
}

impl RenderConfig {
  pub const DEFAULT_WIDTH: usize = 80;

  pub fn with_width(width: usize) -> Self {
    Self { width }
  }
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      width: Self::DEFAULT_WIDTH,
    }
  }
}

pub trait PrettyShow {
  fn pretty<'a>(&self, alloc: &'a RcAllocator) -> DocBuilder<'a, RcAllocator>;

  fn pretty_string(&self, config: &RenderConfig) -> String {
    self.pretty(&RcAllocator).pretty(config.width).to_string()
  }
}

/// Lays out an already rendered string.
///
/// Multi-line renderings keep their line structure: each line becomes a text fragment joined by
/// hard line breaks, so an enclosing `nest` indents the continuation lines.
pub fn text_lines<'a>(alloc: &'a RcAllocator, rendered: &str) -> DocBuilder<'a, RcAllocator> {
  alloc.intersperse(
    rendered.split('\n').map(|line| alloc.text(line.to_owned())),
    alloc.hardline(),
  )
}

#[cfg(test)]
mod tests {
  use expect_test::expect;

  use super::{text_lines, DocAllocator, DocBuilder, PrettyShow, RcAllocator, RenderConfig};

  struct Call(Vec<&'static str>);

  impl PrettyShow for Call {
    fn pretty<'a>(&self, a: &'a RcAllocator) -> DocBuilder<'a, RcAllocator> {
      let args = a.intersperse(
        self.0.iter().map(|arg| a.text(*arg)),
        a.text(",").append(a.line()),
      );
      a.text("f")
        .append(
          a.line_()
            .append(args)
            .nest(2)
            .append(a.line_())
            .parens()
            .group(),
        )
    }
  }

  #[test]
  fn test_default_width() {
    assert_eq!(RenderConfig::default().width, 80);
    assert_eq!(RenderConfig::with_width(8).width, 8);
  }

  #[test]
  fn test_pretty_string_respects_width() {
    let call = Call(vec!["alpha", "beta"]);
    assert_eq!(call.pretty_string(&RenderConfig::default()), "f(alpha, beta)");
    let expect = expect![[r#"
        f(
          alpha,
          beta
        )"#]];
    expect.assert_eq(&call.pretty_string(&RenderConfig::with_width(8)));
  }

  #[test]
  fn test_text_lines_keeps_line_breaks() {
    let doc = text_lines(&RcAllocator, "a\nb");
    assert_eq!(doc.pretty(80).to_string(), "a\nb");
  }
}
