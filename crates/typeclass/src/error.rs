/// Failures of runtime instance lookup and template assembly.
///
/// Rendering itself never fails; these only arise where a caller resolves instances dynamically
/// through a [`ShowKRegistry`](crate::registry::ShowKRegistry) or hands mismatched pieces to
/// [`try_interpolate`](crate::interp::try_interpolate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShowKError {
  #[error("no ShowK instance registered for `{kind}`")]
  NoRenderer { kind: &'static str },
  #[error("a ShowK instance for `{kind}` is already registered")]
  Duplicate { kind: &'static str },
  #[error("template with {args} arguments needs {} literal parts, got {parts}", .args + 1)]
  TemplateArity { parts: usize, args: usize },
}
