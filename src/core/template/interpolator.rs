/// Resolves dashboard variable references in a piece of query text.
///
/// Injected into the translator so interpolation never reads ambient state.
pub trait Interpolator: Send + Sync {
    fn interpolate(&self, text: &str) -> String;
}

impl<F> Interpolator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn interpolate(&self, text: &str) -> String {
        self(text)
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInterpolator;

impl Interpolator for NoopInterpolator {
    fn interpolate(&self, text: &str) -> String {
        text.to_string()
    }
}
