/// A PDF number, which can be integer or real.
///
/// The format does not mandate particular bit widths, so `i64` and `f64` were chosen,
/// respectively. Reals are serialized through the default `f64` formatting, which never produces
/// an exponent for the magnitudes appearing in practice.
#[derive(Debug, PartialEq, Clone)]
pub enum Number {
    Int(i64),
    Real(f64)
}
