/// Boundary condition at the free end of a fin.
///
/// Both conditions fix `θ(0) = θ_b` at the base and decay toward ambient
/// along the fin. They differ in the shape of the closed-form solution:
///
/// - [`Adiabatic`](TipCondition::Adiabatic): `θ/θ_b = cosh(m(L−x)) / cosh(mL)`
/// - [`Convective`](TipCondition::Convective): `θ/θ_b = sinh(m(L−x)) / sinh(mL)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCondition {
    Adiabatic,
    Convective,
}

impl TipCondition {
    /// Returns `θ(x) / θ_b` given the dimensionless products `mL` and `mx`.
    ///
    /// Both ratios are rewritten with a common factor of `e^{−mx}` pulled out,
    /// so every exponential has a non-positive argument and the result stays
    /// finite however large `mL` becomes:
    ///
    /// ```text
    /// cosh(m(L−x)) / cosh(mL) = e^{−mx} (1 + e^{−2m(L−x)}) / (1 + e^{−2mL})
    /// sinh(m(L−x)) / sinh(mL) = e^{−mx} (1 − e^{−2m(L−x)}) / (1 − e^{−2mL})
    /// ```
    ///
    /// Callers guarantee `0 <= mx <= mL`.
    pub(super) fn excess_ratio(self, m_l: f64, m_x: f64) -> f64 {
        let decay = (-m_x).exp();
        let remaining = -2.0 * (m_l - m_x);
        let whole = -2.0 * m_l;
        match self {
            TipCondition::Adiabatic => decay * (1.0 + remaining.exp()) / (1.0 + whole.exp()),
            // `1 − e^{a}` is written as `−expm1(a)` to keep precision for small `mL`.
            TipCondition::Convective => decay * remaining.exp_m1() / whole.exp_m1(),
        }
    }
}
