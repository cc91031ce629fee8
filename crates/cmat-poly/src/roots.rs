//! Durand–Kerner root finding with deflation and polishing.
//!
//! All roots are refined simultaneously. An isolated guess at which the
//! working polynomial vanishes is extracted as a root and divided out, after
//! which the remaining guesses restart from fresh seeds for the reduced degree.
//!
//! Simultaneous iteration approaches a repeated root only linearly and leaves
//! its guesses scattered on a small circle around it, so the final guesses are
//! grouped into clusters. A cluster of `m` guesses is replaced by its mean,
//! polished with Newton's method on the `(m-1)`-th derivative and accepted as
//! an `m`-fold root only when every lower derivative vanishes there. Every
//! other guess is polished with Newton's method on the polynomial itself.

use cmat_complex::{precision, Complex, ComputeForm};
use tracing::{debug, warn};

use crate::polynomial::Polynomial;

/// Configuration for [`Polynomial::find_roots`].
#[derive(Clone, Debug)]
pub struct RootFinderConfig {
    /// Maximum number of passes (corrections and deflations).
    pub max_iterations: usize,
    /// Significant digits at which successive guesses count as converged.
    pub convergence_digits: usize,
    /// Decimal places kept in the returned roots.
    pub round_decimals: u32,
    /// Rotation applied to the roots-of-unity seeds, in radians.
    pub seed_phase: f64,
    /// Arithmetic used for the iteration.
    pub form: ComputeForm,
    /// Distance, relative to `max(1, |guess|)`, within which guesses are
    /// treated as approximations of one repeated root.
    pub cluster_tolerance: f64,
    /// Residual, relative to `Σ |a_k| |x|^k`, under which a polynomial
    /// counts as vanishing at `x`.
    pub residual_tolerance: f64,
    /// Newton steps spent polishing each root.
    pub polish_iterations: usize,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            convergence_digits: 9,
            round_decimals: 3,
            seed_phase: 0.4,
            form: ComputeForm::Polar,
            cluster_tolerance: 5e-2,
            residual_tolerance: 1e-9,
            polish_iterations: 100,
        }
    }
}

/// Returns the `n`-th roots of `e^{i n phase}`, i.e. the roots of unity
/// rotated by `phase`.
fn seed_guesses(n: usize, phase: f64) -> Vec<Complex> {
    #[allow(clippy::cast_precision_loss)]
    let angle = n as f64 * phase;
    Complex::from_polar(1.0, angle).roots(n)
}

/// Root of `c1 x + c0`.
fn linear_root(poly: &Polynomial, form: ComputeForm) -> Complex {
    let c1 = poly.coefficient(1);
    (-poly.coefficient(0)).divide(&c1, form)
}

fn cluster_radius(guess: &Complex, config: &RootFinderConfig) -> f64 {
    config.cluster_tolerance * guess.abs().max(1.0)
}

/// True when no other guess lies within the cluster radius of `guesses[i]`.
fn is_isolated(i: usize, guesses: &[Complex], config: &RootFinderConfig) -> bool {
    let radius = cluster_radius(&guesses[i], config);
    guesses
        .iter()
        .enumerate()
        .all(|(j, other)| j == i || other.subtract(&guesses[i]).abs() > radius)
}

/// One simultaneous Weierstrass correction of every guess.
fn weierstrass_step(poly: &Polynomial, guesses: &[Complex], form: ComputeForm) -> Vec<Complex> {
    guesses
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let denominator = guesses
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(Complex::ONE, |acc, (_, other)| {
                    acc.multiply(&g.subtract(other), form)
                });
            if denominator.is_zero() {
                // Coincident guesses; nudge apart.
                return g.add(&Complex::from_cartesian(1e-3, 1e-3));
            }
            g.subtract(&poly.substitute(g, form).divide(&denominator, form))
        })
        .collect()
}

/// True when `|p(x)|` is negligible next to the size of its terms at `x`.
fn vanishes(p: &Polynomial, x: &Complex, config: &RootFinderConfig) -> bool {
    let magnitude = x.abs();
    let scale: f64 = p
        .terms()
        .iter()
        .map(|(&power, c)| c.abs() * magnitude.powi(i32::try_from(power).unwrap_or(i32::MAX)))
        .sum();
    p.substitute(x, config.form).abs() <= config.residual_tolerance * scale
}

/// Newton's method on `f`, returning the iterate with the smallest residual.
fn newton(f: &Polynomial, df: &Polynomial, start: Complex, config: &RootFinderConfig) -> Complex {
    let form = config.form;
    let mut x = start;
    let mut best = (start, f.substitute(&start, form).abs());
    for _ in 0..config.polish_iterations {
        let value = f.substitute(&x, form);
        let residual = value.abs();
        if residual < best.1 {
            best = (x, residual);
        }
        let slope = df.substitute(&x, form);
        if value.is_zero() || slope.is_zero() {
            break;
        }
        let next = x.subtract(&value.divide(&slope, form));
        if next.equals(&x, precision::STORAGE_DIGITS) {
            break;
        }
        x = next;
    }
    let residual = f.substitute(&x, form).abs();
    if residual < best.1 {
        best = (x, residual);
    }
    best.0
}

/// Polishes the mean of `cluster` as a repeated root.
///
/// `derivatives[j]` is the `j`-th derivative of the polynomial. Returns the
/// root and its multiplicity, which may exceed the cluster size when further
/// derivatives vanish, or `None` when a lower derivative does not vanish.
fn settle_cluster(
    derivatives: &[Polynomial],
    cluster: &[Complex],
    config: &RootFinderConfig,
) -> Option<(Complex, usize)> {
    let mut multiplicity = cluster.len();
    #[allow(clippy::cast_precision_loss)]
    let center = cluster.iter().copied().sum::<Complex>() * (1.0 / multiplicity as f64);
    let mut root = newton(
        &derivatives[multiplicity - 1],
        &derivatives[multiplicity],
        center,
        config,
    );
    if !(0..multiplicity).all(|j| vanishes(&derivatives[j], &root, config)) {
        return None;
    }
    while multiplicity + 1 < derivatives.len() && vanishes(&derivatives[multiplicity], &root, config) {
        multiplicity += 1;
        root = newton(
            &derivatives[multiplicity - 1],
            &derivatives[multiplicity],
            root,
            config,
        );
    }
    Some((root, multiplicity))
}

/// Groups the candidates into clusters and polishes each against `poly`.
fn refine(poly: &Polynomial, candidates: Vec<Complex>, config: &RootFinderConfig) -> Vec<Complex> {
    let degree = poly.degree().unwrap_or(0);
    if degree == 0 {
        return candidates;
    }
    let derivatives: Vec<Polynomial> =
        std::iter::successors(Some(poly.clone()), |p| Some(p.derivative()))
            .take(degree + 1)
            .collect();

    let mut pending = candidates;
    let mut roots = Vec::with_capacity(pending.len());
    while let Some(seed) = pending.pop() {
        let radius = cluster_radius(&seed, config);
        let (mut cluster, rest): (Vec<Complex>, Vec<Complex>) = pending
            .into_iter()
            .partition(|g| g.subtract(&seed).abs() <= radius);
        pending = rest;
        cluster.push(seed);

        match settle_cluster(&derivatives, &cluster, config) {
            Some((root, multiplicity)) => {
                let mut count = cluster.len();
                while count < multiplicity && !pending.is_empty() {
                    let nearest = pending
                        .iter()
                        .enumerate()
                        .min_by(|(_, a), (_, b)| {
                            a.subtract(&root).abs().total_cmp(&b.subtract(&root).abs())
                        })
                        .map_or(0, |(i, _)| i);
                    pending.swap_remove(nearest);
                    count += 1;
                }
                if multiplicity > 1 {
                    debug!(root = %root, multiplicity, "settled repeated root");
                }
                roots.extend(std::iter::repeat(root).take(count));
            }
            None => roots.extend(
                cluster
                    .iter()
                    .map(|g| newton(&derivatives[0], &derivatives[1], *g, config)),
            ),
        }
    }
    roots
}

impl Polynomial {
    /// Finds every complex root, repeated according to multiplicity.
    ///
    /// Constant and zero polynomials have no roots. The result is rounded to
    /// `config.round_decimals` places; see [`Polynomial::find_roots_unrounded`]
    /// for the full-precision values.
    #[must_use]
    pub fn find_roots(&self, config: &RootFinderConfig) -> Vec<Complex> {
        self.find_roots_unrounded(config)
            .iter()
            .map(|root| root.fixed(config.round_decimals))
            .collect()
    }

    /// Finds every complex root at full stored precision.
    ///
    /// When the iteration budget runs out the polished guesses are returned
    /// and a warning is logged for any that does not satisfy the polynomial.
    #[must_use]
    pub fn find_roots_unrounded(&self, config: &RootFinderConfig) -> Vec<Complex> {
        let form = config.form;
        let (Some(degree), Some(lead)) = (self.degree(), self.leading_coefficient()) else {
            return Vec::new();
        };
        if degree == 0 {
            return Vec::new();
        }

        let mut roots = Vec::with_capacity(degree);

        // Factor out x^k exactly.
        let zero_roots = self.lowest_power().unwrap_or(0);
        roots.extend(std::iter::repeat(Complex::ZERO).take(zero_roots));
        let monic = Polynomial::from_terms(
            self.terms()
                .iter()
                .map(|(&power, &c)| (power - zero_roots, c.divide(&lead, form))),
        );
        let mut current = monic.clone();
        let mut n = degree - zero_roots;

        debug!(degree, zero_roots, polynomial = %self, "finding roots");

        let mut candidates = Vec::with_capacity(n);
        let mut guesses = seed_guesses(n, config.seed_phase);
        let mut iterations = 0;
        let mut converged = false;

        while n > 1 && !converged && iterations < config.max_iterations {
            iterations += 1;

            let found: Vec<Complex> = (0..guesses.len())
                .filter(|&i| {
                    current.substitute(&guesses[i], form).is_zero()
                        && is_isolated(i, &guesses, config)
                })
                .map(|i| guesses[i])
                .collect();

            if !found.is_empty() {
                for root in found {
                    current = current.deflate(&root, form);
                    candidates.push(root);
                    debug!(root = %root, remaining = current.degree().unwrap_or(0), "deflated root");
                }
                n = current.degree().unwrap_or(0);
                guesses = seed_guesses(n, config.seed_phase);
                continue;
            }

            let next = weierstrass_step(&current, &guesses, form);
            converged = next
                .iter()
                .zip(&guesses)
                .all(|(a, b)| a.equals(b, config.convergence_digits));
            guesses = next;
        }

        match n {
            0 => {}
            1 => candidates.push(linear_root(&current, form)),
            _ => {
                if converged {
                    debug!(iterations, "root finder converged");
                } else {
                    debug!(iterations, remaining = n, "guesses stalled; settling clusters");
                }
                candidates.extend(guesses);
            }
        }

        let refined = refine(&monic, candidates, config);
        let unresolved = refined
            .iter()
            .filter(|root| !vanishes(&monic, root, config))
            .count();
        if unresolved > 0 {
            warn!(
                iterations,
                unresolved, "root finder exhausted its iteration budget; returning best guesses"
            );
        }
        roots.extend(refined);
        roots
    }
}
