//! Fixed-step ODE integration for the flight model.
//!
//! RK4 (Runge-Kutta 4th order) with a constant step and a terminating event:
//! integration stops at the first step where the event function changes sign
//! (the disc reaching the ground), and the final sample is interpolated onto
//! the event surface.

/// Trait representing an ODE system: dy/dt = f(t, y)
pub trait OdeSystem<const N: usize> {
    /// Compute the right-hand side of the ODE system
    fn rhs(&self, t: f64, state: &[f64; N]) -> [f64; N];
}

/// Trait for adding states with different weights.
pub trait StateAddMul {
    /// Returns `self + other * scalar`.
    fn add_mul(&self, other: &Self, scalar: f64) -> Self;
}

impl<const N: usize> StateAddMul for [f64; N] {
    #[inline(always)]
    fn add_mul(&self, other: &Self, scalar: f64) -> Self {
        let mut out = *self;
        for (o, d) in out.iter_mut().zip(other.iter()) {
            *o += d * scalar;
        }
        out
    }
}

/// Samples produced by an integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    pub t: Vec<f64>,
    pub states: Vec<[f64; N]>,
    /// True when the run ended on the event rather than the time limit.
    pub terminated_by_event: bool,
}

/// Why an integration run stopped early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegrationFailure {
    /// A state component became NaN or infinite at time `t`.
    NonFinite { t: f64 },
    /// `dt` is not positive, or `t_max / dt` is not a finite step count.
    InvalidStep { dt: f64, t_max: f64 },
}

/// Fixed-step RK4 integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RK4Integrator {
    pub dt: f64,
    pub t_max: f64,
}

impl RK4Integrator {
    pub fn new(dt: f64, t_max: f64) -> Self {
        Self { dt, t_max }
    }

    /// Integrate from `state0` until `event(state)` drops below zero or
    /// `t_max` is reached.
    ///
    /// The first sample is always `state0` at `t = 0`. When the event fires
    /// between two steps, the last sample is linearly interpolated so that
    /// the event function is zero there.
    pub fn integrate_until<S, F, const N: usize>(
        &self,
        system: &S,
        state0: [f64; N],
        event: F,
    ) -> Result<Solution<N>, IntegrationFailure>
    where
        S: OdeSystem<N>,
        F: Fn(&[f64; N]) -> f64,
    {
        let steps = (self.t_max / self.dt).ceil();
        if !(self.dt > 0.0 && steps.is_finite() && steps >= 0.0) {
            return Err(IntegrationFailure::InvalidStep { dt: self.dt, t_max: self.t_max });
        }
        let n_max = steps as usize;
        // Most throws land long before t_max.
        let capacity = n_max.min(4096) + 1;
        let mut t = Vec::with_capacity(capacity);
        let mut states = Vec::with_capacity(capacity);
        t.push(0.0);
        states.push(state0);

        let mut state = state0;
        let mut curr_t = 0.0;
        let mut previous_event = event(&state);

        for step in 1..=n_max {
            let next = rk4_step(system, &state, curr_t, self.dt);
            let next_t = step as f64 * self.dt;

            if next.iter().any(|v| !v.is_finite()) {
                return Err(IntegrationFailure::NonFinite { t: next_t });
            }

            let next_event = event(&next);
            if next_event < 0.0 && previous_event >= 0.0 {
                // Interpolate back onto the event surface.
                let frac = previous_event / (previous_event - next_event);
                t.push(curr_t + frac * self.dt);
                states.push(lerp_state(&state, &next, frac));
                return Ok(Solution { t, states, terminated_by_event: true });
            }

            t.push(next_t);
            states.push(next);
            state = next;
            curr_t = next_t;
            previous_event = next_event;
        }

        Ok(Solution { t, states, terminated_by_event: false })
    }
}

/// Single RK4 step.
#[inline(always)]
pub fn rk4_step<S: OdeSystem<N>, const N: usize>(
    system: &S,
    state: &[f64; N],
    t: f64,
    h: f64,
) -> [f64; N] {
    let h2 = 0.5 * h;

    // k1 = f(t, y)
    let k1 = system.rhs(t, state);

    // k2 = f(t + h/2, y + h/2 * k1)
    let k2 = system.rhs(t + h2, &state.add_mul(&k1, h2));

    // k3 = f(t + h/2, y + h/2 * k2)
    let k3 = system.rhs(t + h2, &state.add_mul(&k2, h2));

    // k4 = f(t + h, y + h * k3)
    let k4 = system.rhs(t + h, &state.add_mul(&k3, h));

    // y_new = y + h/6 * (k1 + 2*k2 + 2*k3 + k4)
    let sum = k1.add_mul(&k2, 2.0).add_mul(&k3, 2.0).add_mul(&k4, 1.0);
    state.add_mul(&sum, h / 6.0)
}

fn lerp_state<const N: usize>(a: &[f64; N], b: &[f64; N], frac: f64) -> [f64; N] {
    let mut out = *a;
    for i in 0..N {
        out[i] = a[i] + (b[i] - a[i]) * frac;
    }
    out
}
