/// Aerodynamic model of a spinning flying disc.
///
/// Forces come from the disc's coefficient tables evaluated at the current
/// angle of attack. Lift acts perpendicular to the velocity, in the plane of
/// the velocity and the disc normal; drag opposes the velocity. The pitching
/// moment does not pitch a spinning disc, it precesses it: the roll angle
/// changes at `M / (I·ω)`.
///
/// # State
///
/// `[x, y, z, vx, vy, vz, roll]`. Pitch and yaw of the disc plane stay at
/// their release values.

use ndarray::{Array1, Array2};
use tracing::trace;

use crate::constants::Constants;
use crate::disc::Disc;
use crate::engine::{AeroSeries, FlightEngine, Shot};
use crate::error::SimulationError;
use crate::ode::{IntegrationFailure, OdeSystem, RK4Integrator};
use crate::params::LaunchParameters;
use crate::vector::{DiscFrame, Vec3};

/// Empirical spin fit, rad/s as a function of release speed in m/s.
const SPIN_QUADRATIC: f64 = -0.257;
const SPIN_LINEAR: f64 = 15.338;

/// Everything the model knows about the disc at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroSample {
    pub alpha_deg: f64,
    pub beta_deg: f64,
    pub lift: f64,
    pub drag: f64,
    pub moment: f64,
    pub roll_rate: f64,
    pub body_velocity: Vec3,
    pub acceleration: Vec3,
}

/// The bundled [`FlightEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiscEngine {
    pub constants: Constants,
}

impl DiscEngine {
    pub fn new(constants: Constants) -> Self {
        Self { constants }
    }
}

/// ODE system for one throw of one disc.
struct DiscFlightModel<'a> {
    disc: &'a Disc,
    constants: &'a Constants,
    omega: f64,
    /// Disc-plane pitch (rad), velocity pitch plus nose angle
    pitch: f64,
    yaw: f64,
}

impl DiscFlightModel<'_> {
    #[inline(always)]
    fn sample(&self, velocity: Vec3, roll: f64) -> AeroSample {
        evaluate(self.disc, self.constants, self.omega, velocity, roll, self.pitch, self.yaw)
    }
}

impl OdeSystem<7> for DiscFlightModel<'_> {
    fn rhs(&self, _t: f64, state: &[f64; 7]) -> [f64; 7] {
        let [_x, _y, _z, vx, vy, vz, roll] = *state;
        let s = self.sample(Vec3::new(vx, vy, vz), roll);
        [
            vx,
            vy,
            vz,
            s.acceleration.x,
            s.acceleration.y,
            s.acceleration.z,
            s.roll_rate,
        ]
    }
}

/// Forces and angles for a disc moving at `velocity` with the given attitude.
pub fn evaluate(
    disc: &Disc,
    constants: &Constants,
    omega: f64,
    velocity: Vec3,
    roll: f64,
    pitch: f64,
    yaw: f64,
) -> AeroSample {
    let frame = DiscFrame::from_attitude(roll, pitch, yaw);
    let body = frame.to_body(&velocity);

    // --- 1. Flow angles ---
    // Air arriving from below the disc plane is a positive angle of attack.
    let in_plane = (body.x * body.x + body.y * body.y).sqrt();
    let alpha_deg = (-body.z).atan2(in_plane).to_degrees();
    let beta_deg = body.y.atan2(body.x).to_degrees();

    // --- 2. Force magnitudes ---
    let profile = &disc.profile;
    let coeffs = profile.coefficients(alpha_deg);
    let speed = velocity.magnitude();
    let q = constants.dynamic_pressure(speed, profile.area());
    let lift = q * coeffs.cl;
    let drag = q * coeffs.cd;
    let moment = q * profile.diameter * coeffs.cm;

    // --- 3. Directions ---
    let mut force = Vec3::zero();
    if let Some(v_hat) = velocity.normalized() {
        let lift_dir = frame
            .normal
            .sub(&v_hat.mul(frame.normal.dot(&v_hat)))
            .normalized()
            .unwrap_or_else(Vec3::zero);
        force = lift_dir.mul(lift).sub(&v_hat.mul(drag));
    }
    let acceleration = force
        .mul(1.0 / disc.mass)
        .add(&Vec3::new(0.0, 0.0, -constants.g));

    // --- 4. Gyroscopic precession ---
    let spin_momentum = disc.spin_inertia() * omega;
    let max_rate = constants.max_roll_rate;
    let roll_rate = if moment == 0.0 {
        0.0
    } else if spin_momentum > 1e-12 {
        (moment / spin_momentum).clamp(-max_rate, max_rate)
    } else {
        max_rate.copysign(moment)
    };

    AeroSample {
        alpha_deg,
        beta_deg,
        lift,
        drag,
        moment,
        roll_rate,
        body_velocity: body,
        acceleration,
    }
}

impl FlightEngine for DiscEngine {
    fn empirical_spin(&self, _disc: &Disc, speed: f64) -> f64 {
        (SPIN_QUADRATIC * speed * speed + SPIN_LINEAR * speed).max(0.0)
    }

    fn shoot(
        &self,
        disc: &Disc,
        launch: &LaunchParameters,
        omega: f64,
    ) -> Result<Shot, SimulationError> {
        let pitch = launch.pitch.to_radians();
        let yaw = launch.yaw.to_radians();
        let model = DiscFlightModel {
            disc,
            constants: &self.constants,
            omega,
            pitch: pitch + launch.nose_angle.to_radians(),
            yaw,
        };

        let direction = Vec3::new(pitch.cos() * yaw.cos(), pitch.cos() * yaw.sin(), pitch.sin());
        let v0 = direction.mul(launch.speed);
        let p0 = launch.position();
        let state0 = [p0.x, p0.y, p0.z, v0.x, v0.y, v0.z, launch.roll_angle.to_radians()];

        let integrator = RK4Integrator::new(self.constants.dt, self.constants.max_flight_time);
        let solution = integrator
            .integrate_until(&model, state0, |s| s[2])
            .map_err(|failure| match failure {
                IntegrationFailure::NonFinite { t } => SimulationError::NonFiniteState { t },
                IntegrationFailure::InvalidStep { dt, t_max } => SimulationError::InvalidStep { dt, t_max },
            })?;

        let n = solution.states.len();
        if n < 2 {
            return Err(SimulationError::TooFewSamples { samples: n });
        }
        trace!(
            disc = %disc.id,
            samples = n,
            landed = solution.terminated_by_event,
            "throw integrated"
        );

        let mut position = Array2::zeros((3, n));
        let mut velocity = Array2::zeros((3, n));
        let mut attitude = Array2::zeros((3, n));
        for (i, s) in solution.states.iter().enumerate() {
            for k in 0..3 {
                position[[k, i]] = s[k];
                velocity[[k, i]] = s[k + 3];
            }
            attitude[[0, i]] = s[6];
            attitude[[1, i]] = model.pitch;
            attitude[[2, i]] = yaw;
        }

        Ok(Shot {
            t: Array1::from_vec(solution.t),
            position,
            velocity,
            attitude,
        })
    }

    fn post_process(
        &self,
        disc: &Disc,
        shot: &Shot,
        omega: f64,
    ) -> Result<AeroSeries, SimulationError> {
        let n = shot.len();
        if n < 2 {
            return Err(SimulationError::TooFewSamples { samples: n });
        }
        for (series, matrix) in [
            ("position", &shot.position),
            ("velocity", &shot.velocity),
            ("attitude", &shot.attitude),
        ] {
            if matrix.ncols() != n {
                return Err(SimulationError::LengthMismatch {
                    series,
                    expected: n,
                    actual: matrix.ncols(),
                });
            }
        }

        let mut arc = Array1::zeros(n);
        let mut alpha = Array1::zeros(n);
        let mut beta = Array1::zeros(n);
        let mut lift = Array1::zeros(n);
        let mut drag = Array1::zeros(n);
        let mut moment = Array1::zeros(n);
        let mut roll_rate = Array1::zeros(n);
        let mut body_velocity = Array2::zeros((3, n));

        let mut travelled = 0.0;
        for i in 0..n {
            if i > 0 {
                let dx = shot.position[[0, i]] - shot.position[[0, i - 1]];
                let dy = shot.position[[1, i]] - shot.position[[1, i - 1]];
                travelled += (dx * dx + dy * dy).sqrt();
            }
            let v = Vec3::new(
                shot.velocity[[0, i]],
                shot.velocity[[1, i]],
                shot.velocity[[2, i]],
            );
            let s = evaluate(
                disc,
                &self.constants,
                omega,
                v,
                shot.attitude[[0, i]],
                shot.attitude[[1, i]],
                shot.attitude[[2, i]],
            );

            arc[i] = travelled;
            alpha[i] = s.alpha_deg;
            beta[i] = s.beta_deg;
            lift[i] = s.lift;
            drag[i] = s.drag;
            moment[i] = s.moment;
            roll_rate[i] = s.roll_rate;
            body_velocity[[0, i]] = s.body_velocity.x;
            body_velocity[[1, i]] = s.body_velocity.y;
            body_velocity[[2, i]] = s.body_velocity.z;
        }

        Ok(AeroSeries {
            arc,
            alpha,
            beta,
            lift,
            drag,
            moment,
            roll_rate,
            body_velocity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::tests::flat_profile;
    use crate::disc::DiscId;
    use approx::assert_relative_eq;

    fn disc(mass: f64) -> Disc {
        Disc::new(DiscId::new("flat"), flat_profile(), mass)
    }

    #[test]
    fn test_empirical_spin() {
        let engine = DiscEngine::default();
        let omega = engine.empirical_spin(&disc(0.175), 24.0);
        assert_relative_eq!(omega, -0.257 * 576.0 + 15.338 * 24.0);
        assert_eq!(engine.empirical_spin(&disc(0.175), 100.0), 0.0);
    }

    #[test]
    fn test_flat_disc_alpha_matches_nose_angle() {
        let constants = Constants::new();
        // Level flight, disc pitched 5 degrees up relative to the velocity.
        let s = evaluate(
            &disc(0.175),
            &constants,
            200.0,
            Vec3::new(20.0, 0.0, 0.0),
            0.0,
            5.0_f64.to_radians(),
            0.0,
        );
        assert_relative_eq!(s.alpha_deg, 5.0, epsilon = 1e-9);
        assert_relative_eq!(s.beta_deg, 0.0, epsilon = 1e-9);
        assert!(s.lift > 0.0);
        assert!(s.drag > 0.0);
        // Lift points up, drag points back.
        assert!(s.acceleration.x < 0.0);
    }

    #[test]
    fn test_roll_rate_is_capped_without_spin() {
        let constants = Constants::new();
        let s = evaluate(
            &disc(0.175),
            &constants,
            0.0,
            Vec3::new(20.0, 0.0, 0.0),
            0.0,
            0.0,
            0.0,
        );
        assert_eq!(s.roll_rate.abs(), constants.max_roll_rate);
    }

    #[test]
    fn test_shot_lands_and_series_align() {
        let engine = DiscEngine::default();
        let d = disc(0.175);
        let launch = LaunchParameters::default();
        let omega = engine.empirical_spin(&d, launch.speed);

        let shot = engine.shoot(&d, &launch, omega).unwrap();
        let n = shot.len();
        assert!(n > 10);
        assert_eq!(shot.position.ncols(), n);
        assert_relative_eq!(shot.position[[2, 0]], 1.3);
        assert_relative_eq!(shot.position[[2, n - 1]], 0.0, epsilon = 1e-9);
        assert!(shot.position[[0, n - 1]] > 10.0);

        let aero = engine.post_process(&d, &shot, omega).unwrap();
        assert_eq!(aero.arc.len(), n);
        assert_eq!(aero.body_velocity.ncols(), n);
        assert_eq!(aero.arc[0], 0.0);
        assert!(aero.arc.windows(2).into_iter().all(|w| w[1] >= w[0]));
        // Forward body velocity at release equals the speed times cos(nose).
        assert_relative_eq!(aero.body_velocity[[0, 0]], launch.speed, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_velocity_gives_nan_acceleration() {
        let s = evaluate(
            &disc(0.175),
            &Constants::new(),
            200.0,
            Vec3::new(f64::NAN, 0.0, 0.0),
            0.0,
            0.0,
            0.0,
        );
        assert!(s.alpha_deg.is_nan());
        assert!(!s.acceleration.z.is_finite());
    }

    #[test]
    fn test_divergent_throw_is_an_error() {
        let d = disc(0.175);
        let launch = LaunchParameters::default();

        let engine = DiscEngine::new(Constants { g: f64::INFINITY, ..Constants::new() });
        let err = engine.shoot(&d, &launch, 300.0).unwrap_err();
        assert!(matches!(err, SimulationError::NonFiniteState { .. }));

        let engine = DiscEngine::new(Constants { dt: 0.0, ..Constants::new() });
        let err = engine.shoot(&d, &launch, 300.0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidStep { .. }));
    }

    #[test]
    fn test_post_process_rejects_ragged_shot() {
        let engine = DiscEngine::default();
        let d = disc(0.175);
        let shot = Shot {
            t: Array1::from_vec(vec![0.0, 0.1, 0.2]),
            position: Array2::zeros((3, 3)),
            velocity: Array2::zeros((3, 2)),
            attitude: Array2::zeros((3, 3)),
        };
        let err = engine.post_process(&d, &shot, 100.0).unwrap_err();
        assert!(matches!(err, SimulationError::LengthMismatch { series: "velocity", .. }));
    }
}
